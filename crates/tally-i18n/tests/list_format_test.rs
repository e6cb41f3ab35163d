//! Tests for locale-aware conjunction list formatting

use tally_common::Environment;
use tally_i18n::{
    ConjunctionFormatter, ListFragment, ListPart, Locale, Localizer, MessageElement, ResourceTable,
};

/// Rich element stand-in with an identity so re-threading is observable
#[derive(Debug, Clone, PartialEq, Eq)]
struct Mention {
    id: usize,
    content: String,
}

impl Mention {
    fn new(id: usize, content: &str) -> Self {
        Self {
            id,
            content: content.to_string(),
        }
    }
}

impl MessageElement for Mention {
    fn content(&self) -> &str {
        &self.content
    }
}

#[test]
fn test_english_conjunction_list() {
    let formatter = ConjunctionFormatter::new(Locale::English);

    assert_eq!(formatter.format(&["a", "b", "c"]), "a, b, and c");
    assert_eq!(formatter.format(&["a", "b"]), "a and b");
    assert_eq!(formatter.format(&["a"]), "a");
    assert_eq!(formatter.format::<&str>(&[]), "");
}

#[test]
fn test_spanish_conjunction_list() {
    let formatter = ConjunctionFormatter::new(Locale::SpanishSpain);

    assert_eq!(formatter.format(&["a", "b", "c"]), "a, b y c");
    assert_eq!(formatter.format(&["a", "b"]), "a y b");
}

#[test]
fn test_spanish_conjunction_before_i_sound() {
    let formatter = ConjunctionFormatter::new(Locale::Spanish);

    assert_eq!(formatter.format(&["Irene", "Inés"]), "Irene e Inés");
    assert_eq!(formatter.format(&["padres", "hijos"]), "padres e hijos");
    // Diphthongs keep "y".
    assert_eq!(formatter.format(&["agua", "hielo"]), "agua y hielo");
}

#[test]
fn test_parts_keep_elements_and_literals_apart() {
    let formatter = ConjunctionFormatter::new(Locale::English);
    let parts = formatter.format_to_parts(&["x", "y", "z"]);

    let element_indexes: Vec<usize> = parts
        .iter()
        .filter_map(|part| match part {
            ListPart::Element { index, .. } => Some(*index),
            ListPart::Literal { .. } => None,
        })
        .collect();
    assert_eq!(element_indexes, vec![0, 1, 2]);

    let joined: String = parts
        .iter()
        .map(|part| match part {
            ListPart::Element { text, .. } => text.as_str(),
            ListPart::Literal { text } => text.as_str(),
        })
        .collect();
    assert_eq!(joined, "x, y, and z");
}

#[test]
fn test_element_list_threads_originals_through() {
    let localizer = Localizer::new(ResourceTable::new(), Environment::Development);

    let elements = vec![Mention::new(1, "x"), Mention::new(2, "y")];
    let fragments = localizer.format_element_list(Locale::English, elements);

    let concatenated: String = fragments
        .iter()
        .map(|fragment| match fragment {
            ListFragment::Element(mention) => mention.content.clone(),
            ListFragment::Text(text) => text.content.clone(),
        })
        .collect();
    assert_eq!(
        concatenated,
        localizer.format_list(Locale::English, &["x", "y"])
    );

    let ids: Vec<usize> = fragments
        .iter()
        .filter_map(|fragment| match fragment {
            ListFragment::Element(mention) => Some(mention.id),
            ListFragment::Text(_) => None,
        })
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_element_list_separators_are_text_fragments() {
    let localizer = Localizer::new(ResourceTable::new(), Environment::Development);

    let elements = vec![
        Mention::new(1, "rent"),
        Mention::new(2, "groceries"),
        Mention::new(3, "travel"),
    ];
    let fragments = localizer.format_element_list(Locale::English, elements);

    assert_eq!(fragments.len(), 5);
    assert!(matches!(fragments[0], ListFragment::Element(_)));
    assert!(matches!(
        &fragments[1],
        ListFragment::Text(text) if text.content == ", "
    ));
    assert!(matches!(fragments[2], ListFragment::Element(_)));
    assert!(matches!(
        &fragments[3],
        ListFragment::Text(text) if text.content == ", and "
    ));
    assert!(matches!(fragments[4], ListFragment::Element(_)));
}

#[test]
fn test_localizer_format_list() {
    let localizer = Localizer::new(ResourceTable::new(), Environment::Development);

    assert_eq!(
        localizer.format_list(Locale::English, &["a", "b", "c"]),
        "a, b, and c"
    );
    assert_eq!(localizer.format_list(Locale::English, &["a"]), "a");
    assert_eq!(localizer.format_list::<&str>(Locale::English, &[]), "");
    assert_eq!(
        localizer.format_list(Locale::SpanishSpain, &["a", "b", "c"]),
        "a, b y c"
    );
}

#[test]
fn test_legacy_alias_uses_regional_formatter() {
    let localizer = Localizer::new(ResourceTable::new(), Environment::Development);

    assert_eq!(
        localizer.format_list(Locale::SpanishSpainLegacy, &["a", "b"]),
        localizer.format_list(Locale::SpanishSpain, &["a", "b"])
    );
}
