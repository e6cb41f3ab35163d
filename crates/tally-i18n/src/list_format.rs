//! Locale-aware conjunction list formatting
//!
//! Joins items into a human-readable list with the locale's separators and
//! conjunction word ("a, b, and c" / "a, b y c"). The parts-level API keeps
//! input items distinguishable from join-contributed text, which is what
//! lets rich message elements survive formatting intact.

use crate::locale::Locale;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// One piece of a formatted list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPart {
    /// An input item, identified by its position in the input
    Element { index: usize, text: String },
    /// Connector text contributed by the join itself
    Literal { text: String },
}

/// A rich element with a textual content field
pub trait MessageElement {
    fn content(&self) -> &str;
}

/// Plain connector text emitted between elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    pub content: String,
}

/// Output of [`ConjunctionFormatter::format_element_list`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFragment<E> {
    /// An original input element, moved through unchanged
    Element(E),
    /// Join-contributed text
    Text(TextFragment),
}

/// Long-style conjunction list formatter for a single locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConjunctionFormatter {
    locale: Locale,
}

impl ConjunctionFormatter {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale: locale.canonicalize(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Join items into a single localized list string
    pub fn format<S: AsRef<str>>(&self, items: &[S]) -> String {
        self.format_to_parts(items)
            .into_iter()
            .map(|part| match part {
                ListPart::Element { text, .. } => text,
                ListPart::Literal { text } => text,
            })
            .collect()
    }

    /// Join items, keeping input text and connector text apart
    ///
    /// Every input item appears exactly once, in order; characters
    /// contributed by the join appear only in `Literal` parts.
    pub fn format_to_parts<S: AsRef<str>>(&self, items: &[S]) -> Vec<ListPart> {
        let element = |index: usize| ListPart::Element {
            index,
            text: items[index].as_ref().to_string(),
        };

        match items.len() {
            0 => Vec::new(),
            1 => vec![element(0)],
            2 => vec![
                element(0),
                ListPart::Literal {
                    text: self.pair_separator(items[1].as_ref()),
                },
                element(1),
            ],
            len => {
                let mut parts = Vec::with_capacity(2 * len - 1);
                parts.push(element(0));
                for index in 1..len - 1 {
                    parts.push(ListPart::Literal {
                        text: ", ".to_string(),
                    });
                    parts.push(element(index));
                }
                parts.push(ListPart::Literal {
                    text: self.end_separator(items[len - 1].as_ref()),
                });
                parts.push(element(len - 1));
                parts
            }
        }
    }

    /// Format rich elements, re-threading the originals through the join
    ///
    /// The textual contents are formatted as a list, then each input
    /// element is moved (not cloned) back into its slot in the output,
    /// with connector text emitted as [`ListFragment::Text`] in between.
    pub fn format_element_list<E: MessageElement>(&self, elements: Vec<E>) -> Vec<ListFragment<E>> {
        let contents: Vec<String> = elements
            .iter()
            .map(|element| element.content().to_string())
            .collect();
        let parts = self.format_to_parts(&contents);

        let mut slots: Vec<Option<E>> = elements.into_iter().map(Some).collect();
        let mut fragments = Vec::with_capacity(parts.len());
        for part in parts {
            match part {
                // Each index appears exactly once, so the slot is always occupied.
                ListPart::Element { index, .. } => {
                    if let Some(element) = slots[index].take() {
                        fragments.push(ListFragment::Element(element));
                    }
                }
                ListPart::Literal { text } => {
                    fragments.push(ListFragment::Text(TextFragment { content: text }));
                }
            }
        }
        fragments
    }

    /// Separator for a two-item list
    fn pair_separator(&self, following: &str) -> String {
        match self.locale.abbreviation() {
            Locale::Spanish => format!(" {} ", spanish_conjunction(following)),
            _ => " and ".to_string(),
        }
    }

    /// Separator before the final item of a longer list
    fn end_separator(&self, following: &str) -> String {
        match self.locale.abbreviation() {
            Locale::Spanish => format!(" {} ", spanish_conjunction(following)),
            _ => ", and ".to_string(),
        }
    }
}

/// Spanish conjunction, with the CLDR `y` → `e` substitution before words
/// that start with an /i/ sound ("Irene e Inés", but "agua y hielo")
fn spanish_conjunction(following: &str) -> &'static str {
    if starts_with_i_sound(following) {
        "e"
    } else {
        "y"
    }
}

fn starts_with_i_sound(word: &str) -> bool {
    let word = word.trim_start().to_lowercase();
    if word.starts_with("hi") {
        // "hie"/"hia" open a diphthong, so the conjunction stays "y"
        return !word.starts_with("hie") && !word.starts_with("hia");
    }
    word.starts_with('i') || word.starts_with('í')
}

/// Lazily-built formatter per canonical locale
///
/// Exactly one formatter instance exists per distinct locale key; it is
/// built on first use and reused for the life of the process.
#[derive(Debug, Default)]
pub struct ListFormatterTable {
    formatters: RwLock<HashMap<Locale, Arc<ConjunctionFormatter>>>,
}

impl ListFormatterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get (building if necessary) the formatter for a locale
    pub fn get(&self, locale: Locale) -> Arc<ConjunctionFormatter> {
        let locale = locale.canonicalize();

        {
            let formatters = self.formatters.read().unwrap();
            if let Some(formatter) = formatters.get(&locale) {
                return Arc::clone(formatter);
            }
        }

        let mut formatters = self.formatters.write().unwrap();
        Arc::clone(
            formatters
                .entry(locale)
                .or_insert_with(|| Arc::new(ConjunctionFormatter::new(locale))),
        )
    }
}
