//! Demonstration of the translation resolver
//!
//! Loads the shipped JSON catalogs, registers a few template phrases, and
//! walks through resolution, fallback, pluralization, and list formatting.

use std::path::Path;
use tally_common::{init_dev_logging, Environment};
use tally_i18n::{
    translation_context, CurrentLocale, Locale, Localizer, PluralForms, ResourceTable,
    TemplateOutput,
};

fn main() -> anyhow::Result<()> {
    init_dev_logging()?;

    let mut resources = ResourceTable::new();

    // Catalog location depends on whether we run from the workspace root
    // or the crate directory.
    let base = if Path::new("locales").exists() {
        "locales"
    } else {
        "crates/tally-i18n/locales"
    };
    let loaded = resources.load_dir(base)?;
    println!("Loaded {loaded} phrases from {base}\n");

    resources.set_template(Locale::English, "report.greeting", |ctx| {
        TemplateOutput::Text(format!("Hello, {}!", ctx.param_text("name")))
    });
    resources.set_template(Locale::SpanishSpain, "report.greeting", |ctx| {
        TemplateOutput::Text(format!("¡Hola, {}!", ctx.param_text("name")))
    });
    resources.set_template(Locale::English, "expense.count", |ctx| {
        let count = ctx.count.unwrap_or(0);
        TemplateOutput::Plural(
            PluralForms::new(format!("{count} expenses")).one(format!("{count} expense")),
        )
    });
    resources.set_template(Locale::SpanishSpain, "expense.count", |ctx| {
        let count = ctx.count.unwrap_or(0);
        TemplateOutput::Plural(
            PluralForms::new(format!("{count} gastos")).one(format!("{count} gasto")),
        )
    });

    let localizer = Localizer::new(resources, Environment::from_env()?);

    // The preferred locale is owned by the session layer; we snapshot it
    // once per call site.
    let preferred = CurrentLocale::new(Locale::best_available(&["es-ES", "en-US"]));

    demo_resolution(&localizer, &preferred);
    demo_pluralization(&localizer);
    demo_list_formatting(&localizer, &preferred);

    Ok(())
}

fn demo_resolution(localizer: &Localizer, preferred: &CurrentLocale) {
    println!("1. Resolution and fallback");
    println!("==========================");

    let locale = preferred.get();
    for path in ["common.save", "common.cancel", "settings.title"] {
        let phrase = localizer.translate_or_default(locale, path, None, "(missing)");
        println!("  {path} [{locale}] -> {phrase}");
    }

    let context = translation_context!("name" => "Alice");
    let greeting = localizer.translate_or_default(locale, "report.greeting", Some(&context), "");
    println!("  report.greeting [{locale}] -> {greeting}\n");
}

fn demo_pluralization(localizer: &Localizer) {
    println!("2. Pluralization");
    println!("================");

    for locale in [Locale::English, Locale::SpanishSpain] {
        for count in [0, 1, 2, 5] {
            let phrase = localizer.translate_or_default(
                locale,
                "expense.count",
                Some(&translation_context!(count: count)),
                "(missing)",
            );
            println!("  {count} [{locale}] -> {phrase}");
        }
    }
    println!();
}

fn demo_list_formatting(localizer: &Localizer, preferred: &CurrentLocale) {
    println!("3. List formatting");
    println!("==================");

    let items = ["rent", "groceries", "travel"];
    for locale in [Locale::English, preferred.get()] {
        println!("  [{locale}] {}", localizer.format_list(locale, &items));
    }
}
