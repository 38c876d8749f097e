//! System font lookup; skipped on machines without fonts

use std::sync::Arc;

use textmark_core::{
    shape_line,
    traits::{FontRef, FontResolver},
    FontStyle,
};
use textmark_fontdb::SystemFonts;

#[test]
fn resolves_generic_sans_serif() {
    let _ = env_logger::builder().is_test(true).try_init();
    let fonts = SystemFonts::new();

    let font = match fonts.resolve("sans-serif", FontStyle::REGULAR) {
        Ok(font) => font,
        Err(e) => {
            eprintln!("Skipping test: no sans-serif font available ({e})");
            return;
        },
    };

    assert!(font.units_per_em() > 0);
    assert!(font.ascender() > 0.0);
    assert!(font.glyph_id('A').is_some());
    assert!(!font.data().is_empty());

    let line = shape_line("Hello", font.as_ref(), 24.0);
    assert!(line.width > 0.0);
}

#[test]
fn repeated_lookups_share_the_parsed_face() {
    let fonts = SystemFonts::new();

    let Ok(first) = fonts.resolve("sans-serif", FontStyle::BOLD) else {
        eprintln!("Skipping test: no sans-serif font available");
        return;
    };
    let second = fonts
        .resolve("sans-serif", FontStyle::BOLD)
        .expect("cached lookup");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(fonts.cached_count(), 1);

    fonts.clear_cache();
    assert_eq!(fonts.cached_count(), 0);
}

#[test]
fn unknown_family_is_an_error() {
    let fonts = SystemFonts::new();
    assert!(fonts
        .resolve("No Such Family 7f3a9c", FontStyle::REGULAR)
        .is_err());
}
