//! End-to-end pipeline tests over in-memory sources: YAML definitions in,
//! Kotlin accessors and platform resources out.

use indoc::indoc;
use locgen::source::SourceParser;
use locgen::{
    AndroidBackend, Backend, Error, Generator, JvmBackend, Locale, MessageMap, Tree,
    emit_common_api,
};

fn base() -> MessageMap {
    MessageMap::from_str(indoc! {r#"
        strings:
          greeting:
            hello: "Hello, {name:%s}!"
            title: Welcome
          cart:
            items: "{count:%d} items for {total:%.2f}"
    "#})
    .unwrap()
}

fn generator() -> Generator {
    Generator::new("com.example.app", base()).unwrap()
}

#[test]
fn accessor_parameters_follow_declaration_order() {
    let artifacts = emit_common_api(&generator(), false).unwrap();
    let accessors = artifacts
        .iter()
        .find(|a| a.path.ends_with("I18n.kt"))
        .unwrap();

    // Two typed parameters, declaration order `count, total`.
    assert!(accessors.contents.contains(
        "public fun <T> items(F: Formatter<T>, count: Long, total: Double): T = IMPL.cart_items(F, count, total)"
    ));
    // Zero variables collapse to a fixed-string accessor.
    assert!(accessors
        .contents
        .contains("public fun title(): String = IMPL.greeting_title()"));
}

#[test]
fn end_to_end_overlay_fallback() {
    // The fr overlay defines nothing for greeting.hello: the emitted fr
    // resource must carry the base rendering, while the common accessor
    // keeps exactly one string parameter.
    let generator = generator();
    let fr_sources = MessageMap::from_str(indoc! {r#"
        strings:
          greeting:
            title: Bienvenue
    "#})
    .unwrap();
    let locale = Locale::new("fr").unwrap().with_jvm_tag("fr").with_android_tag("fr");

    let jvm = JvmBackend::new(false)
        .emit_resources(&generator, Some(&locale), Some(&fr_sources))
        .unwrap();
    assert!(jvm.contents.contains("i18n.greeting.hello=Hello, %1$s\\!"));
    assert!(jvm.contents.contains("i18n.greeting.title=Bienvenue"));

    let android = AndroidBackend::new(false)
        .emit_resources(&generator, Some(&locale), Some(&fr_sources))
        .unwrap();
    assert!(android.contents.contains(
        "<string name=\"i18n_greeting_hello\">Hello, %1$s!</string>"
    ));
    assert!(android.contents.contains(
        "<string name=\"i18n_greeting_title\">Bienvenue</string>"
    ));

    let artifacts = emit_common_api(&generator, false).unwrap();
    let contract = artifacts
        .iter()
        .find(|a| a.path.ends_with("I18nImpl.kt"))
        .unwrap();
    assert!(contract.contents.contains(
        "public fun <T> greeting_hello(F: Formatter<T>, name: String): T"
    ));
}

#[test]
fn overlay_keys_unknown_to_base_are_ignored() {
    let generator = generator();
    let overlay = MessageMap::from_str(indoc! {r#"
        strings:
          greeting:
            extra: "Only in the overlay"
    "#})
    .unwrap();
    let locale = Locale::new("de").unwrap().with_jvm_tag("de");

    let artifact = JvmBackend::new(false)
        .emit_resources(&generator, Some(&locale), Some(&overlay))
        .unwrap();
    assert!(!artifact.contents.contains("extra"));
}

#[test]
fn merged_sources_reject_duplicate_keys() {
    let first = MessageMap::from_str("strings:\n  a:\n    b:\n      c: one\n").unwrap();
    let second = MessageMap::from_str("strings:\n  a:\n    b:\n      c: two\n").unwrap();

    let mut merged = MessageMap::new();
    merged.merge(first, "en").unwrap();
    let error = merged.merge(second, "en").unwrap_err();
    assert!(matches!(error, Error::DuplicateKey { .. }));
}

#[test]
fn leaf_and_prefix_key_conflict() {
    let map = MessageMap::from_str(indoc! {r#"
        strings:
          a:
            b: "x"
    "#})
    .unwrap();
    let mut conflicting = MessageMap::new();
    conflicting.merge(map, "root").unwrap();
    conflicting
        .merge(
            MessageMap::from_str("strings:\n  a: \"y\"\n").unwrap(),
            "root",
        )
        .unwrap();

    assert!(matches!(Tree::build(&conflicting), Err(Error::PathConflict(_))));
}

#[test]
fn resource_ordering_is_deterministic() {
    let generator = generator();
    let first = JvmBackend::new(false)
        .emit_resources(&generator, None, None)
        .unwrap();
    let second = JvmBackend::new(false)
        .emit_resources(&generator, None, None)
        .unwrap();
    assert_eq!(first.contents, second.contents);

    // Entries follow base definition order.
    let hello = first.contents.find("greeting.hello").unwrap();
    let items = first.contents.find("cart.items").unwrap();
    assert!(hello < items);
}

#[test]
fn positional_rendering_survives_overlay_reordering() {
    let base = MessageMap::from_str(indoc! {r#"
        strings:
          cart:
            items: "{count:%d} items for {total:%.2f}"
    "#})
    .unwrap();
    let generator = Generator::new("com.example.app", base).unwrap();

    let overlay = MessageMap::from_str(indoc! {r#"
        strings:
          cart:
            items: "Pour {total:%.2f}: {count:%d} articles"
    "#})
    .unwrap();
    let locale = Locale::new("fr").unwrap().with_jvm_tag("fr");

    let artifact = JvmBackend::new(false)
        .emit_resources(&generator, Some(&locale), Some(&overlay))
        .unwrap();
    // `total` keeps index 2 and `count` index 1, their base declaration
    // positions, regardless of the overlay's usage order.
    assert!(artifact.contents.contains("Pour %2$.2f\\: %1$d articles"));
}
