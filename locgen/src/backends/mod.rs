//! Backend emitters for all supported target platforms.
//!
//! Each backend consumes the same validated model (the base flat map plus
//! the namespace tree owned by [`Generator`]) and produces two artifact
//! families: a Kotlin `actual` implementation of the common contract, and
//! per-locale resource payloads. The platform-independent accessor layer is
//! emitted once by [`common`].

pub mod android;
pub mod common;
pub mod jvm;

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

pub use android::AndroidBackend;
pub use jvm::JvmBackend;

use crate::{
    error::Error,
    generator::Generator,
    key::{Key, MessageMap},
    locale::Locale,
    naming,
    template::{Template, VarKind},
};

/// A generated file: a path relative to the emitting backend's output root,
/// plus its full text contents. Writing artifacts to disk is the caller's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub contents: String,
}

/// All target platforms with a platform-native resource store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Managed runtime reading from a `ResourceBundle`.
    Jvm,
    /// Android reading from an XML string-resource table.
    Android,
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Jvm => write!(f, "jvm"),
            Platform::Android => write!(f, "android"),
        }
    }
}

/// The common emission contract: one implementation per target platform.
///
/// Resource emission always iterates the base locale's key set. A locale
/// file need not be exhaustive; keys missing from the overlay fall back to
/// the base template. Any error aborts the whole run.
pub trait Backend {
    fn platform(&self) -> Platform;

    /// The platform resource tag declared by `locale`.
    ///
    /// Fails with [`Error::MissingLocaleTag`] when this backend is enabled
    /// for a locale that declares no tag for it.
    fn locale_tag<'a>(&self, locale: &'a Locale) -> Result<&'a str, Error>;

    /// Kotlin `actual` implementation of the common contract.
    fn emit_api(&self, generator: &Generator) -> Result<Vec<Artifact>, Error>;

    /// Platform resource payload for one locale.
    ///
    /// `locale` and `overlay` are `None` for the base locale.
    fn emit_resources(
        &self,
        generator: &Generator,
        locale: Option<&Locale>,
        overlay: Option<&MessageMap>,
    ) -> Result<Artifact, Error>;
}

/// Suppressed inspections for every generated Kotlin file. Generated names
/// intentionally break naming conventions (`IMPL`, snake_case contract
/// functions).
pub(crate) const FILE_SUPPRESS: &str = "@file:Suppress(\"RedundantVisibilityModifier\", \"FunctionName\", \"PropertyName\", \"RemoveExplicitTypeArguments\", \"MemberVisibilityCanBePrivate\")";

/// Kotlin parameter type for a variable kind.
pub(crate) fn kotlin_type(kind: VarKind) -> &'static str {
    match kind {
        VarKind::String => "String",
        VarKind::Decimal | VarKind::Octal | VarKind::Hexadecimal => "Long",
        VarKind::Float => "Double",
        VarKind::Character => "Char",
    }
}

/// Renders `name: String, count: Long`, the accessor's typed parameters in
/// declaration order.
pub(crate) fn parameter_list(template: &Template) -> String {
    template
        .variables()
        .map(|v| format!("{}: {}", v.name, kotlin_type(v.kind)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders `name, count`, the argument names matching [`parameter_list`].
pub(crate) fn argument_list(template: &Template) -> String {
    template
        .variables()
        .map(|v| v.name.clone())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Declaration head of one contract function, shared between the `expect`
/// declaration and the platform `actual` classes.
pub(crate) fn impl_function_head(key: &Key, template: &Template, actual: bool) -> String {
    let modifier = if actual { "actual " } else { "" };
    let name = naming::impl_function_name(key);
    if template.has_variables() {
        format!(
            "public {}fun <T> {}(F: Formatter<T>, {}): T",
            modifier,
            name,
            parameter_list(template)
        )
    } else {
        format!("public {}fun {}(): String", modifier, name)
    }
}

/// Iterates the base key universe with overlay-override resolution, yielding
/// `(key, declaring template, resolved template)`.
pub(crate) fn resolve_entries<'a>(
    base: &'a MessageMap,
    overlay: Option<&'a MessageMap>,
) -> impl Iterator<Item = (&'a Key, &'a Template, &'a Template)> {
    base.iter().map(move |(key, declaring)| {
        let resolved = overlay.and_then(|o| o.get(key)).unwrap_or(declaring);
        (key, declaring, resolved)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(raw: &str) -> Template {
        Template::parse(raw).unwrap()
    }

    fn key(path: &str) -> Key {
        Key::from_path(path).unwrap()
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::Jvm.to_string(), "jvm");
        assert_eq!(Platform::Android.to_string(), "android");
    }

    #[test]
    fn test_kotlin_type_mapping() {
        assert_eq!(kotlin_type(VarKind::String), "String");
        assert_eq!(kotlin_type(VarKind::Decimal), "Long");
        assert_eq!(kotlin_type(VarKind::Octal), "Long");
        assert_eq!(kotlin_type(VarKind::Hexadecimal), "Long");
        assert_eq!(kotlin_type(VarKind::Float), "Double");
        assert_eq!(kotlin_type(VarKind::Character), "Char");
    }

    #[test]
    fn test_parameter_and_argument_lists() {
        let t = template("{name:%s} has {count:%d}");
        assert_eq!(parameter_list(&t), "name: String, count: Long");
        assert_eq!(argument_list(&t), "name, count");
    }

    #[test]
    fn test_impl_function_head() {
        let with_vars = template("{name:%s}");
        assert_eq!(
            impl_function_head(&key("greeting.hello"), &with_vars, false),
            "public fun <T> greeting_hello(F: Formatter<T>, name: String): T"
        );
        assert_eq!(
            impl_function_head(&key("greeting.hello"), &with_vars, true),
            "public actual fun <T> greeting_hello(F: Formatter<T>, name: String): T"
        );

        let fixed = template("fixed");
        assert_eq!(
            impl_function_head(&key("app_name"), &fixed, false),
            "public fun app_name(): String"
        );
    }

    #[test]
    fn test_resolve_entries_fallback() {
        let mut base = MessageMap::new();
        base.insert(key("a"), template("base a"));
        base.insert(key("b"), template("base b"));

        let mut overlay = MessageMap::new();
        overlay.insert(key("b"), template("overlay b"));
        overlay.insert(key("orphan"), template("ignored"));

        let resolved: Vec<(String, String)> = resolve_entries(&base, Some(&overlay))
            .map(|(k, _, r)| (k.to_string(), r.to_string()))
            .collect();
        assert_eq!(
            resolved,
            [
                ("a".to_string(), "base a".to_string()),
                ("b".to_string(), "overlay b".to_string()),
            ]
        );
    }

    #[test]
    fn test_resolve_entries_without_overlay() {
        let mut base = MessageMap::new();
        base.insert(key("a"), template("base a"));

        let resolved: Vec<String> = resolve_entries(&base, None)
            .map(|(_, _, r)| r.to_string())
            .collect();
        assert_eq!(resolved, ["base a"]);
    }
}
