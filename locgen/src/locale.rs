//! Locale identifiers and their platform resource tags.

use crate::error::Error;

/// Names reserved for the base definitions; they are not valid locale names.
pub const RESERVED_LOCALE_NAMES: [&str; 2] = ["root", "default"];

/// One overlay locale: a name plus the platform-specific resource tags the
/// enabled backends suffix their artifacts with. A backend that needs a tag
/// the locale does not declare fails the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    name: String,
    jvm_tag: Option<String>,
    android_tag: Option<String>,
}

impl Locale {
    pub fn new(name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidLocale("empty locale name".to_string()));
        }
        if RESERVED_LOCALE_NAMES.contains(&name.as_str()) {
            return Err(Error::InvalidLocale(format!(
                "locale name `{}` is reserved for the base definitions",
                name
            )));
        }
        Ok(Locale {
            name,
            jvm_tag: None,
            android_tag: None,
        })
    }

    /// Resource-bundle suffix, e.g. `fr` or `zh_CN`.
    pub fn with_jvm_tag(mut self, tag: impl Into<String>) -> Self {
        self.jvm_tag = Some(tag.into());
        self
    }

    /// Resource-qualifier suffix, e.g. `fr` or `zh-rCN`.
    pub fn with_android_tag(mut self, tag: impl Into<String>) -> Self {
        self.android_tag = Some(tag.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn jvm_tag(&self) -> Option<&str> {
        self.jvm_tag.as_deref()
    }

    pub fn android_tag(&self) -> Option<&str> {
        self.android_tag.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_with_tags() {
        let locale = Locale::new("fr")
            .unwrap()
            .with_jvm_tag("fr")
            .with_android_tag("fr-rCA");
        assert_eq!(locale.name(), "fr");
        assert_eq!(locale.jvm_tag(), Some("fr"));
        assert_eq!(locale.android_tag(), Some("fr-rCA"));
    }

    #[test]
    fn test_locale_without_tags() {
        let locale = Locale::new("de").unwrap();
        assert_eq!(locale.jvm_tag(), None);
        assert_eq!(locale.android_tag(), None);
    }

    #[test]
    fn test_reserved_names_rejected() {
        assert!(matches!(Locale::new("root"), Err(Error::InvalidLocale(_))));
        assert!(matches!(
            Locale::new("default"),
            Err(Error::InvalidLocale(_))
        ));
        assert!(matches!(Locale::new(""), Err(Error::InvalidLocale(_))));
    }
}
