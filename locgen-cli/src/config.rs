//! Project configuration, read from `locgen.toml` in the definitions
//! directory.
//!
//! ```toml
//! package = "com.example.app"
//! compose = false
//! jvm = true
//! android = true
//!
//! [[locale]]
//! name = "fr"
//! jvm-tag = "fr"
//! android-tag = "fr"
//! ```

use std::path::Path;

use locgen::Locale;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target package of all generated Kotlin sources.
    pub package: String,

    /// Emit the `@Composable` accessor variant and factories.
    #[serde(default)]
    pub compose: bool,

    /// Enable the managed-runtime (ResourceBundle) backend.
    #[serde(default)]
    pub jvm: bool,

    /// Enable the Android backend.
    #[serde(default)]
    pub android: bool,

    /// Overlay locales; the base definitions live in `root/` and are not
    /// listed here.
    #[serde(default, rename = "locale")]
    pub locales: Vec<LocaleConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleConfig {
    /// Locale name, also the name of its definitions subdirectory.
    pub name: String,

    /// Resource-bundle suffix for the jvm backend.
    #[serde(rename = "jvm-tag")]
    pub jvm_tag: Option<String>,

    /// Resource-qualifier suffix for the android backend.
    #[serde(rename = "android-tag")]
    pub android_tag: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl LocaleConfig {
    /// Builds the validated [`Locale`], rejecting reserved names.
    pub fn to_locale(&self) -> Result<Locale, locgen::Error> {
        let mut locale = Locale::new(self.name.as_str())?;
        if let Some(tag) = &self.jvm_tag {
            locale = locale.with_jvm_tag(tag.as_str());
        }
        if let Some(tag) = &self.android_tag {
            locale = locale.with_android_tag(tag.as_str());
        }
        Ok(locale)
    }
}
