//! Naming rules for generated identifiers and resource keys.

use crate::key::Key;

/// Fixed prefix shared by the resource-bundle name, bundle keys and Android
/// resource identifiers.
pub const BUNDLE_NAME: &str = "i18n";

/// Class name of the generated accessor tree root.
pub const ACCESSOR_CLASS: &str = "I18n";

/// Class name of the generated Compose accessor tree root.
pub const COMPOSABLE_CLASS: &str = "I18nComposable";

/// Class name of the per-platform implementation contract.
pub const IMPL_CLASS: &str = "I18nImpl";

/// Name of the per-key function on the platform implementation contract.
pub fn impl_function_name(key: &Key) -> String {
    key.join("_")
}

/// Resource-bundle lookup key, e.g. `i18n.greeting.hello`.
pub fn bundle_resource_key(key: &Key) -> String {
    format!("{}.{}", BUNDLE_NAME, key.join("."))
}

/// Android string-resource identifier, e.g. `i18n_greeting_hello`.
///
/// Key segments match `[a-z_]+`, so the joined identifier is a valid
/// resource name by construction.
pub fn android_resource_name(key: &Key) -> String {
    format!("{}_{}", BUNDLE_NAME, key.join("_"))
}

/// `snake_case` to `UpperCamelCase` for nested accessor class names.
pub fn snake_to_upper_camel(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = true;
    for c in input.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
