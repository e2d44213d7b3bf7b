//! Managed-runtime backend: `ResourceBundle` accessors plus `.properties`
//! resource bundles.
//!
//! Resource files land under the package directory as `i18n.properties`
//! (base locale) or `i18n_<tag>.properties` (overlays). Output is
//! deterministic: entries follow the base map's order and no timestamp
//! comment is written.

use crate::{
    emit::CodeWriter,
    error::Error,
    generator::Generator,
    key::MessageMap,
    locale::Locale,
    naming, render,
};

use super::{
    Artifact, Backend, FILE_SUPPRESS, Platform, argument_list, impl_function_head,
    resolve_entries,
};

pub struct JvmBackend {
    compose: bool,
}

impl JvmBackend {
    pub fn new(compose: bool) -> Self {
        JvmBackend { compose }
    }

    fn bundle_base_name(&self, generator: &Generator) -> String {
        format!("{}.{}", generator.package(), naming::BUNDLE_NAME)
    }
}

impl Backend for JvmBackend {
    fn platform(&self) -> Platform {
        Platform::Jvm
    }

    fn locale_tag<'a>(&self, locale: &'a Locale) -> Result<&'a str, Error> {
        locale.jvm_tag().ok_or_else(|| Error::MissingLocaleTag {
            platform: Platform::Jvm.to_string(),
            locale: locale.name().to_string(),
        })
    }

    fn emit_api(&self, generator: &Generator) -> Result<Vec<Artifact>, Error> {
        let mut writer = CodeWriter::new();
        writer.line(FILE_SUPPRESS);
        writer.blank();
        writer.line(&format!("package {}", generator.package()));
        writer.blank();
        writer.line("import java.util.Locale");
        writer.line("import java.util.ResourceBundle");
        writer.blank();

        writer.open(&format!(
            "public actual class {}(public val RES: ResourceBundle) {{",
            naming::IMPL_CLASS
        ));
        let mut first = true;
        for (key, template) in generator.base().iter() {
            if !first {
                writer.blank();
            }
            first = false;

            let head = impl_function_head(key, template, true);
            let resource_key = naming::bundle_resource_key(key);
            if template.has_variables() {
                writer.line(&format!(
                    "{} = F.format(RES.locale, RES.getString(\"{}\"), {})",
                    head,
                    resource_key,
                    argument_list(template)
                ));
            } else {
                writer.line(&format!("{} = RES.getString(\"{}\")", head, resource_key));
            }
        }
        writer.close("}");

        let bundle = self.bundle_base_name(generator);
        writer.blank();
        writer.line(&format!(
            "public fun createI18n(locale: Locale = Locale.getDefault()): {} = {}({}(ResourceBundle.getBundle(\"{}\", locale)))",
            naming::ACCESSOR_CLASS,
            naming::ACCESSOR_CLASS,
            naming::IMPL_CLASS,
            bundle
        ));
        if self.compose {
            writer.blank();
            writer.line(&format!(
                "public fun createI18nComposable(locale: Locale = Locale.getDefault()): {} = {}({}(ResourceBundle.getBundle(\"{}\", locale)))",
                naming::COMPOSABLE_CLASS,
                naming::COMPOSABLE_CLASS,
                naming::IMPL_CLASS,
                bundle
            ));
        }

        Ok(vec![Artifact {
            path: generator
                .package_path()
                .join(format!("{}.kt", naming::IMPL_CLASS)),
            contents: writer.finish(),
        }])
    }

    fn emit_resources(
        &self,
        generator: &Generator,
        locale: Option<&Locale>,
        overlay: Option<&MessageMap>,
    ) -> Result<Artifact, Error> {
        let mut out = String::new();
        for (key, declaring, resolved) in resolve_entries(generator.base(), overlay) {
            let text = render::positional_format(key, declaring, resolved)?;
            out.push_str(&escape_properties(&naming::bundle_resource_key(key), true));
            out.push('=');
            out.push_str(&escape_properties(&text, false));
            out.push('\n');
        }

        let file_name = match locale {
            Some(locale) => format!("{}_{}.properties", naming::BUNDLE_NAME, self.locale_tag(locale)?),
            None => format!("{}.properties", naming::BUNDLE_NAME),
        };

        Ok(Artifact {
            path: generator.package_path().join(file_name),
            contents: out,
        })
    }
}

/// Java `Properties` escaping: backslash, separators, comment starters and
/// control characters are backslash-escaped, anything outside printable
/// ASCII becomes `\uXXXX`. Keys escape every space; values only leading
/// spaces.
fn escape_properties(text: &str, escape_all_spaces: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut leading = true;
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            ' ' if escape_all_spaces || leading => out.push_str("\\ "),
            c if (c as u32) < 0x20 || (c as u32) > 0x7e => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04x}", unit));
                }
            }
            c => out.push(c),
        }
        if c != ' ' {
            leading = false;
        }
    }
    out
}
