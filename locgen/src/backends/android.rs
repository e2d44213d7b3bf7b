//! Mobile backend: `android.content.res.Resources` accessors plus
//! `strings.xml` resource tables.
//!
//! The base locale lands in `values/strings.xml`, overlays in
//! `values-<tag>/strings.xml`. Resource identifiers are
//! `i18n_<segments joined by _>`, valid resource names by construction.

use std::path::PathBuf;

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

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

pub struct AndroidBackend {
    compose: bool,
}

impl AndroidBackend {
    pub fn new(compose: bool) -> Self {
        AndroidBackend { compose }
    }
}

impl Backend for AndroidBackend {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn locale_tag<'a>(&self, locale: &'a Locale) -> Result<&'a str, Error> {
        locale.android_tag().ok_or_else(|| Error::MissingLocaleTag {
            platform: Platform::Android.to_string(),
            locale: locale.name().to_string(),
        })
    }

    fn emit_api(&self, generator: &Generator) -> Result<Vec<Artifact>, Error> {
        let mut writer = CodeWriter::new();
        writer.line(FILE_SUPPRESS);
        writer.blank();
        writer.line(&format!("package {}", generator.package()));
        writer.blank();
        writer.line("import android.content.res.Resources");
        writer.blank();

        writer.open(&format!(
            "public actual class {}(public val RES: Resources) {{",
            naming::IMPL_CLASS
        ));
        let mut first = true;
        for (key, template) in generator.base().iter() {
            if !first {
                writer.blank();
            }
            first = false;

            let head = impl_function_head(key, template, true);
            let resource_name = naming::android_resource_name(key);
            if template.has_variables() {
                writer.line(&format!(
                    "{} = F.format(RES.configuration.locales[0], RES.getString(R.string.{}), {})",
                    head,
                    resource_name,
                    argument_list(template)
                ));
            } else {
                writer.line(&format!(
                    "{} = RES.getString(R.string.{})",
                    head, resource_name
                ));
            }
        }
        writer.close("}");

        writer.blank();
        writer.line(&format!(
            "public fun createI18n(resources: Resources): {} = {}({}(resources))",
            naming::ACCESSOR_CLASS,
            naming::ACCESSOR_CLASS,
            naming::IMPL_CLASS
        ));
        if self.compose {
            writer.blank();
            writer.line(&format!(
                "public fun createI18nComposable(resources: Resources): {} = {}({}(resources))",
                naming::COMPOSABLE_CLASS,
                naming::COMPOSABLE_CLASS,
                naming::IMPL_CLASS
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
        let mut buffer = Vec::new();
        let mut xml_writer = Writer::new(&mut buffer);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        xml_writer.write_event(Event::Start(BytesStart::new("resources")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

        for (key, declaring, resolved) in resolve_entries(generator.base(), overlay) {
            let text = render::positional_format(key, declaring, resolved)?.replace('\n', "\\n");

            let mut elem = BytesStart::new("string");
            let name = naming::android_resource_name(key);
            elem.push_attribute(("name", name.as_str()));

            xml_writer.write_event(Event::Start(elem))?;
            xml_writer.write_event(Event::Text(BytesText::new(&text)))?;
            xml_writer.write_event(Event::End(BytesEnd::new("string")))?;
            xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("resources")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

        let directory = match locale {
            Some(locale) => format!("values-{}", self.locale_tag(locale)?),
            None => "values".to_string(),
        };

        Ok(Artifact {
            path: PathBuf::from(directory).join("strings.xml"),
            contents: String::from_utf8_lossy(&buffer).into_owned(),
        })
    }
}
