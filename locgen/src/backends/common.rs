//! The platform-independent Kotlin layer.
//!
//! Three files, all declarations over the same contract:
//! - `Formatter.kt`: the injectable argument-formatting strategy plus the
//!   `String.format`-backed default.
//! - `I18nImpl.kt`: the `expect class` contract every platform backend
//!   implements; one function per key.
//! - `I18n.kt` (and `I18nComposable.kt` when Compose support is enabled):
//!   the nested accessor tree generated from the namespace tree.

use std::path::PathBuf;

use crate::{
    emit::CodeWriter,
    error::Error,
    generator::Generator,
    naming,
    tree::{Container, Leaf, Node},
};

use super::{Artifact, FILE_SUPPRESS, argument_list, impl_function_head, parameter_list};

/// Emits the common Kotlin layer.
pub fn emit_common_api(generator: &Generator, compose: bool) -> Result<Vec<Artifact>, Error> {
    let mut artifacts = vec![
        formatter_artifact(generator),
        contract_artifact(generator),
        accessors_artifact(generator, false),
    ];
    if compose {
        artifacts.push(accessors_artifact(generator, true));
    }
    Ok(artifacts)
}

fn source_path(generator: &Generator, class_name: &str) -> PathBuf {
    generator
        .package_path()
        .join(format!("{}.kt", class_name))
}

fn file_header(writer: &mut CodeWriter, generator: &Generator, imports: &[&str]) {
    writer.line(FILE_SUPPRESS);
    writer.blank();
    writer.line(&format!("package {}", generator.package()));
    writer.blank();
    if !imports.is_empty() {
        for import in imports {
            writer.line(&format!("import {}", import));
        }
        writer.blank();
    }
}

fn formatter_artifact(generator: &Generator) -> Artifact {
    let mut writer = CodeWriter::new();
    file_header(&mut writer, generator, &["java.util.Locale"]);

    writer.open("public fun interface Formatter<T> {");
    writer.line("public fun format(locale: Locale, format: String, vararg args: Any?): T");
    writer.close("}");
    writer.blank();
    writer.line(
        "public val DefaultFormatter: Formatter<String> = Formatter { locale, format, args -> String.format(locale, format, *args) }",
    );

    Artifact {
        path: source_path(generator, "Formatter"),
        contents: writer.finish(),
    }
}

fn contract_artifact(generator: &Generator) -> Artifact {
    let mut writer = CodeWriter::new();
    file_header(&mut writer, generator, &[]);

    writer.open(&format!("public expect class {} {{", naming::IMPL_CLASS));
    for (key, template) in generator.base().iter() {
        writer.line(&impl_function_head(key, template, false));
    }
    writer.close("}");

    Artifact {
        path: source_path(generator, naming::IMPL_CLASS),
        contents: writer.finish(),
    }
}

fn accessors_artifact(generator: &Generator, composable: bool) -> Artifact {
    let class_name = if composable {
        naming::COMPOSABLE_CLASS
    } else {
        naming::ACCESSOR_CLASS
    };
    let imports: &[&str] = if composable {
        &[
            "androidx.compose.runtime.Composable",
            "androidx.compose.runtime.remember",
        ]
    } else {
        &[]
    };

    let mut writer = CodeWriter::new();
    file_header(&mut writer, generator, imports);
    emit_accessor_class(&mut writer, class_name, generator.tree().root(), composable);

    Artifact {
        path: source_path(generator, class_name),
        contents: writer.finish(),
    }
}

fn emit_accessor_class(
    writer: &mut CodeWriter,
    class_name: &str,
    container: &Container,
    composable: bool,
) {
    writer.line("@JvmInline");
    writer.open(&format!(
        "public value class {}(public val IMPL: {}) {{",
        class_name,
        naming::IMPL_CLASS
    ));

    let mut first = true;
    for (name, node) in container.children() {
        if !first {
            writer.blank();
        }
        first = false;

        match node {
            Node::Value(leaf) => emit_accessor_functions(writer, name, leaf, composable),
            Node::Container(child) => {
                let child_class = naming::snake_to_upper_camel(name);
                writer.line(&format!("public val {}: {}", name, child_class));
                writer.indent();
                writer.line(&format!("get() = {}(IMPL)", child_class));
                writer.dedent();
                writer.blank();
                emit_accessor_class(writer, &child_class, child, composable);
            }
        }
    }

    writer.close("}");
}

fn emit_accessor_functions(writer: &mut CodeWriter, name: &str, leaf: &Leaf, composable: bool) {
    let impl_name = naming::impl_function_name(&leaf.key);

    if leaf.template.has_variables() {
        let parameters = parameter_list(&leaf.template);
        let arguments = argument_list(&leaf.template);

        let body = if composable {
            writer.line("@Composable");
            format!(
                "remember(IMPL, F, {}) {{ IMPL.{}(F, {}) }}",
                arguments, impl_name, arguments
            )
        } else {
            format!("IMPL.{}(F, {})", impl_name, arguments)
        };
        writer.line(&format!(
            "public fun <T> {}(F: Formatter<T>, {}): T = {}",
            name, parameters, body
        ));

        writer.blank();
        if composable {
            writer.line("@Composable");
        }
        writer.line(&format!(
            "public fun {}({}): String = {}(DefaultFormatter, {})",
            name, parameters, name, arguments
        ));
    } else {
        let body = if composable {
            writer.line("@Composable");
            format!("remember(IMPL) {{ IMPL.{}() }}", impl_name)
        } else {
            format!("IMPL.{}()", impl_name)
        };
        writer.line(&format!("public fun {}(): String = {}", name, body));
    }
}
