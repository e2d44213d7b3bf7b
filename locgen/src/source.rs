//! Loading message definitions from YAML source files.
//!
//! Each source file carries exactly one recognized top-level section:
//!
//! ```yaml
//! strings:
//!   greeting:
//!     hello: "Hello, {name:%s}!"
//! ```
//!
//! Nested mapping keys become [`Key`] segments; string and number leaves are
//! handed to the template parser as their textual form. A locale is loaded
//! by parsing every definition file in its directory (sorted by file name)
//! and merging the results with a duplicate-key check.

use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::{Path, PathBuf},
};

use serde_yaml::Value;

use crate::{
    error::Error,
    key::{Key, MessageMap},
    template::Template,
};

/// Name of the single recognized top-level section.
pub const ROOT_SECTION: &str = "strings";

/// Parsing entry points for message definition sources.
pub trait SourceParser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }
}

impl SourceParser for MessageMap {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let document: Value = serde_yaml::from_reader(reader)?;

        let root = document
            .as_mapping()
            .ok_or_else(|| Error::key_shape("expected a mapping at the document root"))?;
        if root.len() != 1 {
            return Err(Error::key_shape(format!(
                "expected exactly one top-level section, got {}",
                root.len()
            )));
        }

        let (section_name, section_value) = root
            .iter()
            .next()
            .ok_or_else(|| Error::key_shape("expected exactly one top-level section, got 0"))?;
        if section_name.as_str() != Some(ROOT_SECTION) {
            return Err(Error::key_shape(format!(
                "root section `{}` not found",
                ROOT_SECTION
            )));
        }
        let section = section_value.as_mapping().ok_or_else(|| {
            Error::key_shape(format!("root section `{}` must be a mapping", ROOT_SECTION))
        })?;

        let mut output = MessageMap::new();
        let mut context = Vec::new();
        walk_section(&mut context, &mut output, section)?;
        Ok(output)
    }
}

fn walk_section(
    context: &mut Vec<String>,
    output: &mut MessageMap,
    section: &serde_yaml::Mapping,
) -> Result<(), Error> {
    for (name, value) in section {
        let name = name
            .as_str()
            .ok_or_else(|| Error::key_shape(format!("unexpected key `{:?}`", name)))?;

        context.push(name.to_string());
        match value {
            Value::Mapping(child) => walk_section(context, output, child)?,
            Value::String(text) => {
                let key = Key::new(context.clone())?;
                output.insert(key, Template::parse(text)?);
            }
            Value::Number(number) => {
                let key = Key::new(context.clone())?;
                output.insert(key, Template::parse(&number.to_string())?);
            }
            other => {
                return Err(Error::key_shape(format!(
                    "unsupported value for `{}`: {:?}",
                    context.join("."),
                    other
                )));
            }
        }
        context.pop();
    }
    Ok(())
}

/// Parses every definition file in one locale directory and merges them.
///
/// Files are read in sorted file-name order so that the resulting entry
/// order, and with it all generated output, is deterministic. Only regular
/// `.yaml`/`.yml` files are considered.
pub fn parse_locale_dir<P: AsRef<Path>>(path: P, locale: &str) -> Result<MessageMap, Error> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(&path)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|p| {
            p.is_file()
                && matches!(
                    p.extension().and_then(|e| e.to_str()),
                    Some("yaml") | Some("yml")
                )
        })
        .collect();
    files.sort();

    let mut merged = MessageMap::new();
    for file in &files {
        tracing::debug!(file = %file.display(), locale, "parsing definition file");
        let current = MessageMap::read_from(file)?;
        merged.merge(current, locale)?;
    }
    Ok(merged)
}
