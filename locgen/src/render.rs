//! Positional format rendering.
//!
//! Accessor parameter order is fixed by the base template's variable
//! declaration order. At runtime the platform formatters receive a
//! positional format string, so every placeholder occurrence is rewritten
//! to reference its 1-based declaration index explicitly. This keeps the
//! rendered text stable under variable reordering: an overlay may use the
//! same variables in any order, as long as each one exists in the base
//! template.

use crate::{
    error::Error,
    key::Key,
    template::{Part, Template},
};

/// Renders `resolved` into a positional format string, resolving each
/// variable against `declaring` (the base locale's template for `key`).
///
/// `{name:%s} x {count:%05d}` becomes `%1$s x %2$05d`.
///
/// Fails with [`Error::UnboundVariable`] when `resolved` uses a variable the
/// declaring template does not contain. Base templates trivially resolve
/// against themselves; overlay templates are parsed independently and can
/// genuinely diverge.
pub fn positional_format(
    key: &Key,
    declaring: &Template,
    resolved: &Template,
) -> Result<String, Error> {
    let mut out = String::new();

    for part in resolved.parts() {
        match part {
            Part::Literal(text) => out.push_str(text),
            Part::Variable(variable) => {
                let index = declaring.variable_position(variable).ok_or_else(|| {
                    Error::UnboundVariable {
                        variable: variable.name.clone(),
                        key: key.to_string(),
                    }
                })?;

                // The specifier's leading `%` is replaced by `%<index>$`.
                let mut tail = variable.format.chars();
                tail.next();
                out.push('%');
                out.push_str(&(index + 1).to_string());
                out.push('$');
                out.push_str(tail.as_str());
            }
        }
    }

    Ok(out)
}
