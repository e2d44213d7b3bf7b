//! Message-template parsing and format-specifier validation.
//!
//! A template is literal text interleaved with `{name:format}` placeholders:
//!
//! ```text
//! Hello, {name:%s}! You have {count:%d} new messages.
//! ```
//!
//! Outside a placeholder, `\\`, `\{` and `\}` escape a literal backslash or
//! brace; any other escape is rejected. Placeholders may not nest. The last
//! character of the format specifier selects the variable kind, and the
//! specifier itself is checked by formatting a representative value with it.

use std::fmt::{self, Display, Formatter};

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    static ref VARIABLE_NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_]+$").unwrap();
}

/// The value kind a format specifier expects, selected by its final character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// `s`: an arbitrary string.
    String,
    /// `d`: a decimal integer.
    Decimal,
    /// `o`: an octal integer.
    Octal,
    /// `x`: a hexadecimal integer.
    Hexadecimal,
    /// `f`: a floating point number.
    Float,
    /// `c`: a single character.
    Character,
}

impl VarKind {
    fn from_terminal(c: char) -> Option<Self> {
        match c {
            's' => Some(VarKind::String),
            'd' => Some(VarKind::Decimal),
            'o' => Some(VarKind::Octal),
            'x' => Some(VarKind::Hexadecimal),
            'f' => Some(VarKind::Float),
            'c' => Some(VarKind::Character),
            _ => None,
        }
    }
}

/// A named, typed placeholder inside a template.
///
/// Two variables are equal iff name, format and kind all match; the
/// positional remapping in [`crate::render`] relies on this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub format: String,
    pub kind: VarKind,
}

/// One parsed segment of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Literal text, with escapes already resolved.
    Literal(String),
    /// A `{name:format}` placeholder.
    Variable(Variable),
}

/// A parsed message template: an ordered part sequence, immutable after
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    parts: Vec<Part>,
}

enum State {
    Normal,
    Escaping,
    InVariable,
}

impl Template {
    /// Parses one raw template string.
    ///
    /// Returns [`Error::Syntax`] identifying the offending substring on any
    /// malformed escape, placeholder or format specifier.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let mut parts = Vec::new();
        let mut buffer = String::new();
        let mut state = State::Normal;

        for c in raw.chars() {
            match state {
                State::Normal => match c {
                    '\\' => state = State::Escaping,
                    '{' => {
                        if !buffer.is_empty() {
                            parts.push(Part::Literal(std::mem::take(&mut buffer)));
                        }
                        state = State::InVariable;
                    }
                    _ => buffer.push(c),
                },
                State::Escaping => {
                    match c {
                        '\\' | '{' | '}' => buffer.push(c),
                        other => {
                            return Err(Error::syntax(format!(
                                "unsupported escape `\\{}` in `{}`",
                                other, raw
                            )));
                        }
                    }
                    state = State::Normal;
                }
                State::InVariable => match c {
                    '}' => {
                        parts.push(Part::Variable(parse_variable(&buffer)?));
                        buffer.clear();
                        state = State::Normal;
                    }
                    '{' => {
                        return Err(Error::syntax(format!(
                            "nested `{{` inside placeholder `{}`",
                            buffer
                        )));
                    }
                    _ => buffer.push(c),
                },
            }
        }

        match state {
            State::Normal => {
                if !buffer.is_empty() {
                    parts.push(Part::Literal(buffer));
                }
                Ok(Template { parts })
            }
            State::Escaping | State::InVariable => Err(Error::syntax(format!(
                "unexpected end of template: `{}`",
                raw
            ))),
        }
    }

    /// All parts in source order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// The variables in declaration order. Duplicates are preserved as-is.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.parts.iter().filter_map(|part| match part {
            Part::Variable(variable) => Some(variable),
            Part::Literal(_) => None,
        })
    }

    pub fn has_variables(&self) -> bool {
        self.variables().next().is_some()
    }

    /// Zero-based declaration index of the first variable structurally equal
    /// to `variable`, if any.
    pub fn variable_position(&self, variable: &Variable) -> Option<usize> {
        self.variables().position(|v| v == variable)
    }
}

/// Reconstructs parseable template source: literals are re-escaped and each
/// variable is written back as `{name:format}`. Parsing the result yields an
/// equal part sequence.
impl Display for Template {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                Part::Literal(text) => {
                    for c in text.chars() {
                        match c {
                            '\\' | '{' | '}' => write!(f, "\\{}", c)?,
                            _ => write!(f, "{}", c)?,
                        }
                    }
                }
                Part::Variable(variable) => {
                    write!(f, "{{{}:{}}}", variable.name, variable.format)?;
                }
            }
        }
        Ok(())
    }
}

fn parse_variable(body: &str) -> Result<Variable, Error> {
    let segments: Vec<&str> = body.split(':').collect();
    if segments.len() != 2 {
        return Err(Error::syntax(format!("unsupported variable `{{{}}}`", body)));
    }

    let name = segments[0].trim();
    if !VARIABLE_NAME_REGEX.is_match(name) {
        return Err(Error::syntax(format!(
            "unsupported name `{}` of `{{{}}}`",
            name, body
        )));
    }

    let format = segments[1].trim();
    if format.is_empty() {
        return Err(Error::syntax(format!("empty format of `{{{}}}`", body)));
    }

    let kind = format
        .chars()
        .last()
        .and_then(VarKind::from_terminal)
        .ok_or_else(|| Error::syntax(format!("unsupported format `{}` of `{{{}}}`", format, body)))?;

    if let Err(reason) = validate_format(format, kind) {
        return Err(Error::syntax(format!(
            "invalid format `{}` of `{{{}}}`: {}",
            format, body, reason
        )));
    }

    Ok(Variable {
        name: name.to_string(),
        format: format.to_string(),
        kind,
    })
}

/// Applies the specifier to a representative value of the detected kind and
/// rejects it when formatting fails or produces the specifier unchanged.
/// The no-op check guards against specifiers that are syntactically present
/// but never consume their argument.
fn validate_format(format: &str, kind: VarKind) -> Result<(), String> {
    let rendered = render_specimen(format, kind)?;
    if rendered == format {
        return Err("formatting is a no-op".to_string());
    }
    Ok(())
}

/// Renders a printf-style specifier against the kind's representative value
/// (`""`, `0`, `0.0` or `'c'`). Supports `%%`, literal text around the
/// conversion, the flags `-+ 0#,`, a width and a precision. Exactly one
/// argument-consuming conversion is permitted.
fn render_specimen(format: &str, kind: VarKind) -> Result<String, String> {
    let mut out = String::new();
    let mut consumed = 0usize;
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let mut flags = String::new();
        while let Some(&flag) = chars.peek() {
            if "-+ 0#,".contains(flag) {
                flags.push(flag);
                chars.next();
            } else {
                break;
            }
        }

        let mut width = String::new();
        while let Some(&digit) = chars.peek() {
            if digit.is_ascii_digit() {
                width.push(digit);
                chars.next();
            } else {
                break;
            }
        }

        let mut precision: Option<usize> = None;
        if chars.peek() == Some(&'.') {
            chars.next();
            let mut digits = String::new();
            while let Some(&digit) = chars.peek() {
                if digit.is_ascii_digit() {
                    digits.push(digit);
                    chars.next();
                } else {
                    break;
                }
            }
            precision = Some(digits.parse().map_err(|_| "missing precision digits")?);
        }

        let conversion = chars.next().ok_or("incomplete conversion")?;
        let width: Option<usize> = if width.is_empty() {
            None
        } else {
            Some(width.parse().map_err(|_| "width out of range")?)
        };

        if (flags.contains('-') || flags.contains('0')) && width.is_none() {
            return Err("justification flag requires a width".to_string());
        }

        consumed += 1;
        if consumed > 1 {
            return Err("more than one conversion".to_string());
        }

        out.push_str(&render_conversion(conversion, &flags, width, precision, kind)?);
    }

    Ok(out)
}

fn render_conversion(
    conversion: char,
    flags: &str,
    width: Option<usize>,
    precision: Option<usize>,
    kind: VarKind,
) -> Result<String, String> {
    let allowed = match kind {
        VarKind::String => "s",
        VarKind::Decimal | VarKind::Octal | VarKind::Hexadecimal => "doxs",
        VarKind::Float => "fs",
        VarKind::Character => "cs",
    };
    if !allowed.contains(conversion) {
        return Err(format!(
            "conversion `{}` cannot format a {:?} value",
            conversion, kind
        ));
    }

    if precision.is_some() && !"sf".contains(conversion) {
        return Err(format!("precision is not applicable to `{}`", conversion));
    }
    for flag in flags.chars() {
        let applicable = match flag {
            '-' => true,
            '0' => "doxf".contains(conversion),
            '#' => "ox".contains(conversion),
            '+' | ' ' | ',' => "df".contains(conversion),
            _ => false,
        };
        if !applicable {
            return Err(format!("flag `{}` is not applicable to `{}`", flag, conversion));
        }
    }

    let body = match conversion {
        's' => {
            let specimen = "";
            match precision {
                Some(p) => specimen.chars().take(p).collect(),
                None => specimen.to_string(),
            }
        }
        'c' => "c".to_string(),
        'd' => {
            if flags.contains('+') {
                "+0".to_string()
            } else if flags.contains(' ') {
                " 0".to_string()
            } else {
                "0".to_string()
            }
        }
        'o' => {
            if flags.contains('#') {
                "00".to_string()
            } else {
                "0".to_string()
            }
        }
        'x' => {
            if flags.contains('#') {
                "0x0".to_string()
            } else {
                "0".to_string()
            }
        }
        'f' => {
            let digits = precision.unwrap_or(6);
            let rendered = format!("{:.*}", digits, 0.0f64);
            if flags.contains('+') {
                format!("+{}", rendered)
            } else if flags.contains(' ') {
                format!(" {}", rendered)
            } else {
                rendered
            }
        }
        _ => return Err(format!("unsupported conversion `{}`", conversion)),
    };

    Ok(match width {
        Some(w) if body.len() < w => {
            let padding = w - body.len();
            if flags.contains('-') {
                format!("{}{}", body, " ".repeat(padding))
            } else if flags.contains('0') && conversion != 's' && conversion != 'c' {
                // Zero padding goes between sign and digits.
                let (sign, digits) = match body.strip_prefix(&['+', ' '][..]) {
                    Some(rest) => (&body[..1], rest),
                    None => ("", body.as_str()),
                };
                format!("{}{}{}", sign, "0".repeat(padding), digits)
            } else {
                format!("{}{}", " ".repeat(padding), body)
            }
        }
        _ => body,
    })
}
