#![forbid(unsafe_code)]
//! Typed localization code generator.
//!
//! Turns hierarchically-keyed YAML message templates into typed, locale-aware
//! Kotlin accessor APIs plus the platform resource files those accessors read
//! at runtime.
//!
//! # Quick Start
//!
//! ```rust
//! use locgen::{Backend, Generator, JvmBackend, MessageMap, source::SourceParser};
//!
//! let base = MessageMap::from_str("strings:\n  greeting:\n    hello: \"Hello, {name:%s}!\"\n")?;
//! let generator = Generator::new("com.example.app", base)?;
//!
//! let backend = JvmBackend::new(false);
//! let api = backend.emit_api(&generator)?;
//! assert_eq!(api.len(), 1);
//!
//! let resources = backend.emit_resources(&generator, None, None)?;
//! assert!(resources.contents.contains("i18n.greeting.hello=Hello, %1$s\\!"));
//! # Ok::<(), locgen::Error>(())
//! ```
//!
//! # Pipeline
//!
//! Source files flow one way: per-locale YAML definitions are flattened into
//! [`MessageMap`]s (every template validated on the way in), the base
//! locale's map is folded into a namespace [`Tree`] once, and the backends
//! consume tree plus flat maps to produce accessor declarations and
//! per-locale resource payloads with base-locale fallback.

pub mod backends;
pub mod emit;
pub mod error;
pub mod generator;
pub mod key;
pub mod locale;
pub mod naming;
pub mod render;
pub mod source;
pub mod template;
pub mod tree;

// Re-export most used types for easy consumption
pub use crate::{
    backends::{AndroidBackend, Artifact, Backend, JvmBackend, Platform, common::emit_common_api},
    error::Error,
    generator::Generator,
    key::{Key, MessageMap},
    locale::Locale,
    template::{Part, Template, VarKind, Variable},
    tree::{Node, Tree},
};
