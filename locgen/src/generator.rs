//! Pipeline orchestration.
//!
//! A [`Generator`] is constructed once per run from the fully parsed base
//! locale. Building it derives the namespace tree eagerly, so structural
//! errors surface before any artifact is emitted. The generator is
//! immutable afterwards: backends read the base map for the authoritative
//! key universe and the tree for the accessor shape.

use std::path::PathBuf;

use crate::{error::Error, key::MessageMap, tree::Tree};

pub struct Generator {
    package: String,
    base: MessageMap,
    tree: Tree,
}

impl Generator {
    /// Creates a generator for one target package from the base locale's
    /// merged flat map.
    pub fn new(package: impl Into<String>, base: MessageMap) -> Result<Self, Error> {
        let package = package.into();
        let tree = Tree::build(&base)?;
        tracing::debug!(package = %package, keys = base.len(), "namespace tree built");
        Ok(Generator {
            package,
            base,
            tree,
        })
    }

    /// Target package of all generated Kotlin sources, e.g. `com.example.app`.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The package as a relative directory path, e.g. `com/example/app`.
    pub fn package_path(&self) -> PathBuf {
        self.package.split('.').collect()
    }

    /// The base locale's flat map: the authoritative key universe.
    pub fn base(&self) -> &MessageMap {
        &self.base
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{key::Key, template::Template};

    fn base() -> MessageMap {
        let mut map = MessageMap::new();
        map.insert(
            Key::from_path("greeting.hello").unwrap(),
            Template::parse("Hello, {name:%s}!").unwrap(),
        );
        map
    }

    #[test]
    fn test_generator_builds_tree_eagerly() {
        let generator = Generator::new("com.example.app", base()).unwrap();
        assert_eq!(generator.package(), "com.example.app");
        assert_eq!(generator.base().len(), 1);
        assert!(generator.tree().root().get("greeting").is_some());
    }

    #[test]
    fn test_generator_rejects_conflicting_base() {
        let mut map = base();
        map.insert(
            Key::from_path("greeting").unwrap(),
            Template::parse("oops").unwrap(),
        );
        assert!(matches!(
            Generator::new("com.example.app", map),
            Err(Error::PathConflict(_))
        ));
    }

    #[test]
    fn test_package_path() {
        let generator = Generator::new("com.example.app", base()).unwrap();
        assert_eq!(
            generator.package_path(),
            PathBuf::from("com/example/app")
        );
    }
}
