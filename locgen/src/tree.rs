//! Hierarchical namespace tree derived from the base locale's flat map.
//!
//! The tree drives accessor generation: each [`Container`] becomes a nested
//! namespace, each [`Leaf`] a callable accessor. It is built once per run,
//! from the base locale only, and is read-only afterwards. Overlay locales
//! never extend it.

use crate::{
    error::Error,
    key::{Key, MessageMap},
    template::Template,
};

/// A node in the namespace tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Container(Container),
    Value(Leaf),
}

/// An interior node: an ordered mapping from segment name to child.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    children: Vec<(String, Node)>,
}

/// A terminal node holding the originating key and its base template.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub key: Key,
    pub template: Template,
}

impl Container {
    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children
            .iter()
            .map(|(name, node)| (name.as_str(), node))
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Descends into the container at `name`, creating it when absent.
    /// Finding a value node there is a path conflict.
    fn container_at(&mut self, name: &str, key: &Key) -> Result<&mut Container, Error> {
        let index = match self.children.iter().position(|(n, _)| n == name) {
            Some(index) => index,
            None => {
                self.children
                    .push((name.to_string(), Node::Container(Container::default())));
                self.children.len() - 1
            }
        };
        match &mut self.children[index].1 {
            Node::Container(container) => Ok(container),
            Node::Value(_) => Err(Error::PathConflict(key.to_string())),
        }
    }

    /// Inserts a leaf at `name`. Any existing child there, container or
    /// value, is a path conflict.
    fn insert_value(&mut self, name: &str, leaf: Leaf) -> Result<(), Error> {
        if self.children.iter().any(|(n, _)| n == name) {
            return Err(Error::PathConflict(leaf.key.to_string()));
        }
        self.children.push((name.to_string(), Node::Value(leaf)));
        Ok(())
    }
}

/// The namespace tree for one key universe.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    root: Container,
}

impl Tree {
    /// Folds a flat map into a tree, processing keys in iteration order.
    ///
    /// Fails with [`Error::PathConflict`] when a key terminates on a segment
    /// already used as a namespace, or passes through a segment already
    /// holding a value.
    pub fn build(flat: &MessageMap) -> Result<Self, Error> {
        let mut root = Container::default();

        for (key, template) in flat.iter() {
            let (last, prefix) = key
                .segments()
                .split_last()
                .ok_or_else(|| Error::key_shape("empty key path"))?;

            let mut container = &mut root;
            for name in prefix {
                container = container.container_at(name, key)?;
            }
            container.insert_value(
                last,
                Leaf {
                    key: key.clone(),
                    template: template.clone(),
                },
            )?;
        }

        Ok(Tree { root })
    }

    pub fn root(&self) -> &Container {
        &self.root
    }
}
