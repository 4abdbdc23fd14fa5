//! Ordered catalog of the atomic values of one dimension.
//!
//! Elements get dense indices in insertion order; names are opaque tokens,
//! unique within the set.

use crate::error::HierarchyError;
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone)]
pub struct ValueSet {
    pub name: String,
    elements: Vec<String>,
    by_name: HashMap<String, usize>,
}

impl ValueSet {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a new element; its index is the insertion order.
    pub fn add_element(&mut self, name: &str) -> Result<usize, HierarchyError> {
        if self.by_name.contains_key(name) {
            return Err(HierarchyError::DuplicateElement {
                set: self.name.clone(),
                name: name.to_string(),
            });
        }
        let index = self.elements.len();
        self.elements.push(name.to_string());
        self.by_name.insert(name.to_string(), index);
        Ok(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn element_name(&self, index: usize) -> &str {
        &self.elements[index]
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|s| s.as_str())
    }
}

impl fmt::Display for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {{{}}}", self.name, self.elements.iter().join(", "))
    }
}
