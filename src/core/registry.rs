//! core::registry
//!
//! Type-relationship registry for the figure and factory hierarchies.
//!
//! # Architecture
//!
//! The registry is a directed graph where:
//! - Nodes are type names
//! - Edges point from a type to each parent it declares
//! - A type may declare several parents
//!
//! Each participating type declares its name and parents through the
//! [`Registered`] trait. [`TypeRegistry::builtin`] performs the one explicit
//! registration step; after that the registry is only queried.
//!
//! # Invariants
//!
//! - Registering the same edge twice has no effect
//! - Queries on unknown names return empty results
//! - The builtin hierarchy is acyclic

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use crate::core::figure::{Circle, Figure, Rectangle, Triangle};
use crate::source::{
    FigureFactory, FileFigureFactory, RandomFigureFactory, StandardInputFigureFactory,
    StreamFigureFactory,
};

/// Root of the figure hierarchy: every figure can be cloned.
pub const CLONEABLE: &str = "Cloneable";

/// Declares a type's place in the hierarchy.
pub trait Registered {
    /// Name under which the type is registered.
    const TYPE_NAME: &'static str;
    /// Names of the declared parents.
    const PARENTS: &'static [&'static str];
}

/// Directed graph of declared type relationships.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    /// Declared parents for each type
    parents: BTreeMap<String, BTreeSet<String>>,
    /// Children sets (derived from parents)
    children: BTreeMap<String, BTreeSet<String>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry for the figure and factory hierarchies.
    ///
    /// # Example
    ///
    /// ```
    /// use figurework::core::registry::TypeRegistry;
    ///
    /// let registry = TypeRegistry::builtin();
    /// assert!(registry.descendants("Figure").contains(&"Circle".to_string()));
    /// ```
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register_type::<Figure>();
        registry.register_type::<Triangle>();
        registry.register_type::<Circle>();
        registry.register_type::<Rectangle>();

        registry.register_type::<FigureFactory>();
        registry.register_type::<RandomFigureFactory>();
        registry.register_type::<StreamFigureFactory>();
        registry.register_type::<FileFigureFactory>();
        registry.register_type::<StandardInputFigureFactory>();

        registry
    }

    /// Record one declared edge. Idempotent.
    pub fn register(&mut self, child: impl Into<String>, parent: impl Into<String>) {
        let child = child.into();
        let parent = parent.into();
        self.children
            .entry(parent.clone())
            .or_default()
            .insert(child.clone());
        self.parents.entry(child).or_default().insert(parent);
    }

    /// Record every edge a type declares.
    pub fn register_type<T: Registered>(&mut self) {
        for parent in T::PARENTS {
            self.register(T::TYPE_NAME, *parent);
        }
    }

    /// Directly declared parents of a type.
    pub fn parents(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.parents.get(name)
    }

    /// Types that directly declare `name` as a parent.
    pub fn children(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.children.get(name)
    }

    /// Every type mentioned by any edge, sorted.
    pub fn types(&self) -> BTreeSet<&str> {
        self.parents
            .keys()
            .chain(self.children.keys())
            .map(String::as_str)
            .collect()
    }

    /// Every type that has `name` as an ancestor at any depth.
    ///
    /// Breadth-first, so nearer descendants come first.
    pub fn descendants(&self, name: &str) -> Vec<String> {
        Self::reachable(&self.children, name)
    }

    /// Every type reachable from `name` through declared parents.
    ///
    /// Breadth-first, so the immediate parents come first.
    ///
    /// # Example
    ///
    /// ```
    /// use figurework::core::registry::TypeRegistry;
    ///
    /// let mut registry = TypeRegistry::new();
    /// registry.register("Leaf", "Middle");
    /// registry.register("Middle", "Root");
    ///
    /// assert_eq!(registry.ancestors("Leaf"), vec!["Middle", "Root"]);
    /// ```
    pub fn ancestors(&self, name: &str) -> Vec<String> {
        Self::reachable(&self.parents, name)
    }

    fn reachable(edges: &BTreeMap<String, BTreeSet<String>>, start: &str) -> Vec<String> {
        let mut result = Vec::new();
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();

        if let Some(next) = edges.get(start) {
            queue.extend(next.iter());
        }

        while let Some(current) = queue.pop_front() {
            if current != start && seen.insert(current) {
                result.push(current.clone());
                if let Some(next) = edges.get(current) {
                    queue.extend(next.iter());
                }
            }
        }

        result
    }

    /// Check the declared hierarchy for cycles.
    ///
    /// Returns `Some(name)` if a cycle is reachable from that type.
    pub fn find_cycle(&self) -> Option<String> {
        let mut visited = HashSet::new();
        let mut path = HashSet::new();

        for name in self.parents.keys() {
            if self.has_cycle_from(name, &mut visited, &mut path) {
                return Some(name.clone());
            }
        }
        None
    }

    fn has_cycle_from<'a>(
        &'a self,
        name: &'a str,
        visited: &mut HashSet<&'a str>,
        path: &mut HashSet<&'a str>,
    ) -> bool {
        if path.contains(name) {
            return true;
        }
        if !visited.insert(name) {
            return false;
        }

        path.insert(name);
        if let Some(parents) = self.parents.get(name) {
            for parent in parents {
                if self.has_cycle_from(parent, visited, path) {
                    return true;
                }
            }
        }
        path.remove(name);

        false
    }
}
