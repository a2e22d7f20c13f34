//! Registries of named containers
//!
//! A `Registry` keys containers by name and rejects duplicates; a
//! `RegistrySet` holds the three independent type partitions (integer,
//! float, text). Names are only unique within a partition. There is no
//! remove operation: containers live as long as the registry does.

use std::collections::HashMap;

use crate::container::types::Container;
use crate::error::CommandError;
use crate::parser::{ContainerKind, ElementType};

/// One type partition: containers of a single element type, keyed by name.
#[derive(Debug)]
pub struct Registry<T> {
    containers: HashMap<String, Container<T>>,
}

impl<T> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            containers: HashMap::new(),
        }
    }

    /// Create a container under `name`. Names are matched exactly and
    /// case-sensitively; a taken name leaves the registry untouched.
    pub fn create(
        &mut self,
        name: &str,
        kind: ContainerKind,
    ) -> Result<&mut Container<T>, CommandError> {
        if self.containers.contains_key(name) {
            return Err(CommandError::DuplicateName {
                name: name.to_string(),
            });
        }

        let container = Container::new(name.to_string(), kind);
        self.containers.insert(name.to_string(), container);

        Ok(self.containers.get_mut(name).unwrap())
    }

    /// Look up a container by name.
    pub fn get(&self, name: &str) -> Option<&Container<T>> {
        self.containers.get(name)
    }

    /// Look up a container by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Container<T>> {
        self.containers.get_mut(name)
    }

    /// Check if a container exists under `name`.
    pub fn exists(&self, name: &str) -> bool {
        self.containers.contains_key(name)
    }

    /// Number of containers in this partition.
    pub fn count(&self) -> usize {
        self.containers.len()
    }

    /// Iterate over the containers in this partition.
    pub fn iter(&self) -> impl Iterator<Item = &Container<T>> {
        self.containers.values()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat description of one container, for listings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ContainerSummary {
    pub name: String,
    pub kind: String,
    pub element_type: String,
    pub len: usize,
    pub created_at: String,
}

/// The three type partitions behind one handle.
#[derive(Debug, Default)]
pub struct RegistrySet {
    ints: Registry<i64>,
    floats: Registry<f64>,
    texts: Registry<String>,
}

impl RegistrySet {
    /// Create an empty set of partitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// The integer partition.
    pub fn ints(&self) -> &Registry<i64> {
        &self.ints
    }

    /// The integer partition, mutably.
    pub fn ints_mut(&mut self) -> &mut Registry<i64> {
        &mut self.ints
    }

    /// The float partition.
    pub fn floats(&self) -> &Registry<f64> {
        &self.floats
    }

    /// The float partition, mutably.
    pub fn floats_mut(&mut self) -> &mut Registry<f64> {
        &mut self.floats
    }

    /// The text partition.
    pub fn texts(&self) -> &Registry<String> {
        &self.texts
    }

    /// The text partition, mutably.
    pub fn texts_mut(&mut self) -> &mut Registry<String> {
        &mut self.texts
    }

    /// Total number of containers across all partitions.
    pub fn count(&self) -> usize {
        self.ints.count() + self.floats.count() + self.texts.count()
    }

    /// Describe every container across the partitions, sorted by name.
    pub fn summary(&self) -> Vec<ContainerSummary> {
        fn describe<T>(container: &Container<T>, ty: ElementType) -> ContainerSummary {
            ContainerSummary {
                name: container.name().to_string(),
                kind: container.kind().to_string(),
                element_type: ty.to_string(),
                len: container.len(),
                created_at: container
                    .created_at()
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
            }
        }

        let mut entries: Vec<ContainerSummary> = self
            .ints
            .iter()
            .map(|c| describe(c, ElementType::Integer))
            .chain(self.floats.iter().map(|c| describe(c, ElementType::Float)))
            .chain(self.texts.iter().map(|c| describe(c, ElementType::Text)))
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}
