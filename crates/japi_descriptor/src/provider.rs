use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::DescriptorError;
use crate::types::TypeDescriptor;

/// Resolution seam between the purifier and whatever front end produced the
/// descriptors (reflection dump, IDL parser, hand-written fixture).
pub trait DescriptorProvider {
    /// Resolve a fully-qualified name to its descriptor or fail; the
    /// purifier treats this failure as fatal to the whole run.
    fn resolve(&self, name: &str) -> Result<&TypeDescriptor, DescriptorError>;

    /// Non-fatal probe used where an unresolvable name is an acceptable
    /// answer, e.g. external JDK interfaces during the serializable scan.
    fn lookup(&self, name: &str) -> Option<&TypeDescriptor>;
}

/// In-memory descriptor provider keyed by fully-qualified name.
#[derive(Debug, Default, Clone)]
pub struct DescriptorSet {
    types: BTreeMap<String, TypeDescriptor>,
}

impl DescriptorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, replacing any previous entry under the same name.
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> Option<TypeDescriptor> {
        self.types.insert(descriptor.name.clone(), descriptor)
    }

    /// Build a set from a JSON array of descriptors.
    pub fn from_json_str(json: &str) -> Result<Self, DescriptorError> {
        let descriptors: Vec<TypeDescriptor> = serde_json::from_str(json)?;
        let mut set = Self::new();
        for descriptor in descriptors {
            set.insert(descriptor);
        }
        Ok(set)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, DescriptorError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }
}

impl DescriptorProvider for DescriptorSet {
    fn resolve(&self, name: &str) -> Result<&TypeDescriptor, DescriptorError> {
        self.types
            .get(name)
            .ok_or_else(|| DescriptorError::UnknownType {
                name: name.to_string(),
            })
    }

    fn lookup(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }
}
