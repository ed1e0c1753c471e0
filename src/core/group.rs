//! core::group
//!
//! Named, ordered, uniquely-keyed descriptor sets.
//!
//! # Invariants
//!
//! - Keys are unique within a group; [`Group::define`] rejects duplicates
//! - Entry order is preserved and is the default presentation order
//! - A group is immutable once defined; there are no mutating methods, so
//!   every page importing from it sees the same content
//!
//! Extending a group is done by composition (see [`crate::core::compose`]),
//! never by editing it in place.
//!
//! # Example
//!
//! ```
//! use propdoc::core::descriptor::Descriptor;
//! use propdoc::core::group::Group;
//! use propdoc::core::types::{Category, GroupName, PropName};
//!
//! let number = |text: &str| {
//!     Descriptor::builder()
//!         .description(text)
//!         .summary("Number")
//!         .category(Category::general())
//!         .build()
//!         .unwrap()
//! };
//!
//! let legend = Group::define(
//!     GroupName::new("Legend").unwrap(),
//!     [
//!         (PropName::new("width").unwrap(), number("The width of legend.")),
//!         (PropName::new("height").unwrap(), number("The height of legend.")),
//!     ],
//! )
//! .unwrap();
//!
//! let keys: Vec<&str> = legend.keys().map(|k| k.as_str()).collect();
//! assert_eq!(keys, ["width", "height"]);
//! assert!(legend.get("depth").is_err());
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use thiserror::Error;

use super::descriptor::schema::RawDescriptor;
use super::descriptor::{Descriptor, SchemaError, ValidationOptions};
use super::types::{GroupName, PropName, TypeError};

/// Errors from defining groups and composing tables.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    #[error("{}", duplicate_message(.name, .first, .second))]
    DuplicateKey {
        name: String,
        first: Provenance,
        second: Provenance,
    },

    #[error("unknown property '{name}' in group '{group}'")]
    UnknownProperty { name: String, group: GroupName },

    #[error("property '{name}' in {origin}: {source}")]
    Schema {
        name: String,
        origin: Provenance,
        source: SchemaError,
    },

    #[error("failed to parse group '{group}': {message}")]
    ParseError { group: GroupName, message: String },

    #[error(transparent)]
    InvalidName(#[from] TypeError),
}

fn duplicate_message(name: &str, first: &Provenance, second: &Provenance) -> String {
    if first == second {
        format!("duplicate property '{name}' in {first}")
    } else {
        format!("duplicate property '{name}': provided by {first} and {second}")
    }
}

/// Where a table entry came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Imported from a named group
    Group(GroupName),
    /// Declared by the consuming page itself
    Local,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Group(name) => write!(f, "group '{name}'"),
            Provenance::Local => f.write_str("page-local props"),
        }
    }
}

/// A non-fatal validation result.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// Origin of the offending descriptor
    pub origin: Provenance,
    /// Property the descriptor documents
    pub property: PropName,
    /// What the check reported
    pub warning: SchemaError,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, property '{}': {}", self.origin, self.property, self.warning)
    }
}

/// A named, ordered, immutable set of descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    name: GroupName,
    entries: IndexMap<PropName, Descriptor>,
}

impl Group {
    /// Define a group from ordered entries.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateKey` if a property name repeats.
    pub fn define(
        name: GroupName,
        entries: impl IntoIterator<Item = (PropName, Descriptor)>,
    ) -> Result<Self, RegistryError> {
        let mut map = IndexMap::new();
        for (key, descriptor) in entries {
            if map.contains_key(&key) {
                let origin = Provenance::Group(name.clone());
                return Err(RegistryError::DuplicateKey {
                    name: key.to_string(),
                    first: origin.clone(),
                    second: origin,
                });
            }
            map.insert(key, descriptor);
        }

        tracing::debug!(group = %name, entries = map.len(), "defined group");
        Ok(Self { name, entries: map })
    }

    /// Parse a group from a JSON object of Storybook args.
    ///
    /// Key order in the document becomes entry order. Repeated keys are
    /// reported rather than collapsed.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ParseError` for malformed JSON,
    /// `RegistryError::Schema` for a descriptor missing a required field,
    /// and `DuplicateKey` for a repeated key.
    pub fn from_json(name: GroupName, json: &str) -> Result<Self, RegistryError> {
        let OrderedEntries(raw) =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                group: name.clone(),
                message: e.to_string(),
            })?;

        let mut entries = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            let descriptor =
                Descriptor::try_from(value).map_err(|source| RegistryError::Schema {
                    name: key.to_string(),
                    origin: Provenance::Group(name.clone()),
                    source,
                })?;
            entries.push((key, descriptor));
        }
        Self::define(name, entries)
    }

    /// The group's name.
    pub fn name(&self) -> &GroupName {
        &self.name
    }

    /// Look up a descriptor.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownProperty` if the group has no such key.
    pub fn get(&self, name: &str) -> Result<&Descriptor, RegistryError> {
        self.entries
            .get(name)
            .ok_or_else(|| RegistryError::UnknownProperty {
                name: name.to_string(),
                group: self.name.clone(),
            })
    }

    /// Check whether the group defines a key.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Property names in entry order.
    ///
    /// The iterator is cheap to clone and can be restarted by calling
    /// `keys()` again.
    pub fn keys(&self) -> indexmap::map::Keys<'_, PropName, Descriptor> {
        self.entries.keys()
    }

    /// Entries in order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, PropName, Descriptor> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the group has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run the opt-in descriptor checks over every entry.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Schema` for the first check configured as an
    /// error.
    pub fn validate(&self, options: &ValidationOptions) -> Result<Vec<Finding>, RegistryError> {
        let origin = Provenance::Group(self.name.clone());
        let mut findings = Vec::new();
        for (key, descriptor) in &self.entries {
            let warnings = descriptor
                .validate(options)
                .map_err(|source| RegistryError::Schema {
                    name: key.to_string(),
                    origin: origin.clone(),
                    source,
                })?;
            findings.extend(warnings.into_iter().map(|warning| Finding {
                origin: origin.clone(),
                property: key.clone(),
                warning,
            }));
        }
        Ok(findings)
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = (&'a PropName, &'a Descriptor);
    type IntoIter = indexmap::map::Iter<'a, PropName, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A JSON/TOML map read as a sequence, so repeated keys survive parsing.
///
/// Values stay in wire form; required-field checks happen per key afterwards.
struct OrderedEntries(Vec<(PropName, RawDescriptor)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of property name to descriptor")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<PropName, RawDescriptor>()? {
                    entries.push((key, value));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
