//! core::compose::table
//!
//! The composed table handed to a documentation renderer.
//!
//! # Wire Contract
//!
//! A table serializes as an ordered record list:
//!
//! ```json
//! [
//!   {
//!     "name": "layout",
//!     "description": "The layout of legend items.",
//!     "typeSummary": "horizontal | vertical",
//!     "defaultValue": "horizontal",
//!     "category": "General"
//!   }
//! ]
//! ```
//!
//! `typeDetail` and `defaultValue` are omitted when absent. Provenance is
//! kept in memory for diagnostics and is not part of the contract.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::descriptor::Descriptor;
use crate::core::group::Provenance;
use crate::core::types::{DefaultValue, PropName};

/// One row of the renderer contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Record {
    pub name: String,
    pub description: String,
    pub type_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
    pub category: String,
}

impl Record {
    fn new(name: &PropName, descriptor: &Descriptor) -> Self {
        Self {
            name: name.to_string(),
            description: descriptor.description().to_string(),
            type_summary: descriptor.summary().to_string(),
            type_detail: descriptor.detail().map(str::to_string),
            default_value: descriptor.default_value().cloned(),
            category: descriptor.category().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry {
    pub(crate) descriptor: Descriptor,
    pub(crate) origin: Provenance,
}

/// A consumer-facing property table.
///
/// Tables are produced by [`import_all`](super::import_all),
/// [`import_subset`](super::import_subset), [`Table::local`] and
/// [`merge`](super::merge). Like groups they are immutable values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub(crate) entries: IndexMap<PropName, Entry>,
}

impl Table {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Property names in presentation order.
    pub fn keys(&self) -> impl Iterator<Item = &PropName> + Clone + '_ {
        self.entries.keys()
    }

    /// Look up a descriptor.
    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.entries.get(name).map(|e| &e.descriptor)
    }

    /// Where an entry came from.
    pub fn provenance(&self, name: &str) -> Option<&Provenance> {
        self.entries.get(name).map(|e| &e.origin)
    }

    /// Entries in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (&PropName, &Descriptor)> + '_ {
        self.entries.iter().map(|(k, e)| (k, &e.descriptor))
    }

    /// Flatten into the renderer's record list.
    pub fn to_records(&self) -> Vec<Record> {
        self.iter().map(|(k, d)| Record::new(k, d)).collect()
    }

    /// Serialize the record list to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        let records = self.to_records();
        if pretty {
            serde_json::to_string_pretty(&records)
        } else {
            serde_json::to_string(&records)
        }
    }
}
