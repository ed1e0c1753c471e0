//! core::compose
//!
//! Building a page's table from groups and local descriptors.
//!
//! # Operations
//!
//! - [`import_all`] - the whole group, in group order
//! - [`import_subset`] - exactly the named properties, in request order
//! - [`Table::local`] - descriptors declared by the page itself
//! - [`merge`] - concatenate tables, rejecting any repeated name
//!
//! # Over-inclusion
//!
//! Importing a whole group is only correct while the group's membership
//! equals the component's real surface. Once a group grows a property the
//! component does not have, every wholesale importer silently documents it.
//! Selective import is therefore offered in exactly the same shape as
//! whole-group import ([`Group::only`] next to [`Group::all`], and
//! [`TableBuilder::only`] next to [`TableBuilder::all`]).
//!
//! # Example
//!
//! ```
//! use propdoc::core::compose::{merge, Table};
//! use propdoc::core::descriptor::Descriptor;
//! use propdoc::core::group::Group;
//! use propdoc::core::types::{Category, GroupName, PropName};
//!
//! let text = |summary: &str| {
//!     Descriptor::builder()
//!         .description("A legend prop.")
//!         .summary(summary)
//!         .category(Category::general())
//!         .build()
//!         .unwrap()
//! };
//! let legend = Group::define(
//!     GroupName::new("Legend").unwrap(),
//!     [
//!         (PropName::new("layout").unwrap(), text("horizontal | vertical")),
//!         (PropName::new("align").unwrap(), text("left | center | right")),
//!     ],
//! )
//! .unwrap();
//!
//! let page = Table::builder()
//!     .only(&legend, ["align"])
//!     .local("legendType", text("'line' | 'none'"))
//!     .build()
//!     .unwrap();
//!
//! let keys: Vec<&str> = page.keys().map(|k| k.as_str()).collect();
//! assert_eq!(keys, ["align", "legendType"]);
//!
//! // The same table from the free functions
//! let same = merge([
//!     legend.only(["align"]).unwrap(),
//!     Table::local([(PropName::new("legendType").unwrap(), text("'line' | 'none'"))]).unwrap(),
//! ])
//! .unwrap();
//! assert_eq!(page, same);
//! ```

pub mod table;

pub use table::{Record, Table};

use indexmap::map::Entry as MapEntry;
use indexmap::IndexMap;

use super::descriptor::Descriptor;
use super::group::{Group, Provenance, RegistryError};
use super::types::PropName;
use table::Entry;

/// Import every property of a group, in group order.
///
/// Use this only when the consuming component exposes every property in
/// the group.
pub fn import_all(group: &Group) -> Table {
    let origin = Provenance::Group(group.name().clone());
    let entries = group
        .iter()
        .map(|(name, descriptor)| {
            (
                name.clone(),
                Entry {
                    descriptor: descriptor.clone(),
                    origin: origin.clone(),
                },
            )
        })
        .collect();

    tracing::debug!(group = %group.name(), entries = group.len(), "imported whole group");
    Table { entries }
}

/// Import the named properties of a group, in the order requested.
///
/// # Errors
///
/// Returns `RegistryError::UnknownProperty` naming the first requested key
/// the group lacks, and `RegistryError::DuplicateKey` if a name is
/// requested twice.
pub fn import_subset<I, S>(group: &Group, names: I) -> Result<Table, RegistryError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let origin = Provenance::Group(group.name().clone());
    let mut entries = IndexMap::new();

    for name in names {
        let name = name.as_ref();
        let descriptor = group.get(name)?;
        match entries.entry(PropName::new(name)?) {
            MapEntry::Occupied(_) => {
                return Err(RegistryError::DuplicateKey {
                    name: name.to_string(),
                    first: origin.clone(),
                    second: origin,
                })
            }
            MapEntry::Vacant(slot) => {
                slot.insert(Entry {
                    descriptor: descriptor.clone(),
                    origin: origin.clone(),
                });
            }
        }
    }

    tracing::debug!(
        group = %group.name(),
        selected = entries.len(),
        available = group.len(),
        "imported subset"
    );
    Ok(Table { entries })
}

/// Concatenate tables into one, preserving input order.
///
/// # Errors
///
/// Returns `RegistryError::DuplicateKey` naming both origins if a property
/// appears in more than one input. There is no last-write-wins.
pub fn merge(tables: impl IntoIterator<Item = Table>) -> Result<Table, RegistryError> {
    let mut entries: IndexMap<PropName, Entry> = IndexMap::new();

    for table in tables {
        for (name, entry) in table.entries {
            match entries.entry(name) {
                MapEntry::Occupied(existing) => {
                    return Err(RegistryError::DuplicateKey {
                        name: existing.key().to_string(),
                        first: existing.get().origin.clone(),
                        second: entry.origin,
                    })
                }
                MapEntry::Vacant(slot) => {
                    slot.insert(entry);
                }
            }
        }
    }

    tracing::debug!(entries = entries.len(), "merged tables");
    Ok(Table { entries })
}

impl Table {
    /// Build a table of page-local descriptors.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateKey` if a name repeats.
    pub fn local(
        entries: impl IntoIterator<Item = (PropName, Descriptor)>,
    ) -> Result<Self, RegistryError> {
        let mut map = IndexMap::new();
        for (name, descriptor) in entries {
            match map.entry(name) {
                MapEntry::Occupied(slot) => {
                    return Err(RegistryError::DuplicateKey {
                        name: slot.key().to_string(),
                        first: Provenance::Local,
                        second: Provenance::Local,
                    })
                }
                MapEntry::Vacant(slot) => {
                    slot.insert(Entry {
                        descriptor,
                        origin: Provenance::Local,
                    });
                }
            }
        }
        Ok(Self { entries: map })
    }

    /// Start a page table.
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }
}

impl Group {
    /// Import every property. See [`import_all`].
    pub fn all(&self) -> Table {
        import_all(self)
    }

    /// Import the named properties. See [`import_subset`].
    ///
    /// # Errors
    ///
    /// Same as [`import_subset`].
    pub fn only<I, S>(&self, names: I) -> Result<Table, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        import_subset(self, names)
    }
}

/// Fluent page-table assembly.
///
/// Each step is recorded in call order; the first failing step is reported
/// by [`build`](Self::build), which then merges everything.
#[derive(Debug, Default)]
pub struct TableBuilder {
    parts: Vec<Result<Table, RegistryError>>,
}

impl TableBuilder {
    /// Add every property of a group.
    pub fn all(mut self, group: &Group) -> Self {
        self.parts.push(Ok(import_all(group)));
        self
    }

    /// Add the named properties of a group.
    pub fn only<I, S>(mut self, group: &Group, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parts.push(import_subset(group, names));
        self
    }

    /// Add a page-local descriptor.
    pub fn local(mut self, name: &str, descriptor: Descriptor) -> Self {
        let part = PropName::new(name)
            .map_err(RegistryError::from)
            .and_then(|name| Table::local([(name, descriptor)]));
        self.parts.push(part);
        self
    }

    /// Add an already composed table.
    pub fn table(mut self, table: Table) -> Self {
        self.parts.push(Ok(table));
        self
    }

    /// Merge all steps.
    ///
    /// # Errors
    ///
    /// Returns the first error recorded by a step, or the merge error.
    pub fn build(self) -> Result<Table, RegistryError> {
        let tables = self.parts.into_iter().collect::<Result<Vec<_>, _>>()?;
        merge(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Category, DefaultValue, GroupName};

    fn descriptor(description: &str, summary: &str) -> Descriptor {
        Descriptor::builder()
            .description(description)
            .summary(summary)
            .category(Category::general())
            .build()
            .unwrap()
    }

    fn key(s: &str) -> PropName {
        PropName::new(s).unwrap()
    }

    fn legend() -> Group {
        let layout = Descriptor::builder()
            .description("The layout of legend items.")
            .summary("horizontal | vertical")
            .default_value("horizontal")
            .category(Category::general())
            .build()
            .unwrap();
        Group::define(
            GroupName::new("Legend").unwrap(),
            [
                (key("width"), descriptor("The width of legend.", "Number")),
                (key("height"), descriptor("The height of legend.", "Number")),
                (key("layout"), layout),
            ],
        )
        .unwrap()
    }

    fn axis() -> Group {
        Group::define(
            GroupName::new("Axis").unwrap(),
            [
                (key("tickCount"), descriptor("The count of axis ticks.", "Number")),
                (key("width"), descriptor("The width of axis.", "Number")),
            ],
        )
        .unwrap()
    }

    fn names(table: &Table) -> Vec<&str> {
        table.keys().map(PropName::as_str).collect()
    }

    mod import_all_fn {
        use super::*;

        #[test]
        fn keeps_group_order() {
            let t = import_all(&legend());
            assert_eq!(names(&t), ["width", "height", "layout"]);
        }

        #[test]
        fn equals_subset_of_all_keys() {
            let g = legend();
            let all = import_all(&g);
            let subset = import_subset(&g, g.keys()).unwrap();
            assert_eq!(all, subset);
        }

        #[test]
        fn records_provenance() {
            let t = legend().all();
            assert_eq!(
                t.provenance("layout"),
                Some(&Provenance::Group(GroupName::new("Legend").unwrap()))
            );
        }
    }

    mod import_subset_fn {
        use super::*;

        #[test]
        fn single_layout_record() {
            let t = import_subset(&legend(), ["layout"]).unwrap();
            assert_eq!(t.len(), 1);

            let records = t.to_records();
            assert_eq!(
                records,
                vec![Record {
                    name: "layout".to_string(),
                    description: "The layout of legend items.".to_string(),
                    type_summary: "horizontal | vertical".to_string(),
                    type_detail: None,
                    default_value: Some(DefaultValue::from("horizontal")),
                    category: "General".to_string(),
                }]
            );
        }

        #[test]
        fn request_order_wins() {
            let t = import_subset(&legend(), ["layout", "width"]).unwrap();
            assert_eq!(names(&t), ["layout", "width"]);
        }

        #[test]
        fn unknown_name() {
            let err = import_subset(&legend(), ["nonexistent"]).unwrap_err();
            assert!(matches!(err, RegistryError::UnknownProperty { ref name, .. } if name == "nonexistent"));
            assert!(err.to_string().contains("nonexistent"));
        }

        #[test]
        fn unknown_after_known_still_fails() {
            assert!(import_subset(&legend(), ["width", "depth"]).is_err());
        }

        #[test]
        fn repeated_request_rejected() {
            let err = import_subset(&legend(), ["width", "width"]).unwrap_err();
            assert!(matches!(err, RegistryError::DuplicateKey { .. }));
        }

        #[test]
        fn empty_request() {
            let t = import_subset(&legend(), Vec::<&str>::new()).unwrap();
            assert!(t.is_empty());
        }

        #[test]
        fn content_identical_to_source() {
            let g = legend();
            let t = g.only(["height"]).unwrap();
            assert_eq!(t.get("height"), g.get("height").ok());
        }
    }

    mod merge_fn {
        use super::*;

        #[test]
        fn disjoint_concatenates() {
            let a = legend().only(["layout", "height"]).unwrap();
            let b = axis().only(["tickCount"]).unwrap();
            let merged = merge([a, b]).unwrap();
            assert_eq!(merged.len(), 3);
            assert_eq!(names(&merged), ["layout", "height", "tickCount"]);
        }

        #[test]
        fn shared_key_rejected() {
            let err = merge([legend().all(), axis().all()]).unwrap_err();
            assert_eq!(
                err.to_string(),
                "duplicate property 'width': provided by group 'Legend' and group 'Axis'"
            );
        }

        #[test]
        fn local_collides_with_import() {
            let local = Table::local([(key("width"), descriptor("Custom width.", "String"))])
                .unwrap();
            let err = merge([legend().only(["width"]).unwrap(), local]).unwrap_err();
            assert!(err.to_string().contains("page-local props"));
        }

        #[test]
        fn empty_input() {
            assert!(merge(Vec::new()).unwrap().is_empty());
        }
    }

    mod builder {
        use super::*;

        #[test]
        fn mixes_sources_in_call_order() {
            let t = Table::builder()
                .local("legendType", descriptor("The type of icon in legend.", "'line' | 'none'"))
                .only(&legend(), ["layout"])
                .all(&axis())
                .build()
                .unwrap();
            assert_eq!(names(&t), ["legendType", "layout", "tickCount", "width"]);
            assert_eq!(t.provenance("legendType"), Some(&Provenance::Local));
        }

        #[test]
        fn reports_first_failure() {
            let err = Table::builder()
                .only(&legend(), ["nonexistent"])
                .local("bad name", descriptor("d", "Number"))
                .build()
                .unwrap_err();
            assert!(matches!(err, RegistryError::UnknownProperty { .. }));
        }

        #[test]
        fn invalid_local_name() {
            let err = Table::builder()
                .local("bad name", descriptor("d", "Number"))
                .build()
                .unwrap_err();
            assert!(matches!(err, RegistryError::InvalidName(_)));
        }

        #[test]
        fn duplicate_locals() {
            let err = Table::builder()
                .local("width", descriptor("a", "Number"))
                .local("width", descriptor("b", "Number"))
                .build()
                .unwrap_err();
            assert_eq!(err.to_string(), "duplicate property 'width' in page-local props");
        }
    }
}
