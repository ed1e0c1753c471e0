//! core::catalog
//!
//! Authoring format for groups and the pages that import them.
//!
//! # Format
//!
//! A catalog is a TOML or JSON document with two ordered lists:
//!
//! ```toml
//! [[groups]]
//! name = "Legend"
//!
//! [[groups.props]]
//! name = "layout"
//! description = "The layout of legend items."
//! defaultValue = "horizontal"
//! table = { type = { summary = "horizontal | vertical" }, category = "General" }
//!
//! [[pages]]
//! name = "Legend"
//! imports = [{ group = "Legend", only = ["layout"] }]
//! ```
//!
//! Each import names a group and exactly one of `only = [...]` or
//! `all = true`. Group names are resolved inside the catalog value only;
//! there is no process-wide registry to fall back on.
//!
//! # Example
//!
//! ```
//! use propdoc::core::catalog::{Catalog, CatalogFormat};
//!
//! let catalog = Catalog::parse(r#"
//!     [[groups]]
//!     name = "Legend"
//!     [[groups.props]]
//!     name = "width"
//!     description = "The width of legend."
//!     table = { type = { summary = "Number" }, category = "General" }
//!
//!     [[pages]]
//!     name = "Legend"
//!     imports = [{ group = "Legend", only = ["width"] }]
//! "#, CatalogFormat::Toml).unwrap();
//!
//! let table = catalog.compose_page("Legend").unwrap();
//! assert_eq!(table.len(), 1);
//! ```

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use super::compose::{import_all, import_subset, merge, Table};
use super::descriptor::schema::{RawDescriptor, RawTable};
use super::descriptor::{CheckLevel, Descriptor, ValidationOptions};
use super::group::{Finding, Group, Provenance, RegistryError};
use super::types::{DefaultValue, GroupName, PropName};

/// Errors from parsing or composing a catalog.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    ParseError(String),

    #[error("group '{0}' is defined more than once")]
    DuplicateGroup(GroupName),

    #[error("page '{0}' is defined more than once")]
    DuplicatePage(String),

    #[error("page name cannot be empty")]
    EmptyPageName,

    #[error("unknown page '{0}'")]
    UnknownPage(String),

    #[error("page '{page}' imports unknown group '{group}'")]
    UnknownGroup { page: String, group: String },

    #[error("page '{page}' has an invalid import of group '{group}': {message}")]
    InvalidImport {
        page: String,
        group: String,
        message: String,
    },

    #[error("page '{page}' imports all of group '{group}'; list the properties it uses with `only`")]
    ImportAllDenied { page: String, group: GroupName },

    #[error("page '{page}': {source}")]
    Page {
        page: String,
        source: RegistryError,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Serialization format of a catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Pick a format from a file extension (`.toml` or `.json`).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(CatalogFormat::Toml),
            "json" => Some(CatalogFormat::Json),
            _ => None,
        }
    }
}

/// Which properties an import takes from its group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Only(Vec<String>),
}

/// One import of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub group: GroupName,
    pub selection: Selection,
}

/// A consumer's composition recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    name: String,
    imports: Vec<Import>,
    props: Vec<(PropName, Descriptor)>,
}

impl Page {
    /// Page name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Imports in declaration order.
    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    /// Page-local descriptors in declaration order.
    pub fn props(&self) -> &[(PropName, Descriptor)] {
        &self.props
    }
}

/// Policies applied by [`Catalog::check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckOptions {
    /// Descriptor content checks.
    pub validation: ValidationOptions,
    /// Treatment of `all = true` imports.
    pub import_all: CheckLevel,
}

impl CheckOptions {
    /// Upgrade every `warn` level to `error`.
    pub fn strict(self) -> Self {
        Self {
            validation: ValidationOptions {
                default_mismatch: self.validation.default_mismatch.strict(),
                duplicate_literal: self.validation.duplicate_literal.strict(),
            },
            import_all: self.import_all.strict(),
        }
    }
}

/// A non-fatal result of [`Catalog::check`].
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// A descriptor check at warn level.
    Descriptor(Finding),
    /// A page imports a whole group.
    ImportAll { page: String, group: GroupName },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Descriptor(finding) => write!(f, "{finding}"),
            Warning::ImportAll { page, group } => write!(
                f,
                "page '{page}' imports all of group '{group}'; new group members will appear on this page"
            ),
        }
    }
}

/// Summary of a successful check.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckReport {
    /// Number of groups defined.
    pub groups: usize,
    /// Number of pages composed.
    pub pages: usize,
    /// Warnings in catalog order.
    pub warnings: Vec<Warning>,
}

/// Groups and pages parsed from one document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    groups: IndexMap<GroupName, Group>,
    pages: IndexMap<String, Page>,
}

impl Catalog {
    /// Parse a catalog document.
    ///
    /// Groups are fully defined before any page is resolved, so pages may
    /// appear anywhere in the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed, a descriptor fails its
    /// schema, a name repeats, or a page imports an unknown group.
    pub fn parse(contents: &str, format: CatalogFormat) -> Result<Self, CatalogError> {
        let file: CatalogFile = match format {
            CatalogFormat::Toml => {
                toml::from_str(contents).map_err(|e| CatalogError::ParseError(e.to_string()))?
            }
            CatalogFormat::Json => serde_json::from_str(contents)
                .map_err(|e| CatalogError::ParseError(e.to_string()))?,
        };

        let mut groups = IndexMap::new();
        for spec in file.groups {
            let origin = Provenance::Group(spec.name.clone());
            let entries = spec
                .props
                .into_iter()
                .map(|prop| prop.into_entry(&origin))
                .collect::<Result<Vec<_>, _>>()?;
            let group = Group::define(spec.name.clone(), entries)?;
            if groups.insert(spec.name.clone(), group).is_some() {
                return Err(CatalogError::DuplicateGroup(spec.name));
            }
        }

        let mut pages = IndexMap::new();
        for spec in file.pages {
            let page = spec.resolve(&groups)?;
            if pages.contains_key(&page.name) {
                return Err(CatalogError::DuplicatePage(page.name));
            }
            pages.insert(page.name.clone(), page);
        }

        tracing::debug!(groups = groups.len(), pages = pages.len(), "parsed catalog");
        Ok(Self { groups, pages })
    }

    /// Look up a group by name.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// Groups in document order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> + '_ {
        self.groups.values()
    }

    /// Look up a page by name.
    pub fn page(&self, name: &str) -> Option<&Page> {
        self.pages.get(name)
    }

    /// Pages in document order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> + '_ {
        self.pages.values()
    }

    /// Compose a page's table.
    ///
    /// The table is the page's imports in declaration order followed by its
    /// local props.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownPage`, or `CatalogError::Page` wrapping
    /// an unknown property or a duplicate name.
    pub fn compose_page(&self, name: &str) -> Result<Table, CatalogError> {
        let page = self
            .pages
            .get(name)
            .ok_or_else(|| CatalogError::UnknownPage(name.to_string()))?;
        self.compose(page)
    }

    fn compose(&self, page: &Page) -> Result<Table, CatalogError> {
        let wrap = |source| CatalogError::Page {
            page: page.name.clone(),
            source,
        };

        let mut tables = Vec::with_capacity(page.imports.len() + 1);
        for import in &page.imports {
            // Imports were resolved against this catalog when it was parsed.
            let Some(group) = self.groups.get(&import.group) else {
                return Err(CatalogError::UnknownGroup {
                    page: page.name.clone(),
                    group: import.group.to_string(),
                });
            };
            let table = match &import.selection {
                Selection::All => import_all(group),
                Selection::Only(names) => import_subset(group, names).map_err(wrap)?,
            };
            tables.push(table);
        }
        tables.push(Table::local(page.props.iter().cloned()).map_err(wrap)?);

        merge(tables).map_err(wrap)
    }

    /// Validate every group and compose every page.
    ///
    /// # Errors
    ///
    /// Returns the first failure: a descriptor check or the `import_all`
    /// policy at error level, or a composition error.
    pub fn check(&self, options: &CheckOptions) -> Result<CheckReport, CatalogError> {
        let mut warnings = Vec::new();

        for group in self.groups.values() {
            let findings = group.validate(&options.validation)?;
            warnings.extend(findings.into_iter().map(Warning::Descriptor));
        }

        for page in self.pages.values() {
            for (name, descriptor) in &page.props {
                let found = descriptor
                    .validate(&options.validation)
                    .map_err(|source| CatalogError::Page {
                        page: page.name.clone(),
                        source: RegistryError::Schema {
                            name: name.to_string(),
                            origin: Provenance::Local,
                            source,
                        },
                    })?;
                warnings.extend(found.into_iter().map(|warning| {
                    Warning::Descriptor(Finding {
                        origin: Provenance::Local,
                        property: name.clone(),
                        warning,
                    })
                }));
            }

            warnings.extend(import_policy(page, options.import_all)?);
            self.compose(page)?;
        }

        Ok(CheckReport {
            groups: self.groups.len(),
            pages: self.pages.len(),
            warnings,
        })
    }

    /// Compose a page's table under the check policies.
    ///
    /// The `import_all` policy is applied to the page's imports and the
    /// descriptor checks to every entry of the composed table, so nothing
    /// a check at error level rejects reaches the renderer.
    ///
    /// # Errors
    ///
    /// Returns what [`compose_page`](Self::compose_page) returns, plus
    /// `CatalogError::ImportAllDenied` and `CatalogError::Page` wrapping a
    /// `RegistryError::Schema` for checks at error level.
    pub fn compose_page_checked(
        &self,
        name: &str,
        options: &CheckOptions,
    ) -> Result<(Table, Vec<Warning>), CatalogError> {
        let page = self
            .pages
            .get(name)
            .ok_or_else(|| CatalogError::UnknownPage(name.to_string()))?;

        let mut warnings = import_policy(page, options.import_all)?;
        let table = self.compose(page)?;

        for (key, descriptor) in table.iter() {
            let origin = table
                .provenance(key.as_str())
                .cloned()
                .unwrap_or(Provenance::Local);
            let found = match descriptor.validate(&options.validation) {
                Ok(found) => found,
                Err(source) => {
                    return Err(CatalogError::Page {
                        page: page.name.clone(),
                        source: RegistryError::Schema {
                            name: key.to_string(),
                            origin,
                            source,
                        },
                    })
                }
            };
            warnings.extend(found.into_iter().map(|warning| {
                Warning::Descriptor(Finding {
                    origin: origin.clone(),
                    property: key.clone(),
                    warning,
                })
            }));
        }

        Ok((table, warnings))
    }
}

/// Apply the `import_all` policy to a page's whole-group imports.
fn import_policy(page: &Page, level: CheckLevel) -> Result<Vec<Warning>, CatalogError> {
    let mut warnings = Vec::new();
    for import in &page.imports {
        if import.selection != Selection::All {
            continue;
        }
        match level {
            CheckLevel::Error => {
                return Err(CatalogError::ImportAllDenied {
                    page: page.name.clone(),
                    group: import.group.clone(),
                })
            }
            CheckLevel::Warn => warnings.push(Warning::ImportAll {
                page: page.name.clone(),
                group: import.group.clone(),
            }),
            CheckLevel::Ignore => {}
        }
    }
    Ok(warnings)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    groups: Vec<GroupSpec>,
    #[serde(default)]
    pages: Vec<PageSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupSpec {
    name: GroupName,
    #[serde(default)]
    props: Vec<PropSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PropSpec {
    name: PropName,
    description: Option<String>,
    default_value: Option<DefaultValue>,
    table: Option<RawTable>,
}

impl PropSpec {
    fn into_entry(self, origin: &Provenance) -> Result<(PropName, Descriptor), RegistryError> {
        let raw = RawDescriptor {
            description: self.description,
            default_value: self.default_value,
            table: self.table,
        };
        match Descriptor::try_from(raw) {
            Ok(descriptor) => Ok((self.name, descriptor)),
            Err(source) => Err(RegistryError::Schema {
                name: self.name.to_string(),
                origin: origin.clone(),
                source,
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PageSpec {
    name: String,
    #[serde(default)]
    imports: Vec<ImportSpec>,
    #[serde(default)]
    props: Vec<PropSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ImportSpec {
    group: String,
    only: Option<Vec<String>>,
    all: Option<bool>,
}

impl PageSpec {
    fn resolve(self, groups: &IndexMap<GroupName, Group>) -> Result<Page, CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyPageName);
        }

        let mut imports = Vec::with_capacity(self.imports.len());
        for spec in self.imports {
            let invalid = |message: &str| CatalogError::InvalidImport {
                page: self.name.clone(),
                group: spec.group.clone(),
                message: message.to_string(),
            };
            let selection = match (spec.only.clone(), spec.all) {
                (Some(names), None) => Selection::Only(names),
                (None, Some(true)) => Selection::All,
                (None, Some(false)) | (None, None) => {
                    return Err(invalid("expected `only = [...]` or `all = true`"))
                }
                (Some(_), Some(_)) => {
                    return Err(invalid("`only` and `all` cannot be combined"))
                }
            };
            let group = groups
                .get_key_value(spec.group.as_str())
                .map(|(k, _)| k.clone())
                .ok_or_else(|| CatalogError::UnknownGroup {
                    page: self.name.clone(),
                    group: spec.group.clone(),
                })?;
            imports.push(Import { group, selection });
        }

        let origin = Provenance::Local;
        let props = self
            .props
            .into_iter()
            .map(|prop| prop.into_entry(&origin))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| CatalogError::Page {
                page: self.name.clone(),
                source,
            })?;

        Ok(Page {
            name: self.name,
            imports,
            props,
        })
    }
}
