//! The option catalog: named option sets per analysis kind.

use rr_core::AnalysisKind;

use crate::defaults;
use crate::schema::OptionSet;
use crate::{CatalogError, CatalogResult};

/// Outcome of a rename, handed back so the caller can retarget any cached
/// "currently selected name" reference it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Old and new names were identical; the catalog was not touched.
    Unchanged,
    Renamed { old: String, new: String },
}

/// Per-kind mapping from option-set name to option set.
///
/// Names are unique within a kind and iteration follows insertion order.
/// Instances are caller-owned; there is no process-wide catalog. Callers
/// issue mutations serially, so each public operation is a complete critical
/// section on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionCatalog {
    sets: [Vec<OptionSet>; AnalysisKind::COUNT],
}

impl OptionCatalog {
    /// Empty catalog with no seeded entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-populated with the seeded defaults.
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        catalog.seed_defaults();
        catalog
    }

    /// (Re)populate every kind with its "production" set and the cheaper
    /// "test" variant. Deterministic; prior content is replaced.
    pub fn seed_defaults(&mut self) {
        for kind in AnalysisKind::ALL {
            let production = defaults::production_defaults(kind);
            let test = defaults::test_variant(kind, &production);
            self.sets[kind.index()] = vec![production, test];
        }
    }

    fn position(&self, kind: AnalysisKind, name: &str) -> Option<usize> {
        self.sets[kind.index()].iter().position(|s| s.name == name)
    }

    pub fn get(&self, kind: AnalysisKind, name: &str) -> CatalogResult<&OptionSet> {
        self.sets[kind.index()]
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| CatalogError::NotFound {
                kind,
                name: name.to_string(),
            })
    }

    /// Mutable access for in-place edits through the owning catalog.
    pub fn get_mut(&mut self, kind: AnalysisKind, name: &str) -> CatalogResult<&mut OptionSet> {
        self.sets[kind.index()]
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| CatalogError::NotFound {
                kind,
                name: name.to_string(),
            })
    }

    /// Option-set names for a kind, in insertion order.
    pub fn list_names(&self, kind: AnalysisKind) -> Vec<&str> {
        self.sets[kind.index()].iter().map(|s| s.name.as_str()).collect()
    }

    /// Insert or overwrite. Overwriting keeps the name's catalog position.
    pub fn put(&mut self, kind: AnalysisKind, set: OptionSet) -> CatalogResult<()> {
        if set.name.is_empty() {
            return Err(CatalogError::Validation {
                field: "name".to_string(),
                value: String::new(),
                reason: "option-set name must not be empty".to_string(),
            });
        }
        match self.position(kind, &set.name) {
            Some(idx) => self.sets[kind.index()][idx] = set,
            None => self.sets[kind.index()].push(set),
        }
        Ok(())
    }

    /// Remove and return the named set.
    ///
    /// Callers must make sure the name is not the one currently open for
    /// edit; that reference is theirs, not the catalog's.
    pub fn delete(&mut self, kind: AnalysisKind, name: &str) -> CatalogResult<OptionSet> {
        match self.position(kind, name) {
            Some(idx) => Ok(self.sets[kind.index()].remove(idx)),
            None => Err(CatalogError::NotFound {
                kind,
                name: name.to_string(),
            }),
        }
    }

    /// Deep copy an existing set under a new name, appended in catalog
    /// order.
    pub fn duplicate(
        &mut self,
        kind: AnalysisKind,
        source: &str,
        new_name: &str,
    ) -> CatalogResult<()> {
        if new_name.is_empty() {
            return Err(CatalogError::Validation {
                field: "name".to_string(),
                value: String::new(),
                reason: "option-set name must not be empty".to_string(),
            });
        }
        if self.position(kind, new_name).is_some() {
            return Err(CatalogError::Conflict {
                kind,
                name: new_name.to_string(),
            });
        }
        let mut copy = self.get(kind, source)?.clone();
        copy.name = new_name.to_string();
        self.sets[kind.index()].push(copy);
        Ok(())
    }

    /// Move a set from `old` to `new` atomically.
    ///
    /// All checks run before the single in-place mutation, so no reader ever
    /// observes zero or two entries for the same logical set. The set keeps
    /// its catalog position.
    pub fn rename(
        &mut self,
        kind: AnalysisKind,
        old: &str,
        new: &str,
    ) -> CatalogResult<RenameOutcome> {
        if old == new {
            return Ok(RenameOutcome::Unchanged);
        }
        if new.is_empty() {
            return Err(CatalogError::Validation {
                field: "name".to_string(),
                value: String::new(),
                reason: "option-set name must not be empty".to_string(),
            });
        }
        if self.position(kind, new).is_some() {
            return Err(CatalogError::Conflict {
                kind,
                name: new.to_string(),
            });
        }
        let idx = self
            .position(kind, old)
            .ok_or_else(|| CatalogError::NotFound {
                kind,
                name: old.to_string(),
            })?;
        self.sets[kind.index()][idx].name = new.to_string();
        Ok(RenameOutcome::Renamed {
            old: old.to_string(),
            new: new.to_string(),
        })
    }
}
