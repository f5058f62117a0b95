//! Unique-ID allocation for row blocks.
//!
//! IDs are tracked per registry value. An editor session owns one registry;
//! each stylesheet compilation owns another to spot duplicates.

use std::collections::HashSet;

/// Outcome of [`UniqueIdRegistry::allocate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdAssignment {
    /// The block had no ID and received this one
    Assigned(String),
    /// The block's ID was already taken and was replaced with this one
    Reassigned { previous: String, id: String },
    /// The block's ID was free and is kept
    Kept(String),
}

impl IdAssignment {
    pub fn id(&self) -> &str {
        match self {
            IdAssignment::Assigned(id) | IdAssignment::Kept(id) => id,
            IdAssignment::Reassigned { id, .. } => id,
        }
    }

    /// Whether the caller needs to write a new ID back to the block.
    pub fn changed(&self) -> bool {
        !matches!(self, IdAssignment::Kept(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct UniqueIdRegistry {
    issued: HashSet<String>,
}

impl UniqueIdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive an ID from an editor client ID: `_` followed by the nine
    /// characters starting at offset 2.
    pub fn derive(client_id: &str) -> String {
        let mut id = String::with_capacity(10);
        id.push('_');
        id.extend(client_id.chars().skip(2).take(9));
        id
    }

    /// Mark `id` as issued. Returns false if it was already present.
    pub fn record(&mut self, id: &str) -> bool {
        self.issued.insert(id.to_string())
    }

    /// Decide the ID for a block that currently carries `current`. An empty
    /// ID counts as none.
    pub fn allocate(&mut self, current: Option<&str>, client_id: &str) -> IdAssignment {
        match current.filter(|id| !id.is_empty()) {
            None => {
                let id = Self::derive(client_id);
                self.record(&id);
                IdAssignment::Assigned(id)
            }
            Some(existing) if self.contains(existing) => {
                let id = Self::derive(client_id);
                self.record(&id);
                IdAssignment::Reassigned {
                    previous: existing.to_string(),
                    id,
                }
            }
            Some(existing) => {
                self.record(existing);
                IdAssignment::Kept(existing.to_string())
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.issued.contains(id)
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIENT: &str = "3f9c2a1b-77de-4c1a-9b0e-0123456789ab";

    #[test]
    fn derive_takes_nine_chars_after_offset_two() {
        assert_eq!(UniqueIdRegistry::derive(CLIENT), "_9c2a1b-77");
        assert_eq!(UniqueIdRegistry::derive("ab"), "_");
    }

    #[test]
    fn new_blocks_get_an_id() {
        let mut reg = UniqueIdRegistry::new();
        let a = reg.allocate(None, CLIENT);
        assert_eq!(a, IdAssignment::Assigned("_9c2a1b-77".into()));
        assert!(a.changed());
        assert!(reg.contains("_9c2a1b-77"));
    }

    #[test]
    fn empty_ids_are_treated_as_missing() {
        let mut reg = UniqueIdRegistry::new();
        let a = reg.allocate(Some(""), CLIENT);
        assert_eq!(a, IdAssignment::Assigned("_9c2a1b-77".into()));
        assert!(!reg.contains(""));
    }

    #[test]
    fn duplicated_ids_are_replaced() {
        let mut reg = UniqueIdRegistry::new();
        assert_eq!(reg.allocate(Some("_copy"), CLIENT), IdAssignment::Kept("_copy".into()));
        let second = reg.allocate(Some("_copy"), "xxabcdefghijk");
        assert_eq!(
            second,
            IdAssignment::Reassigned {
                previous: "_copy".into(),
                id: "_abcdefghi".into()
            }
        );
        assert_eq!(second.id(), "_abcdefghi");
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn registries_do_not_share_state() {
        let mut one = UniqueIdRegistry::new();
        let two = UniqueIdRegistry::new();
        assert!(one.record("_a"));
        assert!(!one.record("_a"));
        assert!(two.is_empty());
    }
}
