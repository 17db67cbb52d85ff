//! Entity handles and per-entity bookkeeping

use std::fmt;

slotmap::new_key_type! {
    /// Generational entity handle.
    ///
    /// A handle whose slot has been swept and reused no longer resolves,
    /// so stale ids held by projectiles or chain attacks stay harmless.
    pub struct Entity;
}

/// Static label attached to an entity at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(pub &'static str);

impl Tag {
    /// Tag name
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Metadata the world keeps for each live entity
#[derive(Debug, Clone)]
pub(crate) struct EntityRecord {
    /// Monotonic creation number, never reused
    pub serial: u64,
    pub tags: Vec<Tag>,
    pub active: bool,
}

impl EntityRecord {
    pub fn new(serial: u64, tags: &[Tag]) -> Self {
        let mut tags = tags.to_vec();
        tags.sort_unstable();
        tags.dedup();
        Self {
            serial,
            tags,
            active: true,
        }
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.binary_search(&tag).is_ok()
    }
}
