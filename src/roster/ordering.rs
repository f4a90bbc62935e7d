//! In-place reordering of the roster.

use std::cmp::Ordering;

use tracing::debug;

use super::store::Roster;
use crate::models::StudentRecord;

/// Orders the roster can be rearranged into. Whole records move; the roster
/// keeps the new order until it is sorted again or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Highest total first.
    TotalDescending,
    TotalAscending,
    /// Ascending student identifier.
    Id,
    /// Case-insensitive, ascending.
    Name,
}

impl SortKey {
    /// Ordering of two records under this key. Equal keys compare equal, and
    /// the stable sort then keeps their current relative order.
    pub fn compare(self, a: &StudentRecord, b: &StudentRecord) -> Ordering {
        match self {
            SortKey::TotalDescending => b.total().total_cmp(&a.total()),
            SortKey::TotalAscending => a.total().total_cmp(&b.total()),
            SortKey::Id => a.id().cmp(&b.id()),
            SortKey::Name => compare_names(a.name(), b.name()),
        }
    }
}

/// Byte-wise comparison after ASCII lowercasing.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}

impl Roster {
    /// Reorder the whole roster by `key`. The order holds until the next sort
    /// or commit.
    pub fn sort(&mut self, key: SortKey) {
        debug!(?key, records = self.records.len(), "sorting roster");
        self.records.sort_by(|a, b| key.compare(a, b));
    }

    pub fn sort_by_total(&mut self, descending: bool) {
        if descending {
            self.sort(SortKey::TotalDescending);
        } else {
            self.sort(SortKey::TotalAscending);
        }
    }

    pub fn sort_by_id(&mut self) {
        self.sort(SortKey::Id);
    }

    pub fn sort_by_name(&mut self) {
        self.sort(SortKey::Name);
    }
}
