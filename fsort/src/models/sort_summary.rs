// src/models/sort_summary.rs
use crate::models::Category;

/// Totals collected over one run of the sorter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortSummary {
    pub folders: usize,
    pub files: usize,
    pub per_category: [usize; 6],
    pub renamed: usize,
    pub failed_renames: usize,
    pub archives_extracted: usize,
    pub archives_failed: usize,
    pub folders_removed: usize,
}

impl SortSummary {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            folders: 0,
            files: 0,
            per_category: [0; 6],
            renamed: 0,
            failed_renames: 0,
            archives_extracted: 0,
            archives_failed: 0,
            folders_removed: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn count(&self, category: Category) -> usize {
        self.per_category[category.index()]
    }

    #[inline]
    pub const fn record(&mut self, category: Category) {
        let slot = category.index();
        self.per_category[slot] = self.per_category[slot].saturating_add(1);
    }
}
