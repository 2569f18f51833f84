//! Ordering of the entries of one directory level

use super::config::{Grouping, Options, SortKey};
use super::entry::Entry;

/// Apply the sort key, then reversal, then grouping.
///
/// Every step is stable, so entries that compare equal keep the order they
/// had coming out of the previous step.
pub fn order_entries(mut entries: Vec<Entry>, options: &Options) -> Vec<Entry> {
    match options.sort_key {
        SortKey::None => {}
        SortKey::Name => entries.sort_by(|a, b| a.name().cmp(b.name())),
        // Unreadable times compare as None and sort first.
        SortKey::Time => entries.sort_by_cached_key(|e| e.modified().ok()),
    }

    if options.reverse_order {
        entries.reverse();
    }

    match options.grouping {
        Grouping::None => {}
        Grouping::DirectoriesFirst => entries.sort_by_key(|e| !e.is_dir()),
        Grouping::FilesFirst => entries.sort_by_key(|e| e.is_dir()),
    }

    entries
}
