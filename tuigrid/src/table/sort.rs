//! Derived-sort computation for the table.

use super::Column;
use crate::value::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// The direction glyph shown next to the active header title.
    pub fn indicator(self) -> char {
        match self {
            SortOrder::Ascending => '▲',
            SortOrder::Descending => '▼',
        }
    }
}

/// Which column the table is sorted by, if any, and in which direction.
///
/// Mutated only through [`SortState::toggle`], which encodes the header
/// interaction: a non-active sortable column becomes active ascending, the
/// active column flips direction, a non-sortable column is ignored. Never
/// reset automatically when the record collection changes.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    active: Option<Column>,
    order: SortOrder,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_ref().map(|c| c.key.as_str())
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn is_active(&self, column: &Column) -> bool {
        self.active_key() == Some(column.key.as_str())
    }

    pub fn toggle(&mut self, column: &Column) {
        if !column.sortable {
            return;
        }
        match &self.active {
            Some(active) if active.key == column.key => {
                self.order = self.order.reversed();
            }
            _ => {
                self.active = Some(column.clone());
                self.order = SortOrder::Ascending;
            }
        }
        log::debug!(
            "[table] sort toggled: column={} order={:?}",
            column.key,
            self.order
        );
    }
}

/// Derives the displayed order of `records` under `sort`.
///
/// With no active column the input order is returned unchanged. Otherwise
/// the records are stably sorted by the value each one carries under the
/// active column's data index; ties keep their relative input order. The
/// input is never mutated — the result is a fresh view of borrowed records,
/// recomputed on every call.
pub fn sorted_view<'a, R: Record>(records: &'a [R], sort: &SortState) -> Vec<&'a R> {
    let mut view: Vec<&R> = records.iter().collect();
    if let Some(column) = &sort.active {
        let order = sort.order;
        view.sort_by(|a, b| {
            let cmp = a
                .field(&column.data_index)
                .natural_cmp(&b.field(&column.data_index));
            match order {
                SortOrder::Ascending => cmp,
                SortOrder::Descending => cmp.reverse(),
            }
        });
    }
    view
}
