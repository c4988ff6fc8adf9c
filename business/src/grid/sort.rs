//! Single-column sort state.

use std::fmt;

use ustr::Ustr;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Header marker for this direction.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Which column the rows are ordered by, and in which direction.
///
/// `order_by` is `None` only for an empty schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub order_by: Option<Ustr>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(order_by: Option<Ustr>) -> Self {
        Self {
            order_by,
            direction: SortDirection::Asc,
        }
    }

    pub fn is_ordered_by(&self, id: Ustr) -> bool {
        self.order_by == Some(id)
    }

    /// Applies a header click on `id`, which must already be known sortable.
    ///
    /// The active column flips direction; any other column becomes active
    /// ascending. There is no unsorted state.
    pub fn click(&mut self, id: Ustr) {
        if self.is_ordered_by(id) {
            self.direction = self.direction.toggled();
        } else {
            self.order_by = Some(id);
            self.direction = SortDirection::Asc;
        }
    }
}
