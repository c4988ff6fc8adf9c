//! Column schema for the data grid.
//!
//! A [`Column`] declares how one row field is labeled, sorted and displayed,
//! and at which viewport classes it is visible. Columns carry no state; the
//! order of a schema is the display order.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use ustr::Ustr;

use super::cell::Cell;
use super::{Row, Viewport};

/// Renders one cell from `(value, row, page_local_index)`.
///
/// `value` is `None` when the row has no field named by the column id.
/// Renderers must be pure: the engine may call them several times per frame.
pub type CellRenderer = Arc<dyn Fn(Option<&Value>, &Row, usize) -> Cell + Send + Sync>;

/// Visibility tag of a column at narrower viewport classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Responsive {
    /// Visible at every viewport class.
    #[default]
    Always,
    /// Accepted by the schema but not acted on by any visibility rule yet.
    Tablet,
    /// Hidden when the viewport is tablet or narrower.
    Desktop,
}

/// One column of a grid schema.
#[derive(Clone)]
pub struct Column {
    id: Ustr,
    label: String,
    sortable: bool,
    render: Option<CellRenderer>,
    responsive: Responsive,
}

impl Column {
    /// Creates an unsortable, always visible column that shows the raw value.
    pub fn new(id: impl AsRef<str>, label: impl Into<String>) -> Self {
        Self {
            id: Ustr::from(id.as_ref()),
            label: label.into(),
            sortable: false,
            render: None,
            responsive: Responsive::Always,
        }
    }

    /// Marks the column as sortable by header click.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sets the visibility tag.
    pub fn responsive(mut self, responsive: Responsive) -> Self {
        self.responsive = responsive;
        self
    }

    /// Sets the cell renderer.
    pub fn render(
        mut self,
        render: impl Fn(Option<&Value>, &Row, usize) -> Cell + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Field key looked up in each row.
    pub fn id(&self) -> Ustr {
        self.id
    }

    /// Header text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether a header click may order the rows by this column.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn responsive_tag(&self) -> Responsive {
        self.responsive
    }

    /// Returns whether the column is shown in table mode at `viewport`.
    ///
    /// Only `Desktop` columns are ever suppressed; `Tablet` is inert.
    pub fn is_visible_at(&self, viewport: Viewport) -> bool {
        !(self.responsive == Responsive::Desktop && viewport.is_tablet_or_narrower())
    }

    /// Produces the cell for `row` at `index` on the current page.
    ///
    /// A panicking renderer is not caught here.
    pub fn cell(&self, row: &Row, index: usize) -> Cell {
        let value = row.get(self.id.as_str());
        match &self.render {
            Some(render) => render(value, row, index),
            None => Cell::from_raw(value),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .field("responsive", &self.responsive)
            .finish()
    }
}
