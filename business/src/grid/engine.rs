//! The grid engine: sort, paginate and pick a layout for one column schema.
//!
//! The engine owns only transient UI state (sort and pagination). Rows stay
//! with the caller and are passed in on every frame; the engine never
//! mutates them. Given the same rows, viewport and state, every method here
//! returns the same output, so hosts can call them on every repaint.

use log::debug;
use ustr::Ustr;

use super::cell::{Card, Cell};
use super::column::Column;
use super::compare::{compare_directed, stable_sorted};
use super::pagination::{GridOptions, PagerModel, Pagination};
use super::sort::{SortDirection, SortState};
use super::{Row, Viewport};

/// Renders one card from `(row, page_local_index)` in card mode.
pub type CardRenderer = dyn Fn(&Row, usize) -> Card;

/// Interaction reported by a grid control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// A header was clicked.
    SortRequested(Ustr),
    /// Zero-based page to show.
    PageChanged(usize),
    /// New rows-per-page value.
    PageSizeChanged(usize),
}

/// The sorted, paged slice of rows for the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct GridView<'r> {
    /// Rows of the current page, in display order.
    pub rows: Vec<&'r Row>,
    /// Size of the whole collection, not just the page.
    pub total_rows: usize,
    pub sort: SortState,
    pub pagination: Pagination,
}

/// Which layout a frame uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLayout {
    Cards,
    Table,
}

/// Header entry for one visible column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: Ustr,
    pub label: String,
    pub sortable: bool,
    /// Whether the rows are currently ordered by this column.
    pub active: bool,
    /// Direction to display: the current one when active, ascending otherwise.
    pub direction: SortDirection,
}

/// What to paint above the pager.
#[derive(Debug, Clone, PartialEq)]
pub enum GridBody {
    /// One card per row of the page.
    Cards(Vec<Card>),
    /// Header cells and, per row of the page, one cell per visible column.
    Table {
        header: Vec<HeaderCell>,
        rows: Vec<Vec<Cell>>,
    },
}

/// A fully computed frame of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridOutput {
    pub body: GridBody,
    pub pager: PagerModel,
}

/// Sort and pagination state for one column schema.
///
/// Call [`GridEngine::render`] every frame with the current rows and feed
/// control interactions back through [`GridEngine::apply`].
pub struct GridEngine {
    columns: Vec<Column>,
    options: GridOptions,
    sort: SortState,
    pagination: Pagination,
}

impl GridEngine {
    /// Creates an engine ordered by the first column, ascending, on page 0.
    pub fn new(columns: Vec<Column>, options: GridOptions) -> Self {
        let sort = SortState::new(columns.first().map(Column::id));
        let pagination = Pagination::new(options.default_page_size);
        Self {
            columns,
            options,
            sort,
            pagination,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Handles a header click.
    ///
    /// Unknown and unsortable columns are ignored.
    pub fn request_sort(&mut self, column_id: &str) {
        let Some(column) = self
            .columns
            .iter()
            .find(|column| column.id().as_str() == column_id)
        else {
            debug!("Ignoring sort request for unknown column {column_id:?}");
            return;
        };
        if !column.is_sortable() {
            debug!("Ignoring sort request for unsortable column {column_id:?}");
            return;
        }

        self.sort.click(column.id());
        debug!("Sorting by {column_id} {}", self.sort.direction);
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    /// Changes the page size and resets to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    pub fn apply(&mut self, event: GridEvent) {
        match event {
            GridEvent::SortRequested(id) => self.request_sort(id.as_str()),
            GridEvent::PageChanged(page) => self.set_page(page),
            GridEvent::PageSizeChanged(page_size) => self.set_page_size(page_size),
        }
    }

    /// Sorts a copy of `rows` and slices out the current page.
    pub fn compute_view<'r>(&self, rows: &'r [Row]) -> GridView<'r> {
        let all: Vec<&Row> = rows.iter().collect();
        let sorted = match self.sort.order_by {
            Some(key) => {
                let direction = self.sort.direction;
                stable_sorted(&all, |a, b| {
                    compare_directed(a.get(key.as_str()), b.get(key.as_str()), direction)
                })
            }
            None => all,
        };

        let range = self.pagination.range(sorted.len());
        GridView {
            rows: sorted[range].to_vec(),
            total_rows: rows.len(),
            sort: self.sort,
            pagination: self.pagination,
        }
    }

    /// Columns shown in table mode at `viewport`, in schema order.
    pub fn visible_columns(&self, viewport: Viewport) -> impl Iterator<Item = &Column> {
        self.columns
            .iter()
            .filter(move |column| column.is_visible_at(viewport))
    }

    /// Card mode needs both a mobile viewport and a card renderer.
    pub fn layout(&self, viewport: Viewport, has_card_renderer: bool) -> GridLayout {
        if viewport.is_mobile() && has_card_renderer {
            GridLayout::Cards
        } else {
            GridLayout::Table
        }
    }

    pub fn header(&self, viewport: Viewport) -> Vec<HeaderCell> {
        self.visible_columns(viewport)
            .map(|column| {
                let active = self.sort.is_ordered_by(column.id());
                HeaderCell {
                    id: column.id(),
                    label: column.label().to_owned(),
                    sortable: column.is_sortable(),
                    active,
                    direction: if active {
                        self.sort.direction
                    } else {
                        SortDirection::Asc
                    },
                }
            })
            .collect()
    }

    pub fn pager(&self, total_rows: usize) -> PagerModel {
        PagerModel {
            page: self.pagination.page,
            page_size: self.pagination.page_size,
            total_rows,
            page_size_options: self.options.page_size_options.clone(),
        }
    }

    /// Computes the whole frame: the page, its layout and the pager model.
    pub fn render(
        &self,
        rows: &[Row],
        viewport: Viewport,
        card_renderer: Option<&CardRenderer>,
    ) -> GridOutput {
        let view = self.compute_view(rows);

        let body = match (self.layout(viewport, card_renderer.is_some()), card_renderer) {
            (GridLayout::Cards, Some(card)) => GridBody::Cards(
                view.rows
                    .iter()
                    .copied()
                    .enumerate()
                    .map(|(index, row)| card(row, index))
                    .collect(),
            ),
            _ => {
                let columns: Vec<&Column> = self.visible_columns(viewport).collect();
                GridBody::Table {
                    header: self.header(viewport),
                    rows: view
                        .rows
                        .iter()
                        .enumerate()
                        .map(|(index, row)| {
                            columns.iter().map(|column| column.cell(row, index)).collect()
                        })
                        .collect(),
                }
            }
        };

        GridOutput {
            body,
            pager: self.pager(view.total_rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Responsive;
    use serde_json::json;

    fn rows(values: &[serde_json::Value]) -> Vec<Row> {
        values
            .iter()
            .filter_map(|value| value.as_object().cloned())
            .collect()
    }

    fn names(view: &GridView<'_>) -> Vec<String> {
        view.rows
            .iter()
            .map(|row| row.get("n").and_then(|v| v.as_str()).unwrap_or_default().to_owned())
            .collect()
    }

    fn engine() -> GridEngine {
        GridEngine::new(
            vec![
                Column::new("n", "Name").sortable(),
                Column::new("v", "Value").sortable(),
                Column::new("note", "Note"),
            ],
            GridOptions::default(),
        )
    }

    #[test]
    fn test_initial_state() {
        let engine = engine();
        assert_eq!(engine.sort().order_by, Some(Ustr::from("n")));
        assert_eq!(engine.sort().direction, SortDirection::Asc);
        assert_eq!(engine.pagination(), Pagination { page: 0, page_size: 5 });
    }

    #[test]
    fn test_empty_schema_has_no_sort_key() {
        let engine = GridEngine::new(Vec::new(), GridOptions::default());
        assert_eq!(engine.sort().order_by, None);
        let data = rows(&[json!({ "n": "b" }), json!({ "n": "a" })]);
        assert_eq!(engine.compute_view(&data).rows.len(), 2);
    }

    #[test]
    fn test_unsortable_and_unknown_columns_are_ignored() {
        let mut engine = engine();
        engine.request_sort("note");
        engine.request_sort("missing");
        assert_eq!(engine.sort().order_by, Some(Ustr::from("n")));
        assert_eq!(engine.sort().direction, SortDirection::Asc);
    }

    #[test]
    fn test_compute_view_does_not_touch_input() {
        let engine = engine();
        let data = rows(&[json!({ "n": "b" }), json!({ "n": "a" })]);
        let before = data.clone();
        let view = engine.compute_view(&data);
        assert_eq!(names(&view), vec!["a", "b"]);
        assert_eq!(data, before);
    }

    #[test]
    fn test_compute_view_is_repeatable() {
        let engine = engine();
        let data = rows(&[json!({ "n": "b", "v": 1 }), json!({ "n": "a", "v": 1 })]);
        assert_eq!(engine.compute_view(&data), engine.compute_view(&data));
    }

    #[test]
    fn test_apply_events() {
        let mut engine = engine();
        engine.apply(GridEvent::PageChanged(2));
        assert_eq!(engine.pagination().page, 2);
        engine.apply(GridEvent::PageSizeChanged(10));
        assert_eq!(engine.pagination(), Pagination { page: 0, page_size: 10 });
        engine.apply(GridEvent::SortRequested(Ustr::from("v")));
        assert_eq!(engine.sort().order_by, Some(Ustr::from("v")));
    }

    #[test]
    fn test_layout_selection() {
        let engine = engine();
        assert_eq!(engine.layout(Viewport::Mobile, true), GridLayout::Cards);
        assert_eq!(engine.layout(Viewport::Mobile, false), GridLayout::Table);
        assert_eq!(engine.layout(Viewport::Tablet, true), GridLayout::Table);
        assert_eq!(engine.layout(Viewport::Desktop, true), GridLayout::Table);
    }

    #[test]
    fn test_header_marks_active_column() {
        let mut engine = engine();
        engine.request_sort("n");
        let header = engine.header(Viewport::Desktop);
        assert!(header[0].active);
        assert_eq!(header[0].direction, SortDirection::Desc);
        assert!(!header[1].active);
        assert_eq!(header[1].direction, SortDirection::Asc);
        assert!(!header[2].sortable);
    }

    #[test]
    fn test_render_cards_with_page_local_index() {
        let mut engine = GridEngine::new(
            vec![Column::new("n", "Name").sortable()],
            GridOptions {
                page_size_options: vec![2],
                default_page_size: 2,
            },
        );
        engine.set_page(1);
        let data = rows(&[
            json!({ "n": "a" }),
            json!({ "n": "b" }),
            json!({ "n": "c" }),
        ]);
        let card = |row: &Row, index: usize| {
            Card::new(format!(
                "#{} {}",
                index + 1,
                row.get("n").and_then(|v| v.as_str()).unwrap_or_default()
            ))
        };

        let output = engine.render(&data, Viewport::Mobile, Some(&card));
        assert_eq!(output.body, GridBody::Cards(vec![Card::new("#1 c")]));
        assert_eq!(output.pager.total_rows, 3);
    }

    #[test]
    fn test_render_table_hides_desktop_columns_below_desktop() {
        let engine = GridEngine::new(
            vec![
                Column::new("n", "Name").sortable(),
                Column::new("loc", "Location").responsive(Responsive::Desktop),
            ],
            GridOptions::default(),
        );
        let data = rows(&[json!({ "n": "a", "loc": "Austin" })]);

        let GridBody::Table { header, rows } = engine.render(&data, Viewport::Desktop, None).body
        else {
            panic!("desktop should render a table");
        };
        assert_eq!(header.len(), 2);
        assert_eq!(rows[0][1], Cell::Text("Austin".to_owned()));

        let GridBody::Table { header, rows } = engine.render(&data, Viewport::Mobile, None).body
        else {
            panic!("mobile without card renderer should render a table");
        };
        assert_eq!(header.len(), 1);
        assert_eq!(rows[0].len(), 1);
    }
}
