//! Generic, schema-driven data grid.
//!
//! A caller describes its records with a list of [`Column`]s and hands the
//! rows to a [`GridEngine`] every frame. The engine sorts by one column,
//! slices out the current page and decides between the table layout and a
//! card layout for narrow viewports. Nothing in here depends on a GUI crate.

mod cell;
mod column;
mod compare;
mod engine;
mod pagination;
mod sort;
mod viewport;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub use cell::{Card, Cell, Tone};
pub use column::{CellRenderer, Column, Responsive};
pub use compare::{collate, compare_directed, compare_values, stable_sorted};
pub use engine::{
    CardRenderer, GridBody, GridEngine, GridEvent, GridLayout, GridOutput, GridView, HeaderCell,
};
pub use pagination::{
    DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, GridOptions, PagerModel, Pagination,
};
pub use sort::{SortDirection, SortState};
pub use viewport::{Breakpoints, Viewport};

/// One record, keyed by field name.
pub type Row = serde_json::Map<String, Value>;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("row must serialize to a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("failed to serialize row: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Converts any serializable record into a [`Row`].
pub fn to_row<T: Serialize>(record: &T) -> Result<Row, GridError> {
    match serde_json::to_value(record)? {
        Value::Object(row) => Ok(row),
        Value::Null => Err(GridError::NotAnObject("null")),
        Value::Bool(_) => Err(GridError::NotAnObject("a boolean")),
        Value::Number(_) => Err(GridError::NotAnObject("a number")),
        Value::String(_) => Err(GridError::NotAnObject("a string")),
        Value::Array(_) => Err(GridError::NotAnObject("an array")),
    }
}
