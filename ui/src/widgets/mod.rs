pub mod cell;
pub mod data_table;
mod footer;
mod navbar;
mod toasts;
mod top_bar;

pub use data_table::data_table;
pub use footer::footer;
pub use navbar::navbar;
pub use toasts::toasts;
pub use top_bar::{TopBarAction, top_bar};
