//! egui front-end of Neighbor Nexus.
//!
//! The application state lives in [`state::State`]; [`NexusApp`] paints it
//! every frame and feeds interactions back into it.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod pages;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::NexusApp;
