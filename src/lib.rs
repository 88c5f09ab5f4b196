//! Room layout client.
//!
//! Collects room dimensions and a budget, asks a layout service to furnish
//! the room, and turns the answer into a scaled floor plan and a budget
//! summary.

pub mod api;
pub mod appearance;
pub mod calculator;
pub mod config;
pub mod form;
pub mod models;
pub mod render;
pub mod report;
pub mod sample;
pub mod scene;
pub mod session;

pub use api::{ApiError, LayoutClient};
pub use appearance::{Appearance, Palette, Rgb};
pub use calculator::{BudgetStatus, BudgetSummary, reconcile};
pub use form::{Field, FormErrors, RoomForm};
pub use models::{CatalogItem, FurniturePlacement, LayoutResult, RoomSpec};
pub use scene::{PIXELS_PER_METER, PixelRect, Scene};
pub use session::{Design, Session, View};
