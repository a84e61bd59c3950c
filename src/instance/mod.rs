//! Instance model.
//!
//! An [`Instance`] is the immutable input of a wave search: the ordered
//! list of [`Order`]s, the ordered list of [`Aisle`]s, and the unit
//! [`Bounds`]. Construction validates the data once so that every
//! downstream component can rely on it.
//!
//! # Key Components
//!
//! - **Raw types**: [`ItemId`], [`Order`], [`Aisle`], [`Bounds`]
//! - **Model**: [`Instance`] — validated container with a compiled,
//!   index-based view of demands and capacities

mod model;
mod types;

pub use model::Instance;
pub use types::{Aisle, Bounds, ItemId, Order};
