//! Boat registry for a small marina.
//!
//! Boats live in a [`registry::Registry`] that is loaded from and saved to a
//! flat CSV file by [`store::Store`]. Each line of the file is one
//! [`models::Boat`], read and written by the [`codec`].

pub mod codec;
pub mod config;
pub mod inventory;
pub mod models;
pub mod registry;
pub mod shell;
pub mod store;
