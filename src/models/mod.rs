//! Domain models for the marina registry.
//!
//! # Core Concepts
//!
//! - [`Boat`]: One boat's stored attributes (name, length, location, balance).
//! - [`Location`]: Where the boat is kept. A closed set of four variants, each
//!   carrying the detail that only makes sense for that kind of storage.
//! - [`LocationKind`]: The bare discriminator, used for the file token and the
//!   monthly fee schedule.

mod boat;
mod location;

pub use boat::*;
pub use location::*;
