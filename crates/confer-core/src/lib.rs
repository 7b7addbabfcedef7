//! Core types and configuration for the Confer layout engine.
//!
//! This crate provides the foundational types used across the other confer crates:
//! - The declarative layout input and the device context it is read with
//! - Computed region bounds and the region keys they are emitted under
//! - Tunable layout constants
//! - Error types

pub mod bounds;
pub mod constants;
pub mod device;
pub mod errors;
pub mod input;
pub mod region;

pub use bounds::*;
pub use constants::*;
pub use device::*;
pub use errors::*;
pub use input::*;
pub use region::*;
