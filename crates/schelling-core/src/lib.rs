//! Core types for the Schelling segregation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the cell vocabulary ([`Kind`], [`Satisfaction`]), the square
//! row-major [`Grid`] container with Moore-neighbourhood enumeration,
//! and the shared [`SimError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod kind;

pub use error::SimError;
pub use grid::{Grid, StateGrid, World};
pub use kind::{Kind, Satisfaction};
