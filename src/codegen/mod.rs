//! Source generation for JPA entities.
//!
//! [`jpa::synthesize`] assembles the class text; [`accessors`] and [`utils`]
//! hold the pieces it is built from.

pub mod accessors;
pub mod fs_utils;
pub mod jpa;
pub mod utils;

pub use accessors::{emit_accessors, AccessorPair};
pub use jpa::synthesize;
