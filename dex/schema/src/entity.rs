//! Row models for the tables that have a primary key.
//!
//! `Log` has none and therefore no model; it is written with plain statements.

pub mod block;
pub mod pair;
pub mod prelude;
pub mod swap;
pub mod token;
pub mod transaction;
