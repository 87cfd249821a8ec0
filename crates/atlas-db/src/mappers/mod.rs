//! Entity to model mappers
//!
//! This module provides conversions between domain entities (atlas-core) and
//! database models: `From<Model> for Entity` for rows coming out of queries.
//! Inserts bind the `New*` payload fields directly and read the created row
//! back with `RETURNING`, so there is no insert direction here.

mod image;
mod place;
mod report;
mod review;
mod user;

pub use report::report_entity;
