//! Service layer providing business-oriented read and submit operations on
//! top of the entity models.
//! - Separates listing/filtering/validation logic from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod admin;
pub mod blog;
pub mod catalog;
pub mod contact;
pub mod errors;
pub mod reviews;
pub mod runtime;
pub mod search;
#[cfg(test)]
pub mod test_support;
