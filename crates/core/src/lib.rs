//! Domain logic for the forms backend.
//!
//! Everything in this crate is pure: no database access, no HTTP. The
//! persistence layer (`forms-db`) and the request handlers (`forms-api`)
//! both depend on it so that the rules live in exactly one place.

pub mod error;
pub mod question;
pub mod search;
pub mod types;
pub mod validation;
