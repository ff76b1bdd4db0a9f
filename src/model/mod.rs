//! Record types produced by the extraction engine
//!
//! This module defines the profile and project records and the stable
//! identifier scheme used as their primary key across runs.

mod identity;
mod record;

pub use identity::{stable_id, ID_HEX_DIGITS};
pub use record::{ProfileRecord, ProjectRecord};
