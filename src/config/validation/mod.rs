//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `access_validators`: Validators for the access-control configuration sections
//! - `tests`: Test suite for all validators

mod access_validators;
mod trait_def;

pub use trait_def::Validate;
