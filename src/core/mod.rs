//! Core data structures
//!
//! Users and documents as seen by access control.

pub mod models;
