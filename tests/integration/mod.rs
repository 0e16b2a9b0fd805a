//! Integration tests for kmrl-access
//!
//! These tests verify the interaction between configuration, data loading,
//! access decisions and the audit log.

pub mod access_control_tests;
pub mod audit_tests;
