//! Unit tests for the task module.
//!
//! Tests are organised by concern: parsing and the transition matrix,
//! overdue derivation, bucket classification, transition guards, payload
//! normalisation, and service orchestration.

mod status_tests;
