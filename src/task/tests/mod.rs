//! Unit tests for the task resource.

mod envelope_tests;
