//! Integration test harness.

mod extraction_test;
