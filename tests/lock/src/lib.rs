//! Shared fixtures for the cross-crate acceptance tests.
