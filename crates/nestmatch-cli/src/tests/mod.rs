//! Unit tests for the CLI runtime.

mod config_tests;
