//! Unit tests for the `nestmatch` engine.

mod config_tests;
mod events_tests;
mod inverse_tests;
mod pairing_tests;
mod window_tests;
