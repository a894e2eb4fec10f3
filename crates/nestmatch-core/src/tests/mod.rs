//! Unit tests for `nestmatch_core` types.
