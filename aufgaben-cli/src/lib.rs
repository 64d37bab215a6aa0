//! Library half of the `aufgaben` binary, shared with its integration tests.

pub mod transforms;
