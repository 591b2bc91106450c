//! Shared test utilities used across the mstree crates.
//!
//! - [`tracing`] captures closed spans and emitted events so tests can assert
//!   instrumentation without scraping formatted log output.
//! - [`proptest_profile`] reads the environment overrides that tune how many
//!   cases the property suites run.

pub mod proptest_profile;
pub mod tracing;
