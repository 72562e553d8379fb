//! Crate test suites.
//!
//! Module-local unit tests live next to the code; these suites cover
//! cross-module behavior (unit/) and invariants (property/).

mod property;
