//! Diveharder CLI library.
//!
//! Rendering helpers for the `diveharder-cli` binary. All data access goes
//! through `diveharder_lib`; this crate only formats what it returns.

pub mod output;
