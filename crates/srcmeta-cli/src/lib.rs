//! # srcmeta-cli — Driver Library
//!
//! Subcommand handlers for the `srcmeta` binary. The core library never
//! terminates the process; handlers bubble a
//! [`srcmeta_core::ControlDecision`] up to `main`, which maps `Halt` to a
//! non-zero exit.

pub mod normalize;
pub mod resolve;
