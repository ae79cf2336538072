//! Command Line Interface (CLI) layer for LSTPRO.
//!
//! This module defines argument parsing (`args`) and the orchestration logic
//! (`runner`) for single-scene processing. It wires user-provided options to
//! the underlying library functionality exposed via `lstpro::api`.
//!
//! If you are embedding LSTPRO into another application, prefer using the
//! high-level `lstpro::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
