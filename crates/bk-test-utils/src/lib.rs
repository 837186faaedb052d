//! Shared test utilities for the buildkit workspace.
//!
//! This crate is a dev-dependency only. It provides [`TestProject`], a
//! temporary project tree paired with an isolated user-level state
//! directory, so no test ever reads or writes the real `~/.buildkit`.

pub mod project;

pub use project::{TestProject, target_toml};
