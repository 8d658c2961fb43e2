// EcoFinds - listing core
//
// This crate provides the create/edit listing flow for the EcoFinds
// second-hand marketplace, including AI-written descriptions via Gemini.
// Architecture follows domain-driven design: collaborators live behind
// kernel traits and are injected through ServerDeps.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
