//! Skore - strategy performance dashboard for the terminal
//!
//! This library module exports the domain types, the editing and advisory
//! engines, and the persistence layer for integration tests and potential
//! future library consumers.

// Allow dead code in the library - some internal modules are only used by main.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assistant;
pub mod backend;
pub mod config;
pub mod engine;
pub mod store;
pub mod types;
pub mod ui;

mod logging;
