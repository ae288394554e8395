// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod gui;
pub mod loader;
pub mod matcher;
pub mod progress;
pub mod record;
pub mod render;
pub mod view;

pub use error::LoadError;
pub use matcher::{search, MatchPass, ProgramGroup, Search};
pub use record::{Dataset, Record};
