// src/gui/components/mod.rs
pub mod results;
pub mod search_bar;
