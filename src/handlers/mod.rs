#![deny(clippy::all, clippy::pedantic)]

pub mod audit;
pub mod mappings;
pub mod settings;
