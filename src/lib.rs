// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod core;
pub mod csv;
pub mod error;
pub mod extract;
pub mod file;
pub mod index;
pub mod net;
pub mod params;
pub mod progress;
pub mod record;
pub mod runner;
