// src/core.rs
pub mod analysis;
pub mod scanner;
