// src/application/ports/mod.rs
pub mod error_log;
pub mod security;
pub mod time;
