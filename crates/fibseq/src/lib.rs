//! fibseq library — bootstrap logic for the sequence server.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
