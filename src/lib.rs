pub mod cli;
pub mod config;
pub mod errors;
pub mod git;
pub mod interrupt;
pub mod marker;
pub mod message;
pub mod orchestrator;
pub mod utils;
