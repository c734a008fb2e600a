//! medibrief-cli
//!
//! Config file handling and the commands behind the `medibrief` binary.

pub mod aws;
pub mod commands;
pub mod config;
