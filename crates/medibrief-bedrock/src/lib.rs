//! medibrief-bedrock
//!
//! Report generation through the Bedrock Converse API: prompt assembly from
//! a patient record, image parts, token accounting.

pub mod attachments;
pub mod converse;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod tokens;
