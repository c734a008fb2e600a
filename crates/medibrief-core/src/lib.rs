//! medibrief-core
//!
//! Pure domain types: the patient record collected by the intake form, image
//! attachments, report templates, and the block vocabulary shared by the
//! report parser and the renderers. No network or AWS dependency.

pub mod attachment;
pub mod error;
pub mod models;
