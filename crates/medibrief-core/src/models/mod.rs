pub mod block;
pub mod patient;
pub mod report;
pub mod template;
pub mod usage;
