//! CLI library components for statline.

pub mod logging;
pub mod pipeline;
pub mod prompt;
pub mod types;
