//! Formatter implementations

pub mod json;
pub mod line;
pub mod logfmt;

pub use json::{BatchMode, JsonFormatter};
pub use line::{LineFormatter, DEFAULT_FORMAT};
pub use logfmt::LogfmtFormatter;

pub use crate::core::{Formatter, SharedFormatter};
