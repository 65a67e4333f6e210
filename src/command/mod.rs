//! Command layer: payload types, parser and validation errors

pub mod error;
pub mod parser;
pub mod payload;

pub use error::{CommandError, ParseResult};
pub use parser::parse_line;
pub use payload::Command;
