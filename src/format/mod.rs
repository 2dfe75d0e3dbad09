mod formatter;
mod humanreadable;
mod json;

pub use formatter::*;
pub use humanreadable::HumanReadableFormatter;
pub use json::JsonFormatter;
