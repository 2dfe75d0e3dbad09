use std::str::FromStr;

use crate::error::Result;
use crate::parse::{Record, Rejected};
use crate::query::{Aggregate, Criterion};

/// Everything the runner hands over for rendering.
pub enum Value<'a> {
    Aggregate(&'a Aggregate),
    Record(&'a Record),
    /// Announces the query result that follows.
    Heading(&'a Criterion),
    Rejected(&'a Rejected),
}

pub trait Formatter {
    /// An empty buffer is not written.
    fn format(&self, value: &Value) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Human,
}

impl OutputFormat {
    pub fn formatter(&self) -> Box<dyn Formatter> {
        match self {
            OutputFormat::Json => Box::new(super::JsonFormatter::new()),
            OutputFormat::Human => Box::new(super::HumanReadableFormatter::new()),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" | "j" => Ok(OutputFormat::Json),
            "human" | "h" => Ok(OutputFormat::Human),
            _ => Err(format!("unknown output format '{}'", s)),
        }
    }
}
