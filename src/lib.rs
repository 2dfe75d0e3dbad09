pub mod cliopt;
pub mod error;
pub mod format;
pub mod input;
pub mod logging;
pub mod output;
pub mod parse;
pub mod query;
pub mod runner;
