use structopt::StructOpt;

use crate::format::OutputFormat;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "alq",
    about = "Parse, filter and summarize web server access logs"
)]
pub struct CliOpt {
    /// Access log file to read, `-` for stdin
    pub log_location: String,

    /// Print only rows with this status code
    #[structopt(long = "status", short = "s")]
    pub status: Option<u16>,

    /// Print only rows with this HTTP method
    #[structopt(long = "method", short = "m")]
    pub method: Option<String>,

    /// Print at most this many rows per filter
    #[structopt(long = "limit", short = "l", allow_hyphen_values = true)]
    pub limit: Option<i64>,

    /// Print the aggregated summary
    #[structopt(long = "summary")]
    pub summary: bool,

    /// Print every parsed row
    #[structopt(long = "raw")]
    pub raw: bool,

    /// Print the lines that could not be parsed
    #[structopt(long = "show-skipped")]
    pub show_skipped: bool,

    /// Output format: json or human
    #[structopt(long = "format", short = "f", default_value = "json")]
    pub format: OutputFormat,

    /// Lines are terminated by NUL instead of newline, on input and output
    #[structopt(long = "null-data", short = "z")]
    pub null_data: bool,

    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,
}

impl CliOpt {
    pub fn delimiter(&self) -> u8 {
        if self.null_data {
            b'\0'
        } else {
            b'\n'
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cliopt_defaults() {
        let opt = CliOpt::from_iter(&["alq", "access.log"]);
        assert_eq!(opt.log_location, "access.log");
        assert_eq!(opt.status, None);
        assert_eq!(opt.method, None);
        assert_eq!(opt.limit, None);
        assert!(!opt.summary && !opt.raw && !opt.show_skipped && !opt.verbose);
        assert_eq!(opt.format, OutputFormat::Json);
        assert_eq!(opt.delimiter(), b'\n');
    }

    #[test]
    fn test_cliopt_null_data() {
        let opt = CliOpt::from_iter(&["alq", "access.log", "-z"]);
        assert!(opt.null_data);
        assert_eq!(opt.delimiter(), b'\0');
    }

    #[test]
    fn test_cliopt_full() {
        let opt = CliOpt::from_iter(&[
            "alq", "-", "-s", "404", "-m", "GET", "-l", "-3", "--summary", "-f", "human",
        ]);
        assert_eq!(opt.log_location, "-");
        assert_eq!(opt.status, Some(404));
        assert_eq!(opt.method.as_deref(), Some("GET"));
        assert_eq!(opt.limit, Some(-3));
        assert!(opt.summary);
        assert_eq!(opt.format, OutputFormat::Human);
    }

    #[test]
    fn test_cliopt_rejects_bad_values() {
        assert!(CliOpt::from_iter_safe(&["alq", "a.log", "--status", "abc"]).is_err());
        assert!(CliOpt::from_iter_safe(&["alq", "a.log", "--format", "xml"]).is_err());
        assert!(CliOpt::from_iter_safe(&["alq"]).is_err());
    }
}
