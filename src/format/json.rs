use serde::Serialize;
use serde_json::{self, ser::PrettyFormatter, Serializer};

use super::formatter::{Formatter, Value};
use crate::error::{Error, ErrorKind, Result};
use crate::query::Aggregate;

#[derive(Serialize)]
struct RejectedRepr<'a> {
    line: usize,
    error: String,
    text: &'a str,
}

/// Marks the start of a query result in the record stream.
#[derive(Serialize)]
struct HeadingRepr<'a> {
    query: &'static str,
    value: &'a str,
}

/// Summaries as indented JSON documents, records and skipped lines as one
/// compact JSON object per line.
pub struct JsonFormatter {}

impl JsonFormatter {
    pub fn new() -> Self {
        Self {}
    }

    fn format_aggregate(&self, aggregate: &Aggregate) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        aggregate
            .serialize(&mut ser)
            .map_err(encoding_error)?;
        Ok(buf)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, value: &Value) -> Result<Vec<u8>> {
        match value {
            Value::Aggregate(aggregate) => self.format_aggregate(aggregate),
            Value::Record(record) => serde_json::to_vec(record).map_err(encoding_error),
            Value::Heading(criterion) => serde_json::to_vec(&HeadingRepr {
                query: criterion.name(),
                value: criterion.value(),
            })
            .map_err(encoding_error),
            Value::Rejected(rejected) => serde_json::to_vec(&RejectedRepr {
                line: rejected.line_no(),
                error: rejected.error().to_string(),
                text: rejected.line(),
            })
            .map_err(encoding_error),
        }
    }
}

fn encoding_error(e: serde_json::Error) -> Error {
    Error::from(("JSON serialization failed", e)).kind_of(ErrorKind::Encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::RecordStore;
    use crate::query::{aggregate, Criterion};

    fn store() -> RecordStore {
        RecordStore::from_lines(vec![
            r#"127.0.0.1 - - [10/Oct/2023:13:55:36] "GET /index.html HTTP/1.1" 200 1024"#,
            r#"127.0.0.1 - - "GET /broken HTTP/1.1" 200 1"#,
            r#"127.0.0.1 - - [10/Oct/2023:13:56:01] "POST /login HTTP/1.1" 404 512"#,
        ])
    }

    #[test]
    fn test_format_record() -> std::result::Result<(), String> {
        let store = store();
        let buf = JsonFormatter::new().format(&Value::Record(&store.records()[0]))?;
        assert_eq!(
            String::from_utf8_lossy(&buf),
            r#"{"ip":"127.0.0.1","time":"10/Oct/2023:13:55:36","http_method":"GET","URL":"/index.html","status":"200","response_size":"1024"}"#
        );
        Ok(())
    }

    #[test]
    fn test_format_aggregate() -> std::result::Result<(), String> {
        let store = store();
        let agg = aggregate(store.records());
        let buf = JsonFormatter::new().format(&Value::Aggregate(&agg))?;
        assert_eq!(
            String::from_utf8_lossy(&buf),
            r#"{
    "total_lines_parsed": 2,
    "unique_ips": 1,
    "status_code_counts": {
        "200": 1,
        "404": 1
    },
    "url_paths_counts": {
        "/index.html": 1,
        "/login": 1
    },
    "http_methods_counts": {
        "GET": 1,
        "POST": 1
    }
}"#
        );
        Ok(())
    }

    #[test]
    fn test_format_heading() -> std::result::Result<(), String> {
        let fmt = JsonFormatter::new();

        let heading = Criterion::Status("200".into());
        let buf = fmt.format(&Value::Heading(&heading))?;
        assert_eq!(
            String::from_utf8_lossy(&buf),
            r#"{"query":"status","value":"200"}"#
        );

        let heading = Criterion::Method("GET".into());
        let buf = fmt.format(&Value::Heading(&heading))?;
        assert_eq!(
            String::from_utf8_lossy(&buf),
            r#"{"query":"method","value":"GET"}"#
        );
        Ok(())
    }

    #[test]
    fn test_format_rejected() -> std::result::Result<(), String> {
        let store = store();
        let buf = JsonFormatter::new().format(&Value::Rejected(&store.rejected()[0]))?;
        assert_eq!(
            String::from_utf8_lossy(&buf),
            r#"{"line":2,"error":"missing time","text":"127.0.0.1 - - \"GET /broken HTTP/1.1\" 200 1"}"#
        );
        Ok(())
    }
}
