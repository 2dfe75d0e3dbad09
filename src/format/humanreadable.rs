use super::formatter::{Formatter, Value};
use crate::error::Result;
use crate::parse::{Record, Rejected};
use crate::query::{Aggregate, Counts};

pub struct HumanReadableFormatter {}

impl HumanReadableFormatter {
    pub fn new() -> Self {
        Self {}
    }

    fn format_aggregate(&self, aggregate: &Aggregate) -> Vec<u8> {
        let mut lines = vec![
            format!("total_lines_parsed: {}", aggregate.total()),
            format!("unique_ips: {}", aggregate.unique_ips()),
        ];
        self.push_counts(&mut lines, "status_code_counts", aggregate.status_code_counts());
        self.push_counts(&mut lines, "url_paths_counts", aggregate.url_paths_counts());
        self.push_counts(
            &mut lines,
            "http_methods_counts",
            aggregate.http_methods_counts(),
        );
        lines.join("\n").into_bytes()
    }

    fn push_counts(&self, lines: &mut Vec<String>, title: &str, counts: &Counts) {
        lines.push(format!("{}:", title));
        for (value, count) in counts {
            lines.push(format!("\t{}: {}", value, count));
        }
    }

    fn format_record(&self, record: &Record) -> Vec<u8> {
        record
            .fields()
            .iter()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect::<Vec<_>>()
            .join("\t")
            .into_bytes()
    }

    fn format_rejected(&self, rejected: &Rejected) -> Vec<u8> {
        format!(
            "{}: {}: {}",
            rejected.line_no(),
            rejected.error(),
            rejected.line()
        )
        .into_bytes()
    }
}

impl Default for HumanReadableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for HumanReadableFormatter {
    fn format(&self, value: &Value) -> Result<Vec<u8>> {
        Ok(match value {
            Value::Aggregate(aggregate) => self.format_aggregate(aggregate),
            Value::Record(record) => self.format_record(record),
            Value::Heading(criterion) => format!("rows with {}", criterion).into_bytes(),
            Value::Rejected(rejected) => self.format_rejected(rejected),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::RecordStore;
    use crate::query::{aggregate, Criterion};

    fn store() -> RecordStore {
        RecordStore::from_lines(vec![
            r#"127.0.0.1 - - [10/Oct/2023:13:55:36] "GET /index.html HTTP/1.1" 200 1024"#,
            r#"127.0.0.1 - - [10/Oct/2023:13:56:01] "POST /login HTTP/1.1" 404 512"#,
            r#"nonsense"#,
        ])
    }

    #[test]
    fn test_format_record() -> std::result::Result<(), String> {
        let store = store();
        let buf = HumanReadableFormatter::new().format(&Value::Record(&store.records()[1]))?;
        assert_eq!(
            String::from_utf8_lossy(&buf),
            "ip=127.0.0.1\ttime=10/Oct/2023:13:56:01\thttp_method=POST\tURL=/login\tstatus=404\tresponse_size=512"
        );
        Ok(())
    }

    #[test]
    fn test_format_aggregate() -> std::result::Result<(), String> {
        let store = store();
        let agg = aggregate(store.records());
        let buf = HumanReadableFormatter::new().format(&Value::Aggregate(&agg))?;
        assert_eq!(
            String::from_utf8_lossy(&buf),
            "total_lines_parsed: 2\n\
             unique_ips: 1\n\
             status_code_counts:\n\
             \t200: 1\n\
             \t404: 1\n\
             url_paths_counts:\n\
             \t/index.html: 1\n\
             \t/login: 1\n\
             http_methods_counts:\n\
             \tGET: 1\n\
             \tPOST: 1"
        );
        Ok(())
    }

    #[test]
    fn test_format_heading_and_rejected() -> std::result::Result<(), String> {
        let store = store();
        let fmt = HumanReadableFormatter::new();

        let heading = Criterion::Method("GET".into());
        assert_eq!(fmt.format(&Value::Heading(&heading))?, b"rows with method: GET");

        let buf = fmt.format(&Value::Rejected(&store.rejected()[0]))?;
        assert_eq!(
            String::from_utf8_lossy(&buf),
            "3: missing ip, time, http_method, URL, status, response_size: nonsense"
        );
        Ok(())
    }
}
