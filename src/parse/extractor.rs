use std::{error, fmt};

use lazy_static::lazy_static;
use regex::Regex;

use super::record::{Field, Record};

// Each field has its own pattern and is matched against the whole line on
// its own, so a line can fail on any subset of fields.
//
// The address pattern wants at least three dotted numeric groups at the start
// of the line and takes the whole dotted run. It does not validate IPv4
// (`10.0.1` and `999.1.2.3.4` both pass) and never matches IPv6.
//
// The response size must be the last token of the line. Combined Log Format
// lines end with the quoted referer and user agent, so they all fail with a
// missing response_size.
lazy_static! {
    static ref IP_RE: Regex = Regex::new(r"^\d+\.\d+\.\d+(?:\.\d+)*").unwrap();
    static ref TIME_RE: Regex = Regex::new(r"\[(.+)\]").unwrap();
    static ref METHOD_RE: Regex = Regex::new(r#""(\w+)\s"#).unwrap();
    static ref URL_RE: Regex = Regex::new(r#""[A-Z]+ (\S+) HTTP/[0-9.]+""#).unwrap();
    static ref STATUS_RE: Regex = Regex::new(r"\s(\d{3})\s").unwrap();
    static ref RESPONSE_SIZE_RE: Regex = Regex::new(r"\d+$").unwrap();
}

/// Fields a line failed to provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractError {
    missing: Vec<Field>,
}

impl ExtractError {
    pub fn missing(&self) -> &[Field] {
        &self.missing
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names = self
            .missing
            .iter()
            .map(|field| field.name())
            .collect::<Vec<_>>();
        write!(f, "missing {}", names.join(", "))
    }
}

impl error::Error for ExtractError {}

/// Extracts a record from one access log line.
///
/// The line is trimmed first. Either all six fields match and a record comes
/// back, or the error lists every field that did not match.
pub fn extract(line: &str) -> Result<Record, ExtractError> {
    let line = line.trim();

    let ip = IP_RE.find(line).map(|m| m.as_str());
    let time = capture(&TIME_RE, line);
    let http_method = capture(&METHOD_RE, line);
    let url = capture(&URL_RE, line);
    let status = capture(&STATUS_RE, line);
    let response_size = RESPONSE_SIZE_RE.find(line).map(|m| m.as_str());

    match (ip, time, http_method, url, status, response_size) {
        (
            Some(ip),
            Some(time),
            Some(http_method),
            Some(url),
            Some(status),
            Some(response_size),
        ) => Ok(Record::new(
            ip,
            time,
            http_method,
            url,
            status,
            response_size,
        )),
        _ => {
            let missing = [
                (Field::Ip, ip.is_none()),
                (Field::Time, time.is_none()),
                (Field::HttpMethod, http_method.is_none()),
                (Field::Url, url.is_none()),
                (Field::Status, status.is_none()),
                (Field::ResponseSize, response_size.is_none()),
            ]
            .iter()
            .filter(|(_, missing)| *missing)
            .map(|(field, _)| *field)
            .collect();

            Err(ExtractError { missing })
        }
    }
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
