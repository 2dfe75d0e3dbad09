use std::fmt;

use serde::Serialize;

/// One access log line broken into its fields.
///
/// Every field keeps the exact source text; nothing is coerced to a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    ip: String,
    time: String,
    http_method: String,
    #[serde(rename = "URL")]
    url: String,
    status: String,
    response_size: String,
}

impl Record {
    pub(super) fn new(
        ip: &str,
        time: &str,
        http_method: &str,
        url: &str,
        status: &str,
        response_size: &str,
    ) -> Self {
        Self {
            ip: ip.into(),
            time: time.into(),
            http_method: http_method.into(),
            url: url.into(),
            status: status.into(),
            response_size: response_size.into(),
        }
    }

    #[inline]
    pub fn ip(&self) -> &str {
        &self.ip
    }

    #[inline]
    pub fn time(&self) -> &str {
        &self.time
    }

    #[inline]
    pub fn http_method(&self) -> &str {
        &self.http_method
    }

    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[inline]
    pub fn response_size(&self) -> &str {
        &self.response_size
    }

    /// Field name and value pairs in output order.
    pub fn fields(&self) -> [(Field, &str); 6] {
        [
            (Field::Ip, self.ip()),
            (Field::Time, self.time()),
            (Field::HttpMethod, self.http_method()),
            (Field::Url, self.url()),
            (Field::Status, self.status()),
            (Field::ResponseSize, self.response_size()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Ip,
    Time,
    HttpMethod,
    Url,
    Status,
    ResponseSize,
}

impl Field {
    /// External name of the field, as it appears in rendered records.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Ip => "ip",
            Field::Time => "time",
            Field::HttpMethod => "http_method",
            Field::Url => "URL",
            Field::Status => "status",
            Field::ResponseSize => "response_size",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
