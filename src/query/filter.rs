use std::convert::TryFrom;
use std::fmt;

use tracing::info;

use crate::error::{Error, Result};
use crate::parse::Record;

/// Keeps records whose status equals `status` as text.
///
/// Numbers are compared through their decimal form, so `404u16` and `"404"`
/// select the same records.
pub fn filter_by_status<'a, I, S>(records: I, status: S) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
    S: fmt::Display,
{
    let status = status.to_string();
    let matched = records
        .into_iter()
        .filter(|record| record.status() == status)
        .collect::<Vec<_>>();
    info!(%status, matched = matched.len(), "filtered by status");
    matched
}

/// Keeps records whose HTTP method equals `method`, case-sensitive.
pub fn filter_by_method<'a, I>(records: I, method: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let matched = records
        .into_iter()
        .filter(|record| record.http_method() == method)
        .collect::<Vec<_>>();
    info!(method, matched = matched.len(), "filtered by method");
    matched
}

/// A predicate a query result is selected by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    Status(String),
    Method(String),
}

impl Criterion {
    /// Name of the record field the criterion tests.
    pub fn name(&self) -> &'static str {
        match self {
            Criterion::Status(_) => "status",
            Criterion::Method(_) => "method",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Criterion::Status(value) | Criterion::Method(value) => value.as_str(),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Criterion::Status(status) => write!(f, "status: {}", status),
            Criterion::Method(method) => write!(f, "method: {}", method),
        }
    }
}

pub fn select<'a, I>(records: I, criterion: &Criterion) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    match criterion {
        Criterion::Status(status) => filter_by_status(records, status),
        Criterion::Method(method) => filter_by_method(records, method),
    }
}

/// Returns the first `n` items, or all of them when `n` is `None` or larger
/// than the input.
pub fn limit<T>(items: &[T], n: Option<i64>) -> Result<&[T]> {
    match n {
        None => Ok(items),
        Some(n) if n < 0 => Err(Error::invalid_argument(&format!(
            "limit must be non-negative, got {}",
            n
        ))),
        Some(n) => {
            let n = usize::try_from(n).unwrap_or(usize::MAX);
            Ok(&items[..n.min(items.len())])
        }
    }
}
