use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::parse::Record;

/// Occurrences of each distinct field value, ordered by value.
pub type Counts = BTreeMap<String, usize>;

/// Summary statistics over a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    #[serde(rename = "total_lines_parsed")]
    total: usize,
    unique_ips: usize,
    status_code_counts: Counts,
    url_paths_counts: Counts,
    http_methods_counts: Counts,
}

impl Aggregate {
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn unique_ips(&self) -> usize {
        self.unique_ips
    }

    #[inline]
    pub fn status_code_counts(&self) -> &Counts {
        &self.status_code_counts
    }

    #[inline]
    pub fn url_paths_counts(&self) -> &Counts {
        &self.url_paths_counts
    }

    #[inline]
    pub fn http_methods_counts(&self) -> &Counts {
        &self.http_methods_counts
    }
}

/// Tallies records in a single pass.
pub fn aggregate<'a, I>(records: I) -> Aggregate
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut total = 0;
    let mut ips = HashSet::new();
    let mut statuses = BTreeMap::new();
    let mut urls = BTreeMap::new();
    let mut methods = BTreeMap::new();

    for record in records {
        total += 1;
        ips.insert(record.ip());
        *statuses.entry(record.status()).or_insert(0) += 1;
        *urls.entry(record.url()).or_insert(0) += 1;
        *methods.entry(record.http_method()).or_insert(0) += 1;
    }

    Aggregate {
        total,
        unique_ips: ips.len(),
        status_code_counts: to_owned_counts(statuses),
        url_paths_counts: to_owned_counts(urls),
        http_methods_counts: to_owned_counts(methods),
    }
}

fn to_owned_counts(counts: BTreeMap<&str, usize>) -> Counts {
    counts
        .into_iter()
        .map(|(value, count)| (value.to_owned(), count))
        .collect()
}
