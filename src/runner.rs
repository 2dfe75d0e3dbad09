use tracing::info;

use crate::cliopt::CliOpt;
use crate::error::{Error, ErrorKind, Result};
use crate::format::{Formatter, Value};
use crate::output::Writer;
use crate::parse::RecordStore;
use crate::query::{aggregate, limit, select, Criterion};

// Reader -> Extractor -> RecordStore -> (Aggregator | Filter -> Limit) -> Formatter -> Writer
//
// The store is built from the whole input before anything is emitted. The
// summary (or the raw rows), the status query and the method query all read
// the same store independently.

type LineIter = Box<dyn std::iter::Iterator<Item = Result<Vec<u8>>>>;

/// What to compute from the parsed input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub status: Option<String>,
    pub method: Option<String>,
    pub limit: Option<i64>,
    pub summary: bool,
    pub raw: bool,
    pub show_skipped: bool,
}

impl QueryOptions {
    fn criteria(&self) -> Vec<Criterion> {
        let mut criteria = Vec::new();
        if let Some(status) = &self.status {
            criteria.push(Criterion::Status(status.clone()));
        }
        if let Some(method) = &self.method {
            criteria.push(Criterion::Method(method.clone()));
        }
        criteria
    }
}

impl From<&CliOpt> for QueryOptions {
    fn from(opt: &CliOpt) -> Self {
        Self {
            status: opt.status.map(|s| s.to_string()),
            method: opt.method.clone(),
            limit: opt.limit,
            summary: opt.summary,
            raw: opt.raw,
            show_skipped: opt.show_skipped,
        }
    }
}

pub struct Runner {
    lines: LineIter,
    consumer: Consumer,
    options: QueryOptions,
}

impl Runner {
    pub fn new(
        lines: LineIter,
        formatter: Box<dyn Formatter>,
        writer: Box<dyn Writer>,
        options: QueryOptions,
    ) -> Self {
        Self {
            lines,
            consumer: Consumer::new(writer, formatter),
            options,
        }
    }

    /// Values written before a failing step stay written; the error of that
    /// step is returned once the output is flushed.
    pub fn run(self) -> Result<()> {
        let Self {
            lines,
            mut consumer,
            options,
        } = self;

        let store = RecordStore::from_reader(lines)?;
        let result = Self::emit(&store, &options, &mut consumer);
        consumer.flush()?;
        result
    }

    fn emit(store: &RecordStore, options: &QueryOptions, consumer: &mut Consumer) -> Result<()> {
        if options.summary {
            consumer.write(&Value::Aggregate(&aggregate(store.records())))?;
        } else if options.raw {
            for record in store.records() {
                consumer.write(&Value::Record(record))?;
            }
        }

        for criterion in options.criteria() {
            let matched = select(store.records(), &criterion);
            let rows = limit(&matched, options.limit)?;
            info!(%criterion, rows = rows.len(), "query result");

            consumer.write(&Value::Heading(&criterion))?;
            for record in rows {
                consumer.write(&Value::Record(*record))?;
            }
        }

        if options.show_skipped {
            for rejected in store.rejected() {
                consumer.write(&Value::Rejected(rejected))?;
            }
        }

        Ok(())
    }
}

struct Consumer {
    writer: Box<dyn Writer>,
    formatter: Box<dyn Formatter>,
}

impl Consumer {
    fn new(writer: Box<dyn Writer>, formatter: Box<dyn Formatter>) -> Self {
        Self { writer, formatter }
    }

    fn write(&mut self, value: &Value) -> Result<()> {
        let buf = self.formatter.format(value)?;
        if buf.is_empty() {
            return Ok(());
        }

        self.writer
            .write(&buf)
            .map_err(|e| Error::from(("writer failed", e)).kind_of(ErrorKind::Io))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::from(("writer failed", e)).kind_of(ErrorKind::Io))
    }
}
