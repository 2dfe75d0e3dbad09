mod extractor;
mod record;
mod store;

pub use extractor::{extract, ExtractError};
pub use record::{Field, Record};
pub use store::{Rejected, RecordStore};
