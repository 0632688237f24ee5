//! `dedupe` - keep one record per key, choosing the lowest identifier
//!
//! Records pair a grouping key with a numeric identifier. [`deduplicate`]
//! reduces any sequence of them to one record per key, keeping the record
//! whose identifier is smallest.
//!
//! ```
//! use dedupe::{deduplicate, Record};
//!
//! let kept = deduplicate(vec![
//!     Record::new(5, "Alice"),
//!     Record::new(2, "Bob"),
//!     Record::new(3, "Alice"),
//! ]);
//! assert_eq!(kept, vec![Record::new(3, "Alice"), Record::new(2, "Bob")]);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod dedup;
pub mod demo;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod record;

pub use config::Config;
pub use dedup::{deduplicate, deduplicate_by, deduplicate_with_report, DedupReport, OutputOrder};
pub use error::{Error, Result};
pub use input::{parse_records, read_records, InputFormat};
pub use logging::init_logging;
pub use output::{render, OutputFormat};
pub use record::Record;
