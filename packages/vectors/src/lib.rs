//! Golden-vector generator for the xxHash family
//!
//! Drives a [`HashFamily`] implementation over a fixed corpus, a fixed seed
//! set and every digest variant (XXH32, XXH64, XXH3 64/128, seeded and
//! secret-keyed), and renders each digest as a fixed-width hex record. The
//! transcript is a pure function of the corpus, the seeds and the library,
//! so it can be diffed line for line against any other implementation.
//!
//! ```no_run
//! use xxh_vectors::{Dispatcher, TwoxHash, generate};
//!
//! let dispatcher = Dispatcher::new(TwoxHash);
//! let summary = generate(&dispatcher, std::io::stdout().lock())?;
//! assert_eq!(summary.records, 200);
//! # Ok::<(), xxh_vectors::VectorError>(())
//! ```

#![forbid(unsafe_code)]

pub mod conformance;
pub mod corpus;
pub mod digest;
pub mod dispatch;
pub mod error;
pub mod family;
pub mod generator;
pub mod record;
pub mod report;
pub mod secret;
pub mod seed;
pub mod variant;

pub use error::{Result, VectorError};

pub use conformance::{
    ConformanceReport, ConformanceVector, Mismatch, collect_vectors, compare, export_json,
    parse_record,
};
pub use corpus::{CORPUS, Corpus, InputVector};
pub use digest::DigestValue;
pub use dispatch::Dispatcher;
pub use family::{HashFamily, TwoxHash};
pub use generator::{RunSummary, generate, render_transcript};
pub use record::OutcomeRecord;
pub use report::Reporter;
pub use secret::{SECRET_MINIMUM_LENGTH, SECRET_SIZE, SecretBuffer, validate_secret};
pub use seed::{SeedValue, SeedWidth, base_seed, representative_seed};
pub use variant::{Keying, Section, Variant};
