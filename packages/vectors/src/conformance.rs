//! Comparing transcripts against a reference run
//!
//! Only record lines take part in a comparison. Titles, section headers and
//! blank lines are skipped, so transcripts from implementations that title
//! their output differently still line up record for record.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::corpus::Corpus;
use crate::dispatch::Dispatcher;
use crate::family::HashFamily;
use crate::record::OutcomeRecord;
use crate::variant::{Keying, Section};

/// Structured form of one rendered record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceVector {
    /// Variant name as rendered, e.g. `XXH3_64_secret`
    pub variant: String,
    /// Input echo
    pub input: String,
    /// Seed in hex without prefix, absent for unseeded and secret variants
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub seed: Option<String>,
    /// Digest in hex without prefix
    pub digest: String,
}

impl From<&OutcomeRecord> for ConformanceVector {
    fn from(record: &OutcomeRecord) -> Self {
        let seed = match record.variant().keying() {
            Keying::Seed(seed) => Some(seed.to_string().trim_start_matches("0x").to_string()),
            Keying::None | Keying::Secret => None,
        };
        Self {
            variant: record.variant().name().to_string(),
            input: record.input().text().to_string(),
            seed,
            digest: record.digest().to_hex(),
        }
    }
}

/// Parse one record line; anything else yields `None`
#[must_use]
pub fn parse_record(line: &str) -> Option<ConformanceVector> {
    let (variant, rest) = line.split_once("('")?;
    if variant.is_empty()
        || !variant
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }

    let (args, digest) = rest.rsplit_once(") = 0x")?;
    if digest.is_empty() || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let (input, seed) = match args.strip_suffix('\'') {
        Some(input) => (input, None),
        None => {
            let (input, seed) = args.rsplit_once("', 0x")?;
            if seed.is_empty() || !seed.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            (input, Some(seed.to_string()))
        }
    };

    Some(ConformanceVector {
        variant: variant.to_string(),
        input: input.to_string(),
        seed,
        digest: digest.to_string(),
    })
}

/// A record position where two transcripts disagree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// 1-based record index
    pub index: usize,
    /// Record from the reference, `None` if the candidate has extra records
    pub expected: Option<ConformanceVector>,
    /// Record from the candidate, `None` if it stopped early
    pub actual: Option<ConformanceVector>,
}

/// Outcome of comparing two transcripts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConformanceReport {
    /// Records that agree exactly
    pub matched: usize,
    /// Every disagreement, in record order
    pub mismatches: Vec<Mismatch>,
}

impl ConformanceReport {
    /// True when no record disagrees
    #[must_use]
    pub fn is_conformant(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare the records of `actual` against `expected`, in order
#[must_use]
pub fn compare(expected: &str, actual: &str) -> ConformanceReport {
    let mut expected = expected.lines().filter_map(parse_record);
    let mut actual = actual.lines().filter_map(parse_record);
    let mut report = ConformanceReport::default();

    let mut index = 0;
    loop {
        index += 1;
        match (expected.next(), actual.next()) {
            (None, None) => break,
            (Some(e), Some(a)) if e == a => report.matched += 1,
            (expected, actual) => report.mismatches.push(Mismatch {
                index,
                expected,
                actual,
            }),
        }
    }
    report
}

/// Run every section for `family` and collect the structured records
///
/// # Errors
///
/// Propagates contract violations from the family.
pub fn collect_vectors<F: HashFamily>(family: F) -> Result<Vec<ConformanceVector>> {
    let dispatcher = Dispatcher::new(family);
    let mut vectors = Vec::new();
    for section in Section::ALL {
        for input in Corpus.iter() {
            for record in dispatcher.run_section(section, input)? {
                vectors.push(ConformanceVector::from(&record));
            }
        }
    }
    Ok(vectors)
}

/// Pretty JSON array of `vectors`
///
/// # Errors
///
/// Returns `VectorError::Json` if serialization fails.
pub fn export_json(vectors: &[ConformanceVector]) -> Result<String> {
    Ok(serde_json::to_string_pretty(vectors)?)
}
