//! End-to-end vector run: every section, every corpus entry, in order

use std::io::Write;

use xxh_vectors_common::LoggingTransformer;

use crate::Result;
use crate::corpus::Corpus;
use crate::dispatch::Dispatcher;
use crate::family::HashFamily;
use crate::report::Reporter;
use crate::variant::Section;

/// Counts from a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Section headers written
    pub sections: usize,
    /// Record lines written
    pub records: usize,
}

/// Write the full transcript for `dispatcher` to `out`
///
/// Sections come in [`Section::ALL`] order; within a section the corpus is
/// walked in insertion order and each entry gets the section's two
/// variants. The writer is flushed before returning.
///
/// # Errors
///
/// Any write failure or contract violation aborts the run.
pub fn generate<F, W>(dispatcher: &Dispatcher<F>, out: W) -> Result<RunSummary>
where
    F: HashFamily,
    W: Write,
{
    let corpus = Corpus;
    LoggingTransformer::log_run_start(corpus.len(), Section::ALL.len());

    let mut reporter = Reporter::begin(out)?;
    for section in Section::ALL {
        reporter.section(section)?;
        let before = reporter.records();
        for input in corpus.iter() {
            for record in dispatcher.run_section(section, input)? {
                reporter.record(&record)?;
            }
        }
        LoggingTransformer::log_section(section.header(), reporter.records() - before);
    }

    let summary = RunSummary {
        sections: reporter.sections(),
        records: reporter.records(),
    };
    reporter.finish()?;
    LoggingTransformer::log_run_complete(summary.records);
    Ok(summary)
}

/// Render the full transcript for `family` into a string
///
/// # Errors
///
/// Propagates contract violations from the family, and returns
/// `VectorError::Utf8` if the rendered bytes are not valid UTF-8.
pub fn render_transcript<F: HashFamily>(family: F) -> Result<String> {
    let dispatcher = Dispatcher::new(family);
    let mut buffer = Vec::new();
    generate(&dispatcher, &mut buffer)?;
    transcript_text(buffer)
}

/// Decode a rendered transcript, refusing to paper over invalid bytes
fn transcript_text(buffer: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(buffer)?)
}
