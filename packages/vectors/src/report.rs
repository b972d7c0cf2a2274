//! Transcript writer
//!
//! Layout: title, blank line, then each section header followed by its
//! records, sections separated by a blank line, and a closing line after a
//! final blank line. Nothing is reordered or buffered beyond the writer
//! handed in; [`Reporter::finish`] flushes it.

use std::io::Write;

use crate::Result;
use crate::record::OutcomeRecord;
use crate::variant::Section;

/// Opening line of every transcript
pub const TITLE: &str = "=== xxHash Reference Vectors ===";

/// Closing line of every transcript
pub const FOOTER: &str = "=== Test Complete ===";

/// Appends a transcript to `W`
pub struct Reporter<W: Write> {
    out: W,
    sections: usize,
    records: usize,
}

impl<W: Write> Reporter<W> {
    /// Start a transcript, writing the title
    ///
    /// # Errors
    ///
    /// Returns `VectorError::Io` if the writer fails.
    pub fn begin(mut out: W) -> Result<Self> {
        writeln!(out, "{TITLE}")?;
        writeln!(out)?;
        Ok(Self {
            out,
            sections: 0,
            records: 0,
        })
    }

    /// Write a section header
    ///
    /// # Errors
    ///
    /// Returns `VectorError::Io` if the writer fails.
    pub fn section(&mut self, section: Section) -> Result<()> {
        if self.sections > 0 {
            writeln!(self.out)?;
        }
        writeln!(self.out, "{}", section.header())?;
        self.sections += 1;
        Ok(())
    }

    /// Write one record line
    ///
    /// # Errors
    ///
    /// Returns `VectorError::Io` if the writer fails.
    pub fn record(&mut self, record: &OutcomeRecord) -> Result<()> {
        writeln!(self.out, "{record}")?;
        self.records += 1;
        Ok(())
    }

    /// Records written so far
    #[must_use]
    pub fn records(&self) -> usize {
        self.records
    }

    /// Sections written so far
    #[must_use]
    pub fn sections(&self) -> usize {
        self.sections
    }

    /// Write the closing line, flush, and hand the writer back
    ///
    /// # Errors
    ///
    /// Returns `VectorError::Io` if the writer fails.
    pub fn finish(mut self) -> Result<W> {
        writeln!(self.out)?;
        writeln!(self.out, "{FOOTER}")?;
        self.out.flush()?;
        Ok(self.out)
    }
}
