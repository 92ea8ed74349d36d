use crate::{error::Result, types::AllocationOutcome};
use std::io::Write;

/// Receives one record per evaluated partition
pub trait AllocationSink {
    fn record(&mut self, outcome: &AllocationOutcome) -> Result<()>;
}

/// Discards every record
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl AllocationSink for NoopSink {
    fn record(&mut self, _outcome: &AllocationOutcome) -> Result<()> {
        Ok(())
    }
}

impl AllocationSink for Vec<AllocationOutcome> {
    fn record(&mut self, outcome: &AllocationOutcome) -> Result<()> {
        self.push(outcome.clone());
        Ok(())
    }
}

/// Writes one line per outcome, e.g.
/// `For allocation [[0], [1]]: prices charged by mechanism [2, 1] and total 3`
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> AllocationSink for WriterSink<W> {
    fn record(&mut self, outcome: &AllocationOutcome) -> Result<()> {
        writeln!(self.writer, "{outcome}")?;
        Ok(())
    }
}
