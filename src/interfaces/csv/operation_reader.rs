use crate::domain::operation::Operation;
use crate::error::{AtmError, Result};
use std::io::Read;

/// Reads operations from a CSV script.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<Operation>`.
/// It trims whitespace and accepts rows with a missing trailing `quantity`.
pub struct OperationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OperationReader<R> {
    /// Creates a new `OperationReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes operations.
    ///
    /// A malformed row yields an error for that row only; reading continues.
    pub fn operations(self) -> impl Iterator<Item = Result<Operation>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(AtmError::from))
    }
}
