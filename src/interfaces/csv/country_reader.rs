use crate::domain::country::{Countries, Country};
use crate::error::{BillingError, Result};
use std::io::Read;

/// Reads a country list from a CSV source with a `code,name` header.
///
/// Whitespace around values is trimmed. Codes are kept as written, so the
/// list is expected to use upper-case ISO 3166-1 alpha-2 codes.
pub struct CountryReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CountryReader<R> {
    /// Creates a new `CountryReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes countries.
    pub fn countries(self) -> impl Iterator<Item = Result<Country>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BillingError::from))
    }

    /// Reads the whole source into a `Countries` reference set.
    ///
    /// Fails on the first malformed record.
    pub fn read_all(self) -> Result<Countries> {
        let countries = self.countries().collect::<Result<Vec<_>>>()?;
        Ok(Countries::new(countries))
    }
}
