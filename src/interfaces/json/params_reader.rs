use crate::error::{IyzipayError, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads operation parameters from a JSON document.
///
/// Field names follow the gateway's camelCase spelling, e.g. `pricePaid`,
/// `basketItems`, `subMerchantKey`.
pub struct ParamsReader<R: Read> {
    source: R,
}

impl<R: Read> ParamsReader<R> {
    /// Creates a new `ParamsReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn read<T: DeserializeOwned>(self) -> Result<T> {
        serde_json::from_reader(BufReader::new(self.source)).map_err(IyzipayError::from)
    }
}

impl ParamsReader<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}
