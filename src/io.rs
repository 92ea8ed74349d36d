//! Readers for value matrices and candidate partitions.
//!
//! Value matrices are headerless delimited text, one row per bidder and one
//! column per item. Trailing delimiters are common in hand-edited files, so
//! empty fields are dropped before parsing. Candidate partitions are a JSON
//! array such as `[[[0, 1], [2]], [[0], [1], [2]]]`.

use crate::{
    error::{AuctionError, Result},
    types::{Partition, ValueMatrix},
};
use rust_decimal::Decimal;
use std::{fs::File, io::Read, path::Path, str::FromStr};

pub const DEFAULT_DELIMITER: u8 = b'\t';

/// Delimiters must fit in a single byte
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(AuctionError::InvalidDelimiter(delimiter))
}

/// Read a value matrix from a delimited file
pub fn read_value_matrix<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<ValueMatrix> {
    let file = File::open(path)?;
    value_matrix_from_reader(file, delimiter)
}

pub fn value_matrix_from_reader<R: Read>(reader: R, delimiter: u8) -> Result<ValueMatrix> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = record
            .iter()
            .filter(|field| !field.is_empty())
            .map(Decimal::from_str)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if !row.is_empty() {
            rows.push(row);
        }
    }

    ValueMatrix::from_rows(rows)
}

/// Read candidate partitions from a JSON file
pub fn read_partitions<P: AsRef<Path>>(path: P) -> Result<Vec<Partition>> {
    let file = File::open(path)?;
    partitions_from_reader(file)
}

pub fn partitions_from_reader<R: Read>(reader: R) -> Result<Vec<Partition>> {
    Ok(serde_json::from_reader(std::io::BufReader::new(reader))?)
}
