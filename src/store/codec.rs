//! Line codec
//!
//! Encoding and decoding of single backing-file lines.

use crate::error::{Result, StockError};
use crate::record::Record;

/// Header line, always written verbatim and never validated on load
pub const HEADER: &str = "Country,Code,Product,Cost,Quantity";

/// Field separator
pub const DELIMITER: char = ',';

/// Fields per record line
pub const FIELD_COUNT: usize = 5;

/// Encode a record as one line (without the trailing newline)
pub fn encode_record(record: &Record) -> String {
    format!(
        "{country}{d}{code}{d}{product}{d}{cost}{d}{quantity}",
        country = record.country,
        code = record.code,
        product = record.product,
        cost = record.cost,
        quantity = record.quantity,
        d = DELIMITER,
    )
}

/// Decode one data line
///
/// `line_no` is the 1-based position in the file and only feeds error
/// messages. A trailing line ending is ignored; text fields keep their
/// whitespace so they load back exactly as saved.
pub fn decode_record(line: &str, line_no: usize) -> Result<Record> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(DELIMITER).collect();

    if fields.len() != FIELD_COUNT {
        return Err(StockError::MalformedRecord {
            line: line_no,
            reason: format!(
                "expected {} fields, got {}",
                FIELD_COUNT,
                fields.len()
            ),
        });
    }

    let cost = parse_count(fields[3], "cost", line_no)?;
    let quantity = parse_count(fields[4], "quantity", line_no)?;

    Ok(Record::new(fields[0], fields[1], fields[2], cost, quantity))
}

/// Parse a non-negative whole number field
fn parse_count(field: &str, name: &str, line_no: usize) -> Result<u64> {
    let trimmed = field.trim();
    trimmed.parse::<u64>().map_err(|_| {
        let reason = match trimmed.strip_prefix('-') {
            Some(rest) if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) => {
                format!("{} must not be negative (got {})", name, trimmed)
            }
            _ => format!("{} '{}' is not a whole number", name, trimmed),
        };
        StockError::MalformedRecord {
            line: line_no,
            reason,
        }
    })
}
