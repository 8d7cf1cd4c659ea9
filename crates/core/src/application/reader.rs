// Semiprime Reader Use Case
// Run the generator once, then decode its captured output record by record

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::field::LENGTH_PREFIX_SIZE;
use crate::domain::{FieldCursor, SemiprimeRecord};
use crate::error::{AppError, Result};
use crate::port::{GenerationRequest, SemiprimeGenerator};

/// Smallest possible record: three zero-length fields
const MIN_RECORD_SIZE: usize = 3 * LENGTH_PREFIX_SIZE;

/// Reader options
#[derive(Debug, Clone, Default)]
pub struct ReaderOptions {
    /// Fail when factor1 * factor2 != sprime
    pub check_factors: bool,
}

/// Decode `count` consecutive records from a captured buffer
///
/// Every record is decoded before any is returned, so a malformed
/// buffer never yields partial results. Bytes after the last record
/// are ignored.
///
/// # Errors
/// - AppError::Decode if the buffer does not hold `count` full records
/// - AppError::FactorMismatch if `check_factors` is set and a record is inconsistent
pub fn decode_records(
    buf: &[u8],
    count: usize,
    check_factors: bool,
) -> Result<Vec<SemiprimeRecord>> {
    let mut cursor = FieldCursor::new(buf);
    // count is caller-supplied; the buffer bounds how many records can exist
    let mut records = Vec::with_capacity(count.min(buf.len() / MIN_RECORD_SIZE));

    for index in 0..count {
        let start = cursor.offset();
        let record = SemiprimeRecord::decode(&mut cursor)?;
        debug!(index, start, end = cursor.offset(), "Decoded record");

        if check_factors && !record.is_consistent() {
            return Err(AppError::FactorMismatch {
                index,
                product: record.product(),
                sprime: record.sprime,
                factor1: record.factor1,
                factor2: record.factor2,
            });
        }

        records.push(record);
    }

    if cursor.remaining() > 0 {
        warn!(
            trailing_bytes = cursor.remaining(),
            "Ignoring bytes after last record"
        );
    }

    Ok(records)
}

/// Semiprime Reader
pub struct SemiprimeReader {
    generator: Arc<dyn SemiprimeGenerator>,
    options: ReaderOptions,
}

impl SemiprimeReader {
    pub fn new(generator: Arc<dyn SemiprimeGenerator>, options: ReaderOptions) -> Self {
        Self { generator, options }
    }

    /// Invoke the generator once and decode `request.count` records
    pub async fn read(&self, request: &GenerationRequest) -> Result<Vec<SemiprimeRecord>> {
        let output = self.generator.generate(request).await?;

        info!(
            bytes = output.stdout.len(),
            duration_ms = output.duration_ms,
            "Generator output captured"
        );

        decode_records(&output.stdout, request.count, self.options.check_factors)
    }
}
