// Semiprime Record Domain Model

use num_bigint::BigUint;
use serde::Serialize;

use super::error::Result;
use super::field::FieldCursor;

/// One generator record: the semiprime followed by its two factors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemiprimeRecord {
    pub sprime: BigUint,
    pub factor1: BigUint,
    pub factor2: BigUint,
}

impl SemiprimeRecord {
    pub fn new(sprime: BigUint, factor1: BigUint, factor2: BigUint) -> Self {
        Self {
            sprime,
            factor1,
            factor2,
        }
    }

    /// Decode s-prime, factor1, factor2 in that order from the cursor
    pub fn decode(cursor: &mut FieldCursor<'_>) -> Result<Self> {
        let sprime = cursor.next_field()?;
        let factor1 = cursor.next_field()?;
        let factor2 = cursor.next_field()?;
        Ok(Self::new(sprime, factor1, factor2))
    }

    pub fn product(&self) -> BigUint {
        &self.factor1 * &self.factor2
    }

    /// True when factor1 * factor2 == sprime
    pub fn is_consistent(&self) -> bool {
        self.product() == self.sprime
    }

    /// Decimal string view (for JSON output)
    pub fn to_view(&self) -> SemiprimeView {
        SemiprimeView {
            sprime: self.sprime.to_string(),
            factor1: self.factor1.to_string(),
            factor2: self.factor2.to_string(),
        }
    }
}

impl std::fmt::Display for SemiprimeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} * {} = {}", self.factor1, self.factor2, self.sprime)
    }
}

/// Serializable form with values as decimal strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemiprimeView {
    pub sprime: String,
    pub factor1: String,
    pub factor2: String,
}
