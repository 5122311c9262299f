//! Row validity and nullability behavior, shared by arrays and compute functions.

use std::ops::Range;

use arrow_buffer::{BooleanBuffer, BooleanBufferBuilder};
use jagged_dtype::Nullability;
use jagged_error::{JaggedResult, jagged_bail};

/// Validity information for an array.
#[derive(Clone, Debug)]
pub enum Validity {
    /// Items *can't* be null
    NonNullable,
    /// All items are valid
    AllValid,
    /// All items are null
    AllInvalid,
    /// Item validity is stored as a bitmap, `true` meaning valid.
    Array(BooleanBuffer),
}

impl Validity {
    pub fn nullability(&self) -> Nullability {
        match self {
            Self::NonNullable => Nullability::NonNullable,
            _ => Nullability::Nullable,
        }
    }

    /// The all-valid validity of the given nullability.
    pub fn from_nullability(nullability: Nullability) -> Self {
        match nullability {
            Nullability::NonNullable => Self::NonNullable,
            Nullability::Nullable => Self::AllValid,
        }
    }

    /// Returns whether the `index` item is valid.
    #[inline]
    pub fn is_valid(&self, index: usize) -> bool {
        match self {
            Self::NonNullable | Self::AllValid => true,
            Self::AllInvalid => false,
            Self::Array(buffer) => buffer.value(index),
        }
    }

    #[inline]
    pub fn is_null(&self, index: usize) -> bool {
        !self.is_valid(index)
    }

    /// The number of items this validity describes, if it stores a bitmap.
    pub fn maybe_len(&self) -> Option<usize> {
        match self {
            Self::Array(buffer) => Some(buffer.len()),
            _ => None,
        }
    }

    /// Checks that this validity can describe an array of `len` items.
    pub fn check_len(&self, len: usize) -> JaggedResult<()> {
        if let Some(validity_len) = self.maybe_len() {
            if validity_len != len {
                jagged_bail!(
                    "Validity has length {} but the array has {} rows",
                    validity_len,
                    len
                );
            }
        }
        Ok(())
    }

    pub fn null_count(&self, len: usize) -> usize {
        match self {
            Self::NonNullable | Self::AllValid => 0,
            Self::AllInvalid => len,
            Self::Array(buffer) => buffer.len() - buffer.count_set_bits(),
        }
    }

    /// Gathers the validity of the concatenation of `ranges`.
    pub fn take_ranges(&self, ranges: &[Range<usize>]) -> Self {
        match self {
            Self::Array(buffer) => {
                let total = ranges.iter().map(|r| r.len()).sum();
                let mut builder = BooleanBufferBuilder::new(total);
                for range in ranges {
                    builder.append_buffer(&buffer.slice(range.start, range.len()));
                }
                Self::Array(builder.finish())
            }
            other => other.clone(),
        }
    }

    /// Converts to a nullable validity, keeping the valid items.
    pub fn into_nullable(self) -> Self {
        match self {
            Self::NonNullable => Self::AllValid,
            other => other,
        }
    }
}

impl PartialEq for Validity {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NonNullable, Self::NonNullable) => true,
            (Self::AllValid, Self::AllValid) => true,
            (Self::AllInvalid, Self::AllInvalid) => true,
            (Self::Array(a), Self::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl From<BooleanBuffer> for Validity {
    fn from(value: BooleanBuffer) -> Self {
        if value.count_set_bits() == value.len() {
            Self::AllValid
        } else if value.count_set_bits() == 0 {
            Self::AllInvalid
        } else {
            Self::Array(value)
        }
    }
}

impl FromIterator<bool> for Validity {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Validity::from(BooleanBuffer::from_iter(iter))
    }
}
