use std::any::Any;
use std::ops::Range;
use std::sync::Arc;

use jagged_buffer::{Buffer, BufferMut};
use jagged_dtype::{DType, Nullability};
use jagged_error::{JaggedExpect, JaggedResult, jagged_bail, jagged_err};
use jagged_scalar::Scalar;
use num_traits::AsPrimitive;

use crate::compute::TakeRangesFn;
use crate::validity::Validity;
use crate::{Array, ArrayRef, EncodingId, IntoArray};

/// Variable-length utf8 strings: `N + 1` byte offsets over one contiguous byte buffer.
#[derive(Clone, Debug)]
pub struct VarBinArray {
    dtype: DType,
    offsets: Buffer<u64>,
    bytes: Buffer<u8>,
    validity: Validity,
}

impl VarBinArray {
    pub const ID: EncodingId = EncodingId::new_ref("jagged.varbin");

    pub fn try_new(
        offsets: Buffer<u64>,
        bytes: Buffer<u8>,
        validity: Validity,
    ) -> JaggedResult<Self> {
        let Some(&last) = offsets.as_slice().last() else {
            jagged_bail!("Offsets must have at least one element, [0] for an empty array");
        };
        let end: usize = last.as_();
        if end > bytes.len() {
            jagged_bail!(
                "Last offset {} is beyond the {} bytes of the array",
                last,
                bytes.len()
            );
        }
        validity.check_len(offsets.len() - 1)?;
        std::str::from_utf8(&bytes[offsets[0].as_()..end])
            .map_err(|e| jagged_err!("VarBinArray bytes are not valid utf8: {}", e))?;

        Ok(Self {
            dtype: DType::Utf8(validity.nullability()),
            offsets,
            bytes,
            validity,
        })
    }

    pub fn from_iter<S: AsRef<str>, I: IntoIterator<Item = S>>(
        iter: I,
        nullability: Nullability,
    ) -> Self {
        Self::from_option_iter(iter.into_iter().map(Some), nullability)
    }

    pub fn from_option_iter<S: AsRef<str>, I: IntoIterator<Item = Option<S>>>(
        iter: I,
        nullability: Nullability,
    ) -> Self {
        let iter = iter.into_iter();
        let mut offsets = BufferMut::with_capacity(iter.size_hint().0 + 1);
        offsets.push(0u64);
        let mut bytes = BufferMut::<u8>::empty();
        let mut validity = Vec::with_capacity(iter.size_hint().0);
        for value in iter {
            if let Some(s) = &value {
                bytes.extend_from_slice(s.as_ref().as_bytes());
            }
            validity.push(value.is_some());
            offsets.push(bytes.len() as u64);
        }

        let validity = match nullability {
            Nullability::NonNullable => {
                if validity.iter().any(|v| !v) {
                    jagged_error::jagged_panic!("Null string in non-nullable VarBinArray");
                }
                Validity::NonNullable
            }
            Nullability::Nullable => Validity::from_iter(validity).into_nullable(),
        };
        Self::try_new(offsets.freeze(), bytes.freeze(), validity)
            .jagged_expect("strings were built from valid utf8")
    }

    pub fn offsets(&self) -> &Buffer<u64> {
        &self.offsets
    }

    pub fn bytes(&self) -> &Buffer<u8> {
        &self.bytes
    }

    /// The byte range of row `index` within [`Self::bytes`].
    pub fn byte_range(&self, index: usize) -> Range<usize> {
        self.offsets[index].as_()..self.offsets[index + 1].as_()
    }

    /// The string at `index`, ignoring validity.
    pub fn str_at(&self, index: usize) -> JaggedResult<&str> {
        std::str::from_utf8(&self.bytes[self.byte_range(index)])
            .map_err(|e| jagged_err!("Invalid utf8 at row {}: {}", index, e))
    }
}

impl Array for VarBinArray {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_array(&self) -> ArrayRef {
        self.clone().into_array()
    }

    fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    fn dtype(&self) -> &DType {
        &self.dtype
    }

    fn encoding(&self) -> EncodingId {
        Self::ID
    }

    fn validity(&self) -> Validity {
        self.validity.clone()
    }

    fn valid_scalar_at(&self, index: usize) -> JaggedResult<Scalar> {
        Ok(Scalar::utf8(self.str_at(index)?, self.dtype.nullability()))
    }

    fn take_ranges_fn(&self) -> Option<&dyn TakeRangesFn> {
        Some(self)
    }
}

impl TakeRangesFn for VarBinArray {
    fn take_ranges(&self, ranges: &[Range<usize>]) -> JaggedResult<ArrayRef> {
        let rows: usize = ranges.iter().map(|r| r.len()).sum();
        let byte_count: usize = ranges
            .iter()
            .map(|r| AsPrimitive::<usize>::as_(self.offsets[r.end] - self.offsets[r.start]))
            .sum();

        let mut offsets = BufferMut::with_capacity(rows + 1);
        let mut bytes = BufferMut::with_capacity(byte_count);
        offsets.push(0u64);
        for range in ranges {
            let byte_start = self.offsets[range.start];
            let byte_end: usize = self.offsets[range.end].as_();
            let base = bytes.len() as u64;
            offsets.extend(
                self.offsets[range.start + 1..=range.end]
                    .iter()
                    .map(|o| o - byte_start + base),
            );
            bytes.extend_from_slice(&self.bytes[byte_start.as_()..byte_end]);
        }

        Ok(VarBinArray::try_new(
            offsets.freeze(),
            bytes.freeze(),
            self.validity.take_ranges(ranges),
        )?
        .into_array())
    }
}

impl IntoArray for VarBinArray {
    fn into_array(self) -> ArrayRef {
        Arc::new(self)
    }
}
