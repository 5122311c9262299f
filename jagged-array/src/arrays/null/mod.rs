use std::any::Any;
use std::ops::Range;
use std::sync::Arc;

use jagged_dtype::DType;
use jagged_error::JaggedResult;
use jagged_scalar::Scalar;

use crate::compute::TakeRangesFn;
use crate::validity::Validity;
use crate::{Array, ArrayRef, EncodingId, IntoArray};

static NULL_DTYPE: DType = DType::Null;

/// An array of `len` nulls of type [`DType::Null`].
#[derive(Clone, Debug)]
pub struct NullArray {
    len: usize,
}

impl NullArray {
    pub const ID: EncodingId = EncodingId::new_ref("jagged.null");

    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Array for NullArray {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_array(&self) -> ArrayRef {
        self.clone().into_array()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn dtype(&self) -> &DType {
        &NULL_DTYPE
    }

    fn encoding(&self) -> EncodingId {
        Self::ID
    }

    fn validity(&self) -> Validity {
        Validity::AllInvalid
    }

    fn valid_scalar_at(&self, _index: usize) -> JaggedResult<Scalar> {
        Ok(Scalar::null(DType::Null))
    }

    fn take_ranges_fn(&self) -> Option<&dyn TakeRangesFn> {
        Some(self)
    }
}

impl TakeRangesFn for NullArray {
    fn take_ranges(&self, ranges: &[Range<usize>]) -> JaggedResult<ArrayRef> {
        Ok(NullArray::new(ranges.iter().map(|r| r.len()).sum()).into_array())
    }
}

impl IntoArray for NullArray {
    fn into_array(self) -> ArrayRef {
        Arc::new(self)
    }
}
