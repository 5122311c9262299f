use jagged_dtype::DType;
use jagged_error::{JaggedError, JaggedExpect, JaggedResult, jagged_bail};

use crate::Scalar;

#[derive(Debug, Clone, Copy)]
pub struct BoolScalar<'a> {
    dtype: &'a DType,
    value: Option<bool>,
}

impl<'a> BoolScalar<'a> {
    #[inline]
    pub fn dtype(&self) -> &'a DType {
        self.dtype
    }

    pub fn value(&self) -> Option<bool> {
        self.value
    }
}

impl<'a> TryFrom<&'a Scalar> for BoolScalar<'a> {
    type Error = JaggedError;

    fn try_from(value: &'a Scalar) -> JaggedResult<Self> {
        if !value.dtype().is_boolean() {
            jagged_bail!("Expected bool scalar, found {}", value.dtype());
        }
        Ok(Self {
            dtype: value.dtype(),
            value: value.value().as_bool(),
        })
    }
}

impl Scalar {
    pub fn as_bool(&self) -> BoolScalar<'_> {
        BoolScalar::try_from(self).jagged_expect("Failed to convert scalar to bool")
    }
}
