use std::sync::Arc;

use jagged_dtype::DType;
use jagged_error::{JaggedError, JaggedExpect, JaggedResult, jagged_bail};

use crate::Scalar;

#[derive(Debug, Clone)]
pub struct Utf8Scalar<'a> {
    dtype: &'a DType,
    value: Option<Arc<str>>,
}

impl<'a> Utf8Scalar<'a> {
    #[inline]
    pub fn dtype(&self) -> &'a DType {
        self.dtype
    }

    pub fn value(&self) -> Option<Arc<str>> {
        self.value.clone()
    }
}

impl<'a> TryFrom<&'a Scalar> for Utf8Scalar<'a> {
    type Error = JaggedError;

    fn try_from(value: &'a Scalar) -> JaggedResult<Self> {
        if !matches!(value.dtype(), DType::Utf8(_)) {
            jagged_bail!("Expected utf8 scalar, found {}", value.dtype());
        }
        Ok(Self {
            dtype: value.dtype(),
            value: value.value().as_utf8().cloned(),
        })
    }
}

impl Scalar {
    pub fn as_utf8(&self) -> Utf8Scalar<'_> {
        Utf8Scalar::try_from(self).jagged_expect("Failed to convert scalar to utf8")
    }
}
