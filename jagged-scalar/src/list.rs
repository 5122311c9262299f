use std::sync::Arc;

use jagged_dtype::DType;
use jagged_error::{JaggedError, JaggedExpect, JaggedResult, jagged_bail};

use crate::{Scalar, ScalarValue};

/// A typed view over a list [`Scalar`].
#[derive(Debug, Clone)]
pub struct ListScalar<'a> {
    dtype: &'a DType,
    element_dtype: &'a Arc<DType>,
    elements: Option<Arc<[ScalarValue]>>,
}

impl<'a> ListScalar<'a> {
    #[inline]
    pub fn dtype(&self) -> &'a DType {
        self.dtype
    }

    #[inline]
    pub fn element_dtype(&self) -> &'a Arc<DType> {
        self.element_dtype
    }

    pub fn is_null(&self) -> bool {
        self.elements.is_none()
    }

    /// Number of elements, or `None` for a null list.
    pub fn len(&self) -> Option<usize> {
        self.elements.as_ref().map(|e| e.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len().is_none_or(|l| l == 0)
    }

    pub fn element(&self, idx: usize) -> Option<Scalar> {
        self.elements.as_ref().and_then(|e| {
            e.get(idx)
                .map(|v| Scalar::new(self.element_dtype.as_ref().clone(), v.clone()))
        })
    }

    pub fn elements(&self) -> Option<Vec<Scalar>> {
        self.elements.as_ref().map(|e| {
            e.iter()
                .map(|v| Scalar::new(self.element_dtype.as_ref().clone(), v.clone()))
                .collect()
        })
    }
}

impl<'a> TryFrom<&'a Scalar> for ListScalar<'a> {
    type Error = JaggedError;

    fn try_from(value: &'a Scalar) -> JaggedResult<Self> {
        let DType::List(element_dtype, ..) = value.dtype() else {
            jagged_bail!("Expected list scalar, found {}", value.dtype())
        };
        Ok(Self {
            dtype: value.dtype(),
            element_dtype,
            elements: value.value().as_list().cloned(),
        })
    }
}

impl Scalar {
    pub fn as_list(&self) -> ListScalar<'_> {
        ListScalar::try_from(self).jagged_expect("Failed to convert scalar to list")
    }
}
