use jagged_dtype::{DType, NativePType, PType};
use jagged_error::{JaggedError, JaggedExpect, JaggedResult, jagged_err, jagged_panic};

use crate::{PValue, Scalar};

/// A typed view over a primitive [`Scalar`].
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveScalar<'a> {
    dtype: &'a DType,
    ptype: PType,
    pvalue: Option<PValue>,
}

impl<'a> PrimitiveScalar<'a> {
    #[inline]
    pub fn dtype(&self) -> &'a DType {
        self.dtype
    }

    #[inline]
    pub fn ptype(&self) -> PType {
        self.ptype
    }

    /// The value, or `None` if the scalar is null.
    #[inline]
    pub fn pvalue(&self) -> Option<PValue> {
        self.pvalue
    }

    /// The value as `T`, which must be the scalar's own native type.
    pub fn typed_value<T: NativePType>(&self) -> Option<T> {
        if self.ptype != T::PTYPE {
            jagged_panic!(
                "Attempting to read {} scalar as {}",
                self.ptype,
                T::PTYPE
            );
        }
        self.pvalue
            .map(|pv| pv.as_::<T>().jagged_expect("matching ptype"))
    }

    /// Reads an integer value as `i64`, saturating large unsigned values.
    pub fn as_i64_saturating(&self) -> Option<i64> {
        self.pvalue.and_then(|pv| pv.as_i64_saturating())
    }
}

impl<'a> TryFrom<&'a Scalar> for PrimitiveScalar<'a> {
    type Error = JaggedError;

    fn try_from(value: &'a Scalar) -> JaggedResult<Self> {
        let ptype = PType::try_from(value.dtype())?;
        let pvalue = value.value().as_pvalue();
        if value.is_valid() && pvalue.is_none() {
            return Err(jagged_err!("Expected primitive value for {}", value.dtype()));
        }
        Ok(Self {
            dtype: value.dtype(),
            ptype,
            pvalue,
        })
    }
}

impl Scalar {
    /// Views this scalar as a primitive, panicking if it is not one.
    pub fn as_primitive(&self) -> PrimitiveScalar<'_> {
        PrimitiveScalar::try_from(self).jagged_expect("Failed to convert scalar to primitive")
    }

    pub fn as_primitive_opt(&self) -> Option<PrimitiveScalar<'_>> {
        PrimitiveScalar::try_from(self).ok()
    }
}
