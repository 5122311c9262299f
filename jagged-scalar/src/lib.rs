//! Single values of a [`DType`], used for row-at-a-time access and constant arguments.

use std::sync::Arc;

use jagged_dtype::{DType, NativePType, Nullability};
use jagged_error::{JaggedExpect, JaggedResult, jagged_bail};

mod bool;
mod display;
mod list;
mod primitive;
mod pvalue;
mod utf8;
mod value;

pub use bool::*;
pub use list::*;
pub use primitive::*;
pub use pvalue::*;
pub use utf8::*;
pub use value::*;

/// A value together with its logical type.
#[derive(Debug, Clone)]
pub struct Scalar {
    dtype: DType,
    value: ScalarValue,
}

impl Scalar {
    /// Creates a scalar, checking that the value fits the dtype.
    pub fn try_new(dtype: DType, value: ScalarValue) -> JaggedResult<Self> {
        let fits = match (&dtype, &value) {
            (_, ScalarValue::Null) => dtype.is_nullable(),
            (DType::Bool(_), ScalarValue::Bool(_)) => true,
            (DType::Primitive(ptype, _), ScalarValue::Primitive(pv)) => pv.ptype() == *ptype,
            (DType::Utf8(_), ScalarValue::Utf8(_)) => true,
            (DType::List(..), ScalarValue::List(_)) => true,
            _ => false,
        };
        if !fits {
            jagged_bail!("Value {:?} is not a valid {}", value, dtype);
        }
        Ok(Self { dtype, value })
    }

    /// Creates a scalar, panicking if the value does not fit the dtype.
    pub fn new(dtype: DType, value: ScalarValue) -> Self {
        Self::try_new(dtype, value).jagged_expect("Invalid scalar")
    }

    /// The null value of the given dtype, which is made nullable.
    pub fn null(dtype: DType) -> Self {
        Self {
            dtype: dtype.as_nullable(),
            value: ScalarValue::Null,
        }
    }

    pub fn bool(value: bool, nullability: Nullability) -> Self {
        Self {
            dtype: DType::Bool(nullability),
            value: ScalarValue::Bool(value),
        }
    }

    pub fn primitive<T: NativePType + Into<PValue>>(value: T, nullability: Nullability) -> Self {
        Self {
            dtype: DType::Primitive(T::PTYPE, nullability),
            value: ScalarValue::Primitive(value.into()),
        }
    }

    pub fn utf8(value: impl Into<Arc<str>>, nullability: Nullability) -> Self {
        Self {
            dtype: DType::Utf8(nullability),
            value: ScalarValue::Utf8(value.into()),
        }
    }

    /// A non-null list scalar holding `children`, each of which must have `element_dtype`.
    pub fn list(
        element_dtype: Arc<DType>,
        children: Vec<Scalar>,
        nullability: Nullability,
    ) -> Self {
        for child in &children {
            if !child.dtype().eq_ignore_nullability(&element_dtype)
                || (child.is_null() && !element_dtype.is_nullable())
            {
                jagged_error::jagged_panic!(
                    "Tried to create list of {} with values of type {}",
                    element_dtype,
                    child.dtype()
                );
            }
        }
        Self {
            dtype: DType::List(element_dtype, nullability),
            value: ScalarValue::List(children.into_iter().map(|s| s.value).collect()),
        }
    }

    #[inline]
    pub fn dtype(&self) -> &DType {
        &self.dtype
    }

    #[inline]
    pub fn value(&self) -> &ScalarValue {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> ScalarValue {
        self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    pub fn is_valid(&self) -> bool {
        !self.value.is_null()
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.dtype.eq_ignore_nullability(&other.dtype) && self.value == other.value
    }
}

macro_rules! scalar_from_native {
    ($T:ty) => {
        impl From<$T> for Scalar {
            fn from(value: $T) -> Self {
                Scalar::primitive(value, Nullability::NonNullable)
            }
        }

        impl From<Option<$T>> for Scalar {
            fn from(value: Option<$T>) -> Self {
                match value {
                    Some(v) => Scalar::primitive(v, Nullability::Nullable),
                    None => Scalar::null(DType::Primitive(<$T>::PTYPE, Nullability::Nullable)),
                }
            }
        }
    };
}

scalar_from_native!(u8);
scalar_from_native!(u16);
scalar_from_native!(u32);
scalar_from_native!(u64);
scalar_from_native!(i8);
scalar_from_native!(i16);
scalar_from_native!(i32);
scalar_from_native!(i64);
scalar_from_native!(f32);
scalar_from_native!(f64);

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::bool(value, Nullability::NonNullable)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::utf8(value, Nullability::NonNullable)
    }
}

impl From<Option<&str>> for Scalar {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(v) => Scalar::utf8(v, Nullability::Nullable),
            None => Scalar::null(DType::Utf8(Nullability::Nullable)),
        }
    }
}
