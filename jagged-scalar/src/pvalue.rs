use std::fmt::{Display, Formatter};

use jagged_dtype::{NativePType, PType};
use jagged_error::{JaggedResult, jagged_err};
use num_traits::NumCast;
use paste::paste;

/// A primitive value tagged with its physical type.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum PValue {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

macro_rules! pvalue_match {
    ($self:expr, |$v:ident| $body:expr) => {
        match $self {
            PValue::U8($v) => $body,
            PValue::U16($v) => $body,
            PValue::U32($v) => $body,
            PValue::U64($v) => $body,
            PValue::I8($v) => $body,
            PValue::I16($v) => $body,
            PValue::I32($v) => $body,
            PValue::I64($v) => $body,
            PValue::F32($v) => $body,
            PValue::F64($v) => $body,
        }
    };
}

impl PValue {
    pub fn ptype(&self) -> PType {
        match self {
            Self::U8(_) => PType::U8,
            Self::U16(_) => PType::U16,
            Self::U32(_) => PType::U32,
            Self::U64(_) => PType::U64,
            Self::I8(_) => PType::I8,
            Self::I16(_) => PType::I16,
            Self::I32(_) => PType::I32,
            Self::I64(_) => PType::I64,
            Self::F32(_) => PType::F32,
            Self::F64(_) => PType::F64,
        }
    }

    /// Converts the value into `T`, failing if it does not fit.
    pub fn as_<T: NativePType>(&self) -> JaggedResult<T> {
        pvalue_match!(*self, |v| <T as NumCast>::from(v)).ok_or_else(|| {
            jagged_err!("Cannot represent {} value {} as {}", self.ptype(), self, T::PTYPE)
        })
    }

    /// Reads an integer value as `i64`, saturating values above `i64::MAX`.
    ///
    /// Returns `None` for floating point values.
    pub fn as_i64_saturating(&self) -> Option<i64> {
        match *self {
            Self::U64(v) => Some(i64::try_from(v).unwrap_or(i64::MAX)),
            Self::U8(_) | Self::U16(_) | Self::U32(_) => self.as_::<i64>().ok(),
            Self::I8(_) | Self::I16(_) | Self::I32(_) | Self::I64(_) => self.as_::<i64>().ok(),
            Self::F32(_) | Self::F64(_) => None,
        }
    }
}

impl Display for PValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        pvalue_match!(self, |v| write!(f, "{v}"))
    }
}

macro_rules! pvalue_from {
    ($T:ident, $variant:ident) => {
        impl From<$T> for PValue {
            fn from(value: $T) -> Self {
                PValue::$variant(value)
            }
        }

        paste! {
            impl PValue {
                #[doc = "Returns the value if it is a `" $T "`."]
                pub fn [<as_ $T _opt>](&self) -> Option<$T> {
                    match self {
                        PValue::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }
        }
    };
}

pvalue_from!(u8, U8);
pvalue_from!(u16, U16);
pvalue_from!(u32, U32);
pvalue_from!(u64, U64);
pvalue_from!(i8, I8);
pvalue_from!(i16, I16);
pvalue_from!(i32, I32);
pvalue_from!(i64, I64);
pvalue_from!(f32, F32);
pvalue_from!(f64, F64);

#[cfg(test)]
mod test {
    use jagged_dtype::PType;

    use crate::PValue;

    #[test]
    fn saturating_reads() {
        assert_eq!(PValue::U64(u64::MAX).as_i64_saturating(), Some(i64::MAX));
        assert_eq!(PValue::I8(-4).as_i64_saturating(), Some(-4));
        assert_eq!(PValue::U32(7).as_i64_saturating(), Some(7));
        assert_eq!(PValue::F64(1.5).as_i64_saturating(), None);
    }

    #[test]
    fn typed_access() {
        let value = PValue::from(300u16);
        assert_eq!(value.ptype(), PType::U16);
        assert_eq!(value.as_u16_opt(), Some(300));
        assert_eq!(value.as_u8_opt(), None);
        assert_eq!(value.as_::<i32>().unwrap(), 300);
        assert!(value.as_::<u8>().is_err());
    }
}
