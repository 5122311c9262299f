use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;
use std::sync::Arc;

use DType::*;

use crate::PType;
use crate::nullability::Nullability;

/// The logical types of elements in jagged arrays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DType {
    /// The always-null type (only has a single value, `null`)
    Null,
    /// The logical boolean type (`true` or `false` if non-nullable; `true`, `false`, or `null` if nullable)
    Bool(Nullability),
    /// Primitive, fixed-width numeric types (e.g., `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64`, `i64`, `f32`, `f64`)
    Primitive(PType, Nullability),
    /// UTF-8 strings
    Utf8(Nullability),
    /// A variable-length list type, parameterized by a single element DType
    List(Arc<DType>, Nullability),
}

impl DType {
    /// Get the nullability of the DType
    pub fn nullability(&self) -> Nullability {
        self.is_nullable().into()
    }

    /// Check if the DType is nullable
    pub fn is_nullable(&self) -> bool {
        match self {
            Null => true,
            Bool(n) | Primitive(_, n) | Utf8(n) | List(_, n) => *n == Nullability::Nullable,
        }
    }

    /// Get a new DType with `Nullability::NonNullable` (but otherwise the same as `self`)
    pub fn as_nonnullable(&self) -> Self {
        self.with_nullability(Nullability::NonNullable)
    }

    /// Get a new DType with `Nullability::Nullable` (but otherwise the same as `self`)
    pub fn as_nullable(&self) -> Self {
        self.with_nullability(Nullability::Nullable)
    }

    /// Get a new DType with the given nullability (but otherwise the same as `self`)
    pub fn with_nullability(&self, nullability: Nullability) -> Self {
        match self {
            Null => Null,
            Bool(_) => Bool(nullability),
            Primitive(p, _) => Primitive(*p, nullability),
            Utf8(_) => Utf8(nullability),
            List(e, _) => List(e.clone(), nullability),
        }
    }

    /// Check if `self` and `other` are equal, ignoring nullability
    pub fn eq_ignore_nullability(&self, other: &Self) -> bool {
        self.as_nullable().eq(&other.as_nullable())
    }

    /// Check if `self` is the always-null type
    pub fn is_null_type(&self) -> bool {
        matches!(self, Null)
    }

    /// Check if `self` is a list
    pub fn is_list(&self) -> bool {
        matches!(self, List(..))
    }

    /// Check if `self` is an unsigned integer
    pub fn is_unsigned_int(&self) -> bool {
        self.as_ptype().is_some_and(PType::is_unsigned_int)
    }

    /// Check if `self` is a signed integer
    pub fn is_signed_int(&self) -> bool {
        self.as_ptype().is_some_and(PType::is_signed_int)
    }

    /// Check if `self` is an integer (signed or unsigned), of either nullability
    pub fn is_int(&self) -> bool {
        self.as_ptype().is_some_and(PType::is_int)
    }

    /// Check if `self` is a floating point number
    pub fn is_float(&self) -> bool {
        self.as_ptype().is_some_and(PType::is_float)
    }

    /// Check if `self` is a boolean
    pub fn is_boolean(&self) -> bool {
        matches!(self, Bool(_))
    }

    /// Get the [`PType`] if `self` is primitive, otherwise `None`
    pub fn as_ptype(&self) -> Option<PType> {
        match self {
            Primitive(p, _) => Some(*p),
            _ => None,
        }
    }

    /// Get the inner dtype if `self` is a list, otherwise `None`
    pub fn as_list_element(&self) -> Option<&DType> {
        match self {
            List(e, _) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl Display for DType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Null => write!(f, "null"),
            Bool(n) => write!(f, "bool{}", n),
            Primitive(pt, n) => write!(f, "{}{}", pt, n),
            Utf8(n) => write!(f, "utf8{}", n),
            List(edt, n) => write!(f, "list({}){}", edt, n),
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use crate::{DType, Nullability, PType};

    #[test]
    fn display() {
        let list = DType::List(
            Arc::new(DType::Primitive(PType::I32, Nullability::Nullable)),
            Nullability::NonNullable,
        );
        assert_eq!(list.to_string(), "list(i32?)");
        assert_eq!(list.as_nullable().to_string(), "list(i32?)?");
        assert_eq!(DType::Null.to_string(), "null");
    }

    #[test]
    fn nullability_roundtrips() {
        let ty = DType::Utf8(Nullability::NonNullable);
        assert!(!ty.is_nullable());
        assert!(ty.as_nullable().is_nullable());
        assert!(ty.eq_ignore_nullability(&ty.as_nullable()));
        assert!(DType::Null.is_nullable());
        assert_eq!(DType::Null.as_nonnullable(), DType::Null);
    }

    #[test]
    fn integer_checks_ignore_nullability() {
        assert!(DType::Primitive(PType::I8, Nullability::Nullable).is_int());
        assert!(DType::Primitive(PType::U64, Nullability::NonNullable).is_unsigned_int());
        assert!(!DType::Primitive(PType::F32, Nullability::NonNullable).is_int());
        assert!(!DType::Bool(Nullability::NonNullable).is_int());
        assert!(!DType::Null.is_int());
    }

    #[test]
    fn list_element() {
        let elem = DType::Utf8(Nullability::Nullable);
        let list = DType::List(Arc::new(elem.clone()), Nullability::NonNullable);
        assert_eq!(list.as_list_element(), Some(&elem));
        assert!(list.is_list());
        assert_eq!(elem.as_list_element(), None);
    }
}
