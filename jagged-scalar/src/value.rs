use std::sync::Arc;

use crate::PValue;

/// The untyped payload of a [`Scalar`](crate::Scalar).
///
/// Interpreting a value requires the dtype it was created with.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Primitive(PValue),
    Utf8(Arc<str>),
    List(Arc<[ScalarValue]>),
}

impl ScalarValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_pvalue(&self) -> Option<PValue> {
        match self {
            Self::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_utf8(&self) -> Option<&Arc<str>> {
        match self {
            Self::Utf8(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Arc<[ScalarValue]>> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }
}
