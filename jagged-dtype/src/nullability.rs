use std::fmt::{Display, Formatter};
use std::ops::BitOr;

/// Whether an instance of a DType can be `null` or not
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nullability {
    /// Instances of this DType are guaranteed to be non-nullable
    #[default]
    NonNullable,
    /// Instances of this DType may contain a null value
    Nullable,
}

impl BitOr for Nullability {
    type Output = Nullability;

    fn bitor(self, rhs: Self) -> Self::Output {
        if self == Self::Nullable || rhs == Self::Nullable {
            Self::Nullable
        } else {
            Self::NonNullable
        }
    }
}

impl From<bool> for Nullability {
    fn from(nullable: bool) -> Self {
        if nullable {
            Self::Nullable
        } else {
            Self::NonNullable
        }
    }
}

impl From<Nullability> for bool {
    fn from(value: Nullability) -> Self {
        value == Nullability::Nullable
    }
}

/// Renders nullable types with a trailing `?`, and non-nullable types as the empty string.
impl Display for Nullability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonNullable => Ok(()),
            Self::Nullable => write!(f, "?"),
        }
    }
}
