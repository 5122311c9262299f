use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::{Scalar, ScalarValue};

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fmt_value(&self.value, f)
    }
}

fn fmt_value(value: &ScalarValue, f: &mut Formatter<'_>) -> std::fmt::Result {
    match value {
        ScalarValue::Null => write!(f, "null"),
        ScalarValue::Bool(b) => write!(f, "{b}"),
        ScalarValue::Primitive(p) => write!(f, "{p}"),
        ScalarValue::Utf8(s) => write!(f, "\"{s}\""),
        ScalarValue::List(elems) => write!(
            f,
            "[{}]",
            elems.iter().map(DisplayValue).format(", ")
        ),
    }
}

struct DisplayValue<'a>(&'a ScalarValue);

impl Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fmt_value(self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jagged_dtype::{DType, Nullability, PType};

    use crate::Scalar;

    #[test]
    fn display_list() {
        let list = Scalar::list(
            Arc::new(DType::Primitive(PType::U8, Nullability::Nullable)),
            vec![Scalar::from(Some(1u8)), Scalar::from(None::<u8>)],
            Nullability::NonNullable,
        );
        assert_eq!(list.to_string(), "[1, null]");
    }

    #[test]
    fn display_utf8() {
        assert_eq!(Scalar::from("abc").to_string(), "\"abc\"");
        assert_eq!(Scalar::from(true).to_string(), "true");
    }
}
