use std::sync::Arc;

use jagged_array::compute::list_enumerate;
use jagged_array::ArrayRef;
use jagged_dtype::{DType, Nullability, PType};
use jagged_error::{JaggedResult, jagged_bail};

use crate::{ScalarFunction, check_arg_count};

/// `list_enumerate(list)`: the 1-based position of every element within its row.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListEnumerate;

impl ListEnumerate {
    pub const NAME: &'static str = "list_enumerate";
}

impl ScalarFunction for ListEnumerate {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn return_dtype(&self, arg_dtypes: &[DType]) -> JaggedResult<DType> {
        check_arg_count(Self::NAME, arg_dtypes.len(), 1, 1)?;
        let list = &arg_dtypes[0];
        if !list.is_list() {
            jagged_bail!(
                IllegalArgumentType: Self::NAME,
                "Argument for function {} must be a list, got {}",
                Self::NAME,
                list
            );
        }
        Ok(DType::List(
            Arc::new(DType::Primitive(PType::U32, Nullability::NonNullable)),
            list.nullability(),
        ))
    }

    fn invoke(
        &self,
        args: &[ArrayRef],
        _return_dtype: &DType,
        _row_count: usize,
    ) -> JaggedResult<ArrayRef> {
        check_arg_count(Self::NAME, args.len(), 1, 1)?;
        list_enumerate(args[0].as_ref())
    }
}

#[cfg(test)]
mod tests {
    use jagged_array::IntoArray;
    use jagged_array::arrays::{ListArray, PrimitiveArray};
    use jagged_array::test_harness::list_rows;
    use jagged_error::JaggedError;
    use rstest::rstest;

    use super::*;

    fn list_of(element: DType, nullability: Nullability) -> DType {
        DType::List(Arc::new(element), nullability)
    }

    #[rstest]
    #[case(Nullability::NonNullable)]
    #[case(Nullability::Nullable)]
    fn returns_u32_positions(#[case] nullability: Nullability) {
        let input = list_of(DType::Utf8(Nullability::Nullable), nullability);
        assert_eq!(
            ListEnumerate.return_dtype(&[input]).unwrap(),
            list_of(PType::U32.into(), nullability)
        );
    }

    #[test]
    fn rejects_wrong_argument_count() {
        let list = list_of(PType::I8.into(), Nullability::NonNullable);
        let err = ListEnumerate
            .return_dtype(&[list.clone(), list])
            .unwrap_err();
        assert!(matches!(err, JaggedError::ArgumentCountMismatch(..)));
        assert!(err.to_string().starts_with(
            "Number of arguments for function list_enumerate doesn't match: passed 2, should be 1"
        ));
        assert!(matches!(
            ListEnumerate.return_dtype(&[]),
            Err(JaggedError::ArgumentCountMismatch(..))
        ));
    }

    #[rstest]
    #[case(DType::Null)]
    #[case(DType::Utf8(Nullability::NonNullable))]
    #[case(PType::I64.into())]
    fn rejects_non_list_argument(#[case] dtype: DType) {
        assert!(matches!(
            ListEnumerate.return_dtype(&[dtype]),
            Err(JaggedError::IllegalArgumentType(..))
        ));
    }

    #[test]
    fn evaluates() {
        let list = ListArray::from_iter_slow(
            [vec![10i32, 20, 30], vec![], vec![7]],
            Arc::new(PType::I32.into()),
        )
        .unwrap();
        let enumerated = ListEnumerate.evaluate(&[list]).unwrap();
        assert_eq!(
            list_rows::<u32>(&enumerated),
            vec![
                Some(vec![Some(1), Some(2), Some(3)]),
                Some(vec![]),
                Some(vec![Some(1)]),
            ]
        );
    }

    #[test]
    fn evaluate_rejects_non_list_column() {
        let values = PrimitiveArray::from_iter([1i32, 2]).into_array();
        assert!(matches!(
            ListEnumerate.evaluate(&[values]),
            Err(JaggedError::IllegalArgumentType(..))
        ));
    }
}
