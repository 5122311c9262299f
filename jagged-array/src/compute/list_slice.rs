//! Slicing every row of a list column by a signed, 1-based offset and an optional signed length.
//!
//! Offsets count from the start of a row when positive and from its end when negative; an
//! offset of zero selects nothing. A positive length keeps at most that many elements, a
//! negative length drops that many from the end of the row. Nothing out of range is an error:
//! spans are clamped to the row.
//!
//! The offset and length columns are classified once per call into a [`SliceStrategy`], and each
//! strategy runs its own row loop. [`resolve_span`] is the row-at-a-time reference every strategy
//! agrees with.

use std::fmt::{Display, Formatter};
use std::ops::Range;

use jagged_buffer::BufferMut;
use jagged_error::{JaggedResult, jagged_bail};

use crate::arrays::{ConstantArray, ListArray, NullArray, PrimitiveArray};
use crate::compute::{take_ranges, to_list_backed};
use crate::{Array, ArrayRef, IntoArray};

const FUNCTION_NAME: &str = "list_slice";

/// The part of one row kept by a slice: `len` elements, starting `start` elements into the row.
///
/// Always satisfies `start + len <= row_len`. Empty spans are always `{ start: 0, len: 0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowSpan {
    pub start: usize,
    pub len: usize,
}

impl RowSpan {
    pub const EMPTY: RowSpan = RowSpan { start: 0, len: 0 };

    #[inline]
    fn new(start: usize, len: usize) -> Self {
        if len == 0 {
            Self::EMPTY
        } else {
            Self { start, len }
        }
    }

    /// The whole of a row of `row_len` elements.
    #[inline]
    fn full(row_len: usize) -> Self {
        Self::new(0, row_len)
    }
}

#[inline]
fn saturating_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Resolves the span of a row of `row_len` elements.
///
/// `None` stands for an absent or null argument: an absent offset means `1`, an absent length
/// means "to the end of the row".
pub fn resolve_span(row_len: usize, offset: Option<i64>, length: Option<i64>) -> RowSpan {
    let offset = offset.unwrap_or(1);
    let start = if offset > 0 {
        let start = saturating_usize(offset.unsigned_abs() - 1);
        if start >= row_len {
            return RowSpan::EMPTY;
        }
        start
    } else if offset < 0 {
        row_len.saturating_sub(saturating_usize(offset.unsigned_abs()))
    } else {
        return RowSpan::EMPTY;
    };

    let remaining = row_len - start;
    let len = match length {
        None => remaining,
        Some(length) if length >= 0 => remaining.min(saturating_usize(length.unsigned_abs())),
        Some(length) => remaining.saturating_sub(saturating_usize(length.unsigned_abs())),
    };
    RowSpan::new(start, len)
}

/// An integer argument of [`list_slice`], classified by how it varies across rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceArg {
    /// Not given, or null for every row.
    Absent,
    /// One value for every row.
    Constant(i64),
    /// One value per row, `None` where the row's value is null.
    PerRow(Vec<Option<i64>>),
}

impl SliceArg {
    /// Classifies an argument column of `row_count` rows, passed at 1-based `position`.
    ///
    /// Values beyond `i64::MAX` saturate, so they behave as "past the end of any row".
    pub fn try_new(
        argument: Option<&dyn Array>,
        position: usize,
        row_count: usize,
    ) -> JaggedResult<Self> {
        let Some(argument) = argument else {
            return Ok(Self::Absent);
        };
        let dtype = argument.dtype();
        if dtype.is_null_type() {
            return Ok(Self::Absent);
        }
        if !dtype.is_int() {
            jagged_bail!(
                IllegalArgumentType: FUNCTION_NAME,
                "Argument {} for function {} must be integer but it has type {}",
                position,
                FUNCTION_NAME,
                dtype
            );
        }

        if let Some(constant) = argument.as_opt::<ConstantArray>() {
            return Ok(constant
                .scalar()
                .as_primitive()
                .as_i64_saturating()
                .map_or(Self::Absent, Self::Constant));
        }

        if argument.len() != row_count {
            jagged_bail!(
                IllegalColumn: FUNCTION_NAME,
                "Argument {} has {} rows but the list column has {}",
                position,
                argument.len(),
                row_count
            );
        }

        let values = match argument
            .as_opt::<PrimitiveArray>()
            .and_then(|p| p.to_i64_saturating())
        {
            Some(values) => values,
            None => (0..argument.len())
                .map(|i| {
                    argument
                        .scalar_at(i)
                        .map(|s| s.as_primitive().as_i64_saturating())
                })
                .collect::<JaggedResult<Vec<_>>>()?,
        };
        Ok(Self::PerRow(values))
    }
}

/// Per-row values of one argument inside [`SliceStrategy::DynamicBounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowValues<'a> {
    Constant(i64),
    PerRow(&'a [Option<i64>]),
}

/// How every row of one [`list_slice`] call is resolved, chosen once per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceStrategy<'a> {
    /// Every row is kept whole.
    Identity,
    /// Rows are kept from the 0-based `start` to their end.
    FromLeftUnbounded { start: usize },
    /// The last `offset` elements of each row are kept.
    FromRightUnbounded { offset: usize },
    /// From the 0-based `start`, bounded by the signed `length`.
    FromLeftBounded { start: usize, length: i64 },
    /// From `offset` elements before each row end, bounded by the signed `length`.
    FromRightBounded { offset: usize, length: i64 },
    /// A per-row offset with no length.
    DynamicOffsetUnbounded { offsets: &'a [Option<i64>] },
    /// Any combination involving a per-row argument and a length.
    DynamicBounded {
        offset: RowValues<'a>,
        length: RowValues<'a>,
    },
}

impl<'a> SliceStrategy<'a> {
    /// Selects the strategy for the given arguments.
    pub fn select(offset: &'a SliceArg, length: &'a SliceArg) -> Self {
        match (offset, length) {
            (SliceArg::Absent, SliceArg::Absent) => Self::Identity,
            (SliceArg::Absent, SliceArg::Constant(length)) => Self::FromLeftBounded {
                start: 0,
                length: *length,
            },
            (SliceArg::Absent, SliceArg::PerRow(lengths)) => Self::DynamicBounded {
                offset: RowValues::Constant(1),
                length: RowValues::PerRow(lengths),
            },
            (SliceArg::Constant(offset), SliceArg::Absent) => {
                if *offset > 0 {
                    Self::FromLeftUnbounded {
                        start: saturating_usize(offset.unsigned_abs() - 1),
                    }
                } else {
                    Self::FromRightUnbounded {
                        offset: saturating_usize(offset.unsigned_abs()),
                    }
                }
            }
            (SliceArg::Constant(offset), SliceArg::Constant(length)) => {
                if *offset > 0 {
                    Self::FromLeftBounded {
                        start: saturating_usize(offset.unsigned_abs() - 1),
                        length: *length,
                    }
                } else {
                    Self::FromRightBounded {
                        offset: saturating_usize(offset.unsigned_abs()),
                        length: *length,
                    }
                }
            }
            (SliceArg::Constant(offset), SliceArg::PerRow(lengths)) => Self::DynamicBounded {
                offset: RowValues::Constant(*offset),
                length: RowValues::PerRow(lengths),
            },
            (SliceArg::PerRow(offsets), SliceArg::Absent) => {
                Self::DynamicOffsetUnbounded { offsets }
            }
            (SliceArg::PerRow(offsets), SliceArg::Constant(length)) => Self::DynamicBounded {
                offset: RowValues::PerRow(offsets),
                length: RowValues::Constant(*length),
            },
            (SliceArg::PerRow(offsets), SliceArg::PerRow(lengths)) => Self::DynamicBounded {
                offset: RowValues::PerRow(offsets),
                length: RowValues::PerRow(lengths),
            },
        }
    }

    /// Resolves the span of every row of `list`.
    pub fn resolve(&self, list: &ListArray) -> Vec<RowSpan> {
        let rows = 0..list.len();
        match *self {
            Self::Identity => rows.map(|row| RowSpan::full(list.row_len(row))).collect(),
            Self::FromLeftUnbounded { start } => rows
                .map(|row| {
                    let row_len = list.row_len(row);
                    if start < row_len {
                        RowSpan::new(start, row_len - start)
                    } else {
                        RowSpan::EMPTY
                    }
                })
                .collect(),
            Self::FromRightUnbounded { offset } => {
                if offset == 0 {
                    return vec![RowSpan::EMPTY; list.len()];
                }
                rows.map(|row| {
                    let row_len = list.row_len(row);
                    let start = row_len.saturating_sub(offset);
                    RowSpan::new(start, row_len - start)
                })
                .collect()
            }
            Self::FromLeftBounded { start, length } => rows
                .map(|row| {
                    let row_len = list.row_len(row);
                    if start < row_len {
                        RowSpan::new(start, bounded_len(row_len - start, length))
                    } else {
                        RowSpan::EMPTY
                    }
                })
                .collect(),
            Self::FromRightBounded { offset, length } => {
                if offset == 0 {
                    return vec![RowSpan::EMPTY; list.len()];
                }
                rows.map(|row| {
                    let row_len = list.row_len(row);
                    let start = row_len.saturating_sub(offset);
                    RowSpan::new(start, bounded_len(row_len - start, length))
                })
                .collect()
            }
            Self::DynamicOffsetUnbounded { offsets } => rows
                .map(|row| resolve_span(list.row_len(row), offsets[row], None))
                .collect(),
            Self::DynamicBounded { offset, length } => match (offset, length) {
                (RowValues::Constant(o), RowValues::Constant(l)) => {
                    resolve_rows(list, |_| Some(o), |_| Some(l))
                }
                (RowValues::Constant(o), RowValues::PerRow(l)) => {
                    resolve_rows(list, |_| Some(o), |row| l[row])
                }
                (RowValues::PerRow(o), RowValues::Constant(l)) => {
                    resolve_rows(list, |row| o[row], |_| Some(l))
                }
                (RowValues::PerRow(o), RowValues::PerRow(l)) => {
                    resolve_rows(list, |row| o[row], |row| l[row])
                }
            },
        }
    }
}

impl Display for SliceStrategy<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identity => write!(f, "Identity"),
            Self::FromLeftUnbounded { start } => write!(f, "FromLeftUnbounded(start={start})"),
            Self::FromRightUnbounded { offset } => {
                write!(f, "FromRightUnbounded(offset={offset})")
            }
            Self::FromLeftBounded { start, length } => {
                write!(f, "FromLeftBounded(start={start}, length={length})")
            }
            Self::FromRightBounded { offset, length } => {
                write!(f, "FromRightBounded(offset={offset}, length={length})")
            }
            Self::DynamicOffsetUnbounded { .. } => write!(f, "DynamicOffsetUnbounded"),
            Self::DynamicBounded { offset, length } => {
                let kind = |values: &RowValues<'_>| match values {
                    RowValues::Constant(_) => "constant",
                    RowValues::PerRow(_) => "per-row",
                };
                write!(
                    f,
                    "DynamicBounded(offset={}, length={})",
                    kind(offset),
                    kind(length)
                )
            }
        }
    }
}

/// Elements kept from `remaining` by a signed `length`.
#[inline]
fn bounded_len(remaining: usize, length: i64) -> usize {
    let magnitude = saturating_usize(length.unsigned_abs());
    if length >= 0 {
        remaining.min(magnitude)
    } else {
        remaining.saturating_sub(magnitude)
    }
}

#[inline]
fn resolve_rows<O, L>(list: &ListArray, offset: O, length: L) -> Vec<RowSpan>
where
    O: Fn(usize) -> Option<i64>,
    L: Fn(usize) -> Option<i64>,
{
    (0..list.len())
        .map(|row| resolve_span(list.row_len(row), offset(row), length(row)))
        .collect()
}

/// Slices every row of a list column.
///
/// `offset` and `length` are integer or null-typed columns, either constant or with one value
/// per row. The result has the dtype and row validity of `array`. Without an offset and a length
/// the input array itself is returned, and a null-typed input produces all nulls.
pub fn list_slice(
    array: &dyn Array,
    offset: Option<&dyn Array>,
    length: Option<&dyn Array>,
) -> JaggedResult<ArrayRef> {
    if array.dtype().is_null_type() {
        return Ok(NullArray::new(array.len()).into_array());
    }
    let Some(list) = to_list_backed(array)? else {
        jagged_bail!(
            LogicalError: "First argument for function {} must be a list, got {} array of type {}",
            FUNCTION_NAME,
            array.encoding(),
            array.dtype()
        );
    };

    let offset = SliceArg::try_new(offset, 2, list.len())?;
    let length = SliceArg::try_new(length, 3, list.len())?;
    let strategy = SliceStrategy::select(&offset, &length);
    log::trace!("{} over {} rows with {}", FUNCTION_NAME, list.len(), strategy);

    if strategy == SliceStrategy::Identity {
        return Ok(array.to_array());
    }

    let spans = strategy.resolve(&list);
    gather_spans(&list, &spans)
}

/// Builds the sliced list column from one span per row.
fn gather_spans(list: &ListArray, spans: &[RowSpan]) -> JaggedResult<ArrayRef> {
    let mut offsets = BufferMut::<u64>::with_capacity(spans.len() + 1);
    offsets.push(0);
    let mut ranges: Vec<Range<usize>> = Vec::with_capacity(spans.len());
    let mut cursor = 0u64;

    for (row, span) in spans.iter().enumerate() {
        if span.len > 0 {
            let start = list.row_range(row).start + span.start;
            let end = start + span.len;
            match ranges.last_mut() {
                Some(last) if last.end == start => last.end = end,
                _ => ranges.push(start..end),
            }
            cursor += span.len as u64;
        }
        offsets.push(cursor);
    }

    let elements = take_ranges(list.elements(), &ranges)?;
    Ok(ListArray::try_new(elements, offsets.freeze(), list.validity())?.into_array())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jagged_dtype::{DType, Nullability, PType};
    use jagged_error::JaggedError;
    use jagged_scalar::Scalar;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    use super::*;
    use crate::arrays::VarBinArray;
    use crate::test_harness::{
        list_rows, random_list, random_slice_arg, slice_arg_array, slice_arg_at,
    };
    use crate::validity::Validity;

    fn i32_list(rows: Vec<Vec<Option<i32>>>) -> ArrayRef {
        ListArray::from_iter_slow(
            rows,
            Arc::new(DType::Primitive(PType::I32, Nullability::Nullable)),
        )
        .unwrap()
    }

    fn constant(value: i64, len: usize) -> ArrayRef {
        ConstantArray::new(value, len).into_array()
    }

    #[rstest]
    #[case(6, Some(-4), Some(2), RowSpan { start: 2, len: 2 })]
    #[case(6, Some(2), Some(-1), RowSpan { start: 1, len: 4 })]
    #[case(6, Some(-5), Some(-1), RowSpan { start: 1, len: 4 })]
    #[case(5, Some(2), Some(3), RowSpan { start: 1, len: 3 })]
    #[case(5, None, None, RowSpan { start: 0, len: 5 })]
    #[case(5, None, Some(2), RowSpan { start: 0, len: 2 })]
    #[case(5, Some(0), None, RowSpan::EMPTY)]
    #[case(5, Some(0), Some(3), RowSpan::EMPTY)]
    #[case(5, Some(6), None, RowSpan::EMPTY)]
    #[case(5, Some(5), Some(10), RowSpan { start: 4, len: 1 })]
    #[case(5, Some(-8), None, RowSpan { start: 0, len: 5 })]
    #[case(5, Some(-8), Some(3), RowSpan { start: 0, len: 3 })]
    #[case(5, Some(1), Some(-5), RowSpan::EMPTY)]
    #[case(5, Some(1), Some(-9), RowSpan::EMPTY)]
    #[case(5, Some(2), Some(0), RowSpan::EMPTY)]
    #[case(0, None, None, RowSpan::EMPTY)]
    #[case(0, Some(-1), Some(1), RowSpan::EMPTY)]
    #[case(3, Some(i64::MAX), None, RowSpan::EMPTY)]
    #[case(3, Some(i64::MIN), Some(i64::MAX), RowSpan { start: 0, len: 3 })]
    #[case(3, Some(1), Some(i64::MIN), RowSpan::EMPTY)]
    fn reference_spans(
        #[case] row_len: usize,
        #[case] offset: Option<i64>,
        #[case] length: Option<i64>,
        #[case] expected: RowSpan,
    ) {
        assert_eq!(resolve_span(row_len, offset, length), expected);
    }

    #[rstest]
    #[case(Some(-4), Some(2), vec![Some(3), Some(4)])]
    #[case(Some(2), Some(-1), vec![Some(2), Some(3), Some(4), Some(5)])]
    #[case(Some(-5), Some(-1), vec![Some(2), Some(3), Some(4), Some(5)])]
    #[case(Some(4), None, vec![Some(4), Some(5), Some(6)])]
    #[case(None, Some(2), vec![Some(1), Some(2)])]
    #[case(Some(7), Some(1), vec![])]
    fn slices_one_row(
        #[case] offset: Option<i64>,
        #[case] length: Option<i64>,
        #[case] expected: Vec<Option<i32>>,
    ) {
        let list = i32_list(vec![(1..=6).map(Some).collect()]);
        let offset = offset.map(|o| constant(o, 1));
        let length = length.map(|l| constant(l, 1));
        let sliced = list_slice(&list, offset.as_deref(), length.as_deref()).unwrap();
        assert_eq!(list_rows::<i32>(&sliced), vec![Some(expected)]);
    }

    #[test]
    fn keeps_null_elements() {
        let list = i32_list(vec![vec![Some(1), Some(2), None, Some(4), Some(5)]]);
        let sliced = list_slice(&list, Some(&constant(2, 1)), Some(&constant(3, 1))).unwrap();
        assert_eq!(
            list_rows::<i32>(&sliced),
            vec![Some(vec![Some(2), None, Some(4)])]
        );
        assert_eq!(sliced.dtype(), list.dtype());
    }

    #[test]
    fn identity_returns_input() {
        let list = i32_list(vec![vec![Some(1)], vec![]]);
        let nulls = NullArray::new(2).into_array();

        let sliced = list_slice(&list, None, None).unwrap();
        assert!(Arc::ptr_eq(&sliced, &list));

        let sliced = list_slice(&list, Some(&nulls), None).unwrap();
        assert!(Arc::ptr_eq(&sliced, &list));

        let null_constant = ConstantArray::new(
            Scalar::null(DType::Primitive(PType::I64, Nullability::Nullable)),
            2,
        )
        .into_array();
        let sliced = list_slice(&list, Some(&null_constant), Some(&nulls)).unwrap();
        assert!(Arc::ptr_eq(&sliced, &list));
    }

    #[test]
    fn per_row_arguments_with_nulls() {
        let list = i32_list(vec![
            (1..=4).map(Some).collect(),
            (1..=4).map(Some).collect(),
            (1..=4).map(Some).collect(),
        ]);
        let offsets = PrimitiveArray::from_option_iter([Some(-2i32), None, Some(3)]).into_array();
        let lengths = PrimitiveArray::from_option_iter([None, Some(2u8), Some(1)]).into_array();
        let sliced = list_slice(&list, Some(&offsets), Some(&lengths)).unwrap();
        assert_eq!(
            list_rows::<i32>(&sliced),
            vec![
                Some(vec![Some(3), Some(4)]),
                Some(vec![Some(1), Some(2)]),
                Some(vec![Some(3)]),
            ]
        );
    }

    #[test]
    fn null_rows_stay_null() {
        let list = ListArray::from_iter_opt_slow(
            [Some(vec![1i64, 2, 3]), None, Some(vec![4])],
            Arc::new(PType::I64.into()),
        )
        .unwrap();
        let sliced = list_slice(&list, Some(&constant(-1, 3)), None).unwrap();
        assert_eq!(
            list_rows::<i64>(&sliced),
            vec![Some(vec![Some(3)]), None, Some(vec![Some(4)])]
        );
    }

    #[test]
    fn slices_nested_strings() {
        let strings = VarBinArray::from_iter(["a", "b", "c", "d"], Nullability::NonNullable);
        let list = ListArray::try_new(
            strings.into_array(),
            [0u64, 3, 4].into_iter().collect(),
            Validity::NonNullable,
        )
        .unwrap()
        .into_array();
        let sliced = list_slice(&list, Some(&constant(-2, 2)), None).unwrap();
        let sliced_list = sliced.as_opt::<ListArray>().unwrap();
        assert_eq!(sliced_list.offsets().as_slice(), &[0, 2, 3]);
        assert_eq!(sliced_list.scalar_at(0).unwrap().to_string(), "[\"b\", \"c\"]");
        assert_eq!(sliced_list.scalar_at(1).unwrap().to_string(), "[\"d\"]");
    }

    #[test]
    fn null_typed_input_is_all_null() {
        let sliced = list_slice(&NullArray::new(3), Some(&constant(1, 3)), None).unwrap();
        assert!(sliced.is::<NullArray>());
        assert_eq!(sliced.len(), 3);
    }

    #[test]
    fn rejects_non_list_input() {
        let values = PrimitiveArray::from_iter([1i32, 2]);
        let err = list_slice(&values, Some(&constant(1, 2)), None).unwrap_err();
        assert!(matches!(err, JaggedError::LogicalError(..)));
    }

    #[test]
    fn rejects_bad_arguments() {
        let list = i32_list(vec![vec![Some(1)], vec![Some(2)]]);

        let floats = PrimitiveArray::from_iter([1.0f64, 2.0]).into_array();
        let err = list_slice(&list, Some(&floats), None).unwrap_err();
        assert!(matches!(err, JaggedError::IllegalArgumentType(..)));
        assert!(err.to_string().contains(
            "Argument 2 for function list_slice must be integer but it has type f64"
        ));

        let short = PrimitiveArray::from_iter([1i64]).into_array();
        let err = list_slice(&list, Some(&constant(1, 2)), Some(&short)).unwrap_err();
        assert!(matches!(err, JaggedError::IllegalColumn(..)));
    }

    #[rstest]
    #[case(SliceArg::Absent, SliceArg::Absent, "Identity")]
    #[case(SliceArg::Absent, SliceArg::Constant(2), "FromLeftBounded(start=0, length=2)")]
    #[case(SliceArg::Absent, SliceArg::PerRow(vec![]), "DynamicBounded(offset=constant, length=per-row)")]
    #[case(SliceArg::Constant(3), SliceArg::Absent, "FromLeftUnbounded(start=2)")]
    #[case(SliceArg::Constant(-3), SliceArg::Absent, "FromRightUnbounded(offset=3)")]
    #[case(SliceArg::Constant(0), SliceArg::Absent, "FromRightUnbounded(offset=0)")]
    #[case(SliceArg::Constant(1), SliceArg::Constant(-1), "FromLeftBounded(start=0, length=-1)")]
    #[case(SliceArg::Constant(-1), SliceArg::Constant(4), "FromRightBounded(offset=1, length=4)")]
    #[case(SliceArg::Constant(2), SliceArg::PerRow(vec![]), "DynamicBounded(offset=constant, length=per-row)")]
    #[case(SliceArg::PerRow(vec![]), SliceArg::Absent, "DynamicOffsetUnbounded")]
    #[case(SliceArg::PerRow(vec![]), SliceArg::Constant(1), "DynamicBounded(offset=per-row, length=constant)")]
    #[case(SliceArg::PerRow(vec![]), SliceArg::PerRow(vec![]), "DynamicBounded(offset=per-row, length=per-row)")]
    fn strategy_selection(
        #[case] offset: SliceArg,
        #[case] length: SliceArg,
        #[case] expected: &str,
    ) {
        assert_eq!(SliceStrategy::select(&offset, &length).to_string(), expected);
    }

    #[test]
    fn every_strategy_matches_reference() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..200 {
            let list = random_list(&mut rng, 40, 8);
            let offset = random_slice_arg(&mut rng, list.len(), 10);
            let length = random_slice_arg(&mut rng, list.len(), 10);

            let spans = SliceStrategy::select(&offset, &length).resolve(&list);
            for (row, span) in spans.iter().enumerate() {
                let row_len = list.row_len(row);
                let expected = resolve_span(
                    row_len,
                    slice_arg_at(&offset, row),
                    slice_arg_at(&length, row),
                );
                assert_eq!(
                    *span, expected,
                    "row {row} of length {row_len} with {offset:?} and {length:?}"
                );
                assert!(span.start + span.len <= row_len);
            }
        }
    }

    #[test]
    fn sliced_rows_match_spans() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let list = random_list(&mut rng, 30, 6);
            let offset = random_slice_arg(&mut rng, list.len(), 8);
            let length = random_slice_arg(&mut rng, list.len(), 8);

            let offset_array = slice_arg_array(&offset, list.len());
            let length_array = slice_arg_array(&length, list.len());
            let sliced = list_slice(&list, offset_array.as_deref(), length_array.as_deref())
                .unwrap();

            let input_rows = list_rows::<i64>(&list);
            let sliced_rows = list_rows::<i64>(&sliced);
            assert_eq!(sliced.len(), list.len());
            for (row, (input, output)) in input_rows.iter().zip(sliced_rows).enumerate() {
                let Some(input) = input else {
                    assert!(output.is_none());
                    continue;
                };
                let span = resolve_span(
                    input.len(),
                    slice_arg_at(&offset, row),
                    slice_arg_at(&length, row),
                );
                assert_eq!(output.unwrap(), &input[span.start..span.start + span.len]);
            }
        }
    }
}
