mod compute;

use std::any::Any;
use std::ops::Range;
use std::sync::Arc;

use itertools::Itertools;
use jagged_buffer::Buffer;
use jagged_dtype::DType;
use jagged_error::{JaggedResult, jagged_bail};
use jagged_scalar::Scalar;
use num_traits::AsPrimitive;

#[cfg(feature = "test-harness")]
use crate::builders::{ArrayBuilder, ListBuilder};
use crate::compute::{TakeRangesFn, take_ranges};
use crate::validity::Validity;
use crate::{Array, ArrayRef, EncodingId, IntoArray};

/// A list (jagged) column: `N` rows over one flattened `elements` array.
///
/// Row `i` holds `elements[offsets[i]..offsets[i + 1]]`, so `offsets` always has `N + 1`
/// entries. Rows may be empty, and `validity` marks whole rows as null independently of the
/// validity of the elements themselves.
#[derive(Clone, Debug)]
pub struct ListArray {
    dtype: DType,
    elements: ArrayRef,
    offsets: Buffer<u64>,
    validity: Validity,
}

// A list is valid if:
// - offsets has at least one entry, [0] for an empty list
// - offsets are sorted
// - the final offset is within the elements
// - the validity describes offsets.len() - 1 rows
impl ListArray {
    pub const ID: EncodingId = EncodingId::new_ref("jagged.list");

    pub fn try_new(
        elements: ArrayRef,
        offsets: Buffer<u64>,
        validity: Validity,
    ) -> JaggedResult<Self> {
        let Some(&last) = offsets.as_slice().last() else {
            jagged_bail!("Offsets must have at least one element, [0] for an empty list");
        };
        if AsPrimitive::<usize>::as_(last) > elements.len() {
            jagged_bail!(
                "Last offset {} is beyond the {} elements of the list",
                last,
                elements.len()
            );
        }
        validity.check_len(offsets.len() - 1)?;
        debug_assert!(offsets.as_slice().is_sorted(), "offsets must be non-decreasing");

        Ok(Self {
            dtype: DType::List(Arc::new(elements.dtype().clone()), validity.nullability()),
            elements,
            offsets,
            validity,
        })
    }

    /// The offsets of the rows, `len() + 1` entries, ignoring validity.
    pub fn offsets(&self) -> &Buffer<u64> {
        &self.offsets
    }

    /// The flattened elements of all rows, ignoring validity.
    pub fn elements(&self) -> &ArrayRef {
        &self.elements
    }

    pub fn element_dtype(&self) -> &DType {
        self.elements.dtype()
    }

    /// The range of `elements` holding row `index`.
    #[inline]
    pub fn row_range(&self, index: usize) -> Range<usize> {
        self.offsets[index].as_()..self.offsets[index + 1].as_()
    }

    /// The number of elements in row `index`.
    #[inline]
    pub fn row_len(&self, index: usize) -> usize {
        (self.offsets[index + 1] - self.offsets[index]).as_()
    }

    /// The elements of row `index` as a new array.
    pub fn elements_at(&self, index: usize) -> JaggedResult<ArrayRef> {
        if index >= self.len() {
            jagged_bail!(OutOfBounds: index, 0, self.len());
        }
        take_ranges(&self.elements, &[self.row_range(index)])
    }
}

impl Array for ListArray {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_array(&self) -> ArrayRef {
        self.clone().into_array()
    }

    fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    fn dtype(&self) -> &DType {
        &self.dtype
    }

    fn encoding(&self) -> EncodingId {
        Self::ID
    }

    fn validity(&self) -> Validity {
        self.validity.clone()
    }

    fn valid_scalar_at(&self, index: usize) -> JaggedResult<Scalar> {
        let children: Vec<Scalar> = self
            .row_range(index)
            .map(|i| self.elements.scalar_at(i))
            .try_collect()?;
        Ok(Scalar::list(
            Arc::new(self.element_dtype().clone()),
            children,
            self.dtype.nullability(),
        ))
    }

    fn take_ranges_fn(&self) -> Option<&dyn TakeRangesFn> {
        Some(self)
    }
}

impl IntoArray for ListArray {
    fn into_array(self) -> ArrayRef {
        Arc::new(self)
    }
}

#[cfg(feature = "test-harness")]
impl ListArray {
    /// This is a convenience method to create a list array from an iterator of iterators.
    /// This method is slow however since each element is first converted to a scalar and then
    /// appended to the array.
    pub fn from_iter_slow<I: IntoIterator>(iter: I, dtype: Arc<DType>) -> JaggedResult<ArrayRef>
    where
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Into<Scalar>,
    {
        let iter = iter.into_iter();
        let mut builder = ListBuilder::with_capacity(
            dtype.clone(),
            jagged_dtype::Nullability::NonNullable,
            iter.size_hint().0,
        );

        for v in iter {
            let elem = Scalar::list(
                dtype.clone(),
                v.into_iter().map(|x| x.into()).collect_vec(),
                jagged_dtype::Nullability::NonNullable,
            );
            builder.append_value(elem.as_list())?
        }
        Ok(builder.finish())
    }

    pub fn from_iter_opt_slow<I: IntoIterator<Item = Option<T>>, T>(
        iter: I,
        dtype: Arc<DType>,
    ) -> JaggedResult<ArrayRef>
    where
        T: IntoIterator,
        T::Item: Into<Scalar>,
    {
        let iter = iter.into_iter();
        let mut builder = ListBuilder::with_capacity(
            dtype.clone(),
            jagged_dtype::Nullability::Nullable,
            iter.size_hint().0,
        );

        for v in iter {
            if let Some(v) = v {
                let elem = Scalar::list(
                    dtype.clone(),
                    v.into_iter().map(|x| x.into()).collect_vec(),
                    jagged_dtype::Nullability::Nullable,
                );
                builder.append_value(elem.as_list())?
            } else {
                builder.append_null()
            }
        }
        Ok(builder.finish())
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use jagged_buffer::buffer;
    use jagged_dtype::PType::I32;
    use jagged_dtype::{DType, Nullability};
    use jagged_scalar::Scalar;

    use crate::arrays::PrimitiveArray;
    use crate::arrays::list::ListArray;
    use crate::validity::Validity;
    use crate::{Array, IntoArray};

    #[test]
    fn test_empty_list_array() {
        let elements = PrimitiveArray::empty::<u32>(Nullability::NonNullable);
        let list =
            ListArray::try_new(elements.into_array(), buffer![0u64], Validity::AllValid).unwrap();

        assert_eq!(0, list.len());
    }

    #[test]
    fn test_simple_list_array() {
        let elements = PrimitiveArray::from_iter([1i32, 2, 3, 4, 5]);
        let list = ListArray::try_new(
            elements.into_array(),
            buffer![0u64, 2, 4, 5],
            Validity::AllValid,
        )
        .unwrap();

        assert_eq!(
            Scalar::list(
                Arc::new(I32.into()),
                vec![1.into(), 2.into()],
                Nullability::Nullable
            ),
            list.scalar_at(0).unwrap()
        );
        assert_eq!(
            Scalar::list(
                Arc::new(I32.into()),
                vec![3.into(), 4.into()],
                Nullability::Nullable
            ),
            list.scalar_at(1).unwrap()
        );
        assert_eq!(
            Scalar::list(Arc::new(I32.into()), vec![5.into()], Nullability::Nullable),
            list.scalar_at(2).unwrap()
        );
    }

    #[test]
    fn test_simple_list_array_from_iter() {
        let elements = PrimitiveArray::from_iter([1i32, 2, 3]);
        let list = ListArray::try_new(
            elements.into_array(),
            buffer![0u64, 2, 3],
            Validity::NonNullable,
        )
        .unwrap();

        let list_from_iter =
            ListArray::from_iter_slow(vec![vec![1i32, 2], vec![3]], Arc::new(I32.into())).unwrap();

        assert_eq!(list.len(), list_from_iter.len());
        assert_eq!(list.dtype(), list_from_iter.dtype());
        assert_eq!(
            list.scalar_at(0).unwrap(),
            list_from_iter.scalar_at(0).unwrap()
        );
        assert_eq!(
            list.scalar_at(1).unwrap(),
            list_from_iter.scalar_at(1).unwrap()
        );
    }

    #[test]
    fn test_row_ranges_with_leading_offset() {
        let elements = PrimitiveArray::from_iter([9i32, 1, 2, 3]);
        let list = ListArray::try_new(
            elements.into_array(),
            buffer![1u64, 1, 4],
            Validity::NonNullable,
        )
        .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.row_range(0), 1..1);
        assert_eq!(list.row_len(0), 0);
        assert_eq!(list.row_len(1), 3);
        let row = list.elements_at(1).unwrap();
        let row = row.as_opt::<PrimitiveArray>().unwrap();
        assert_eq!(row.as_slice::<i32>(), &[1, 2, 3]);
    }

    #[test]
    fn test_null_rows() {
        let list = ListArray::from_iter_opt_slow(
            [Some(vec![1i32]), None, Some(vec![])],
            Arc::new(I32.into()),
        )
        .unwrap();

        assert_eq!(
            list.dtype(),
            &DType::List(Arc::new(I32.into()), Nullability::Nullable)
        );
        assert!(list.scalar_at(1).unwrap().is_null());
        assert_eq!(list.scalar_at(2).unwrap().as_list().len(), Some(0));
    }

    #[test]
    fn test_invalid_offsets() {
        let elements = PrimitiveArray::from_iter([1i32, 2]).into_array();
        assert!(
            ListArray::try_new(elements.clone(), buffer![0u64, 3], Validity::NonNullable).is_err()
        );
        assert!(
            ListArray::try_new(elements.clone(), jagged_buffer::Buffer::empty(), Validity::NonNullable)
                .is_err()
        );
        assert!(
            ListArray::try_new(
                elements,
                buffer![0u64, 1, 2],
                Validity::from_iter([true, false, true])
            )
            .is_err()
        );
    }
}
