use std::any::Any;
use std::ops::Range;
use std::sync::Arc;

use jagged_dtype::DType;
use jagged_error::JaggedResult;
use jagged_scalar::Scalar;

use crate::builders::{ArrayBuilderExt, builder_with_capacity};
use crate::compute::TakeRangesFn;
use crate::validity::Validity;
use crate::{Array, ArrayRef, EncodingId, IntoArray};

/// A single scalar repeated `len` times.
#[derive(Clone, Debug)]
pub struct ConstantArray {
    scalar: Scalar,
    len: usize,
}

impl ConstantArray {
    pub const ID: EncodingId = EncodingId::new_ref("jagged.constant");

    pub fn new<S>(scalar: S, len: usize) -> Self
    where
        S: Into<Scalar>,
    {
        Self {
            scalar: scalar.into(),
            len,
        }
    }

    /// Returns the [`Scalar`] value of this constant array.
    pub fn scalar(&self) -> &Scalar {
        &self.scalar
    }

    /// Materialises the constant into the default encoding of its dtype.
    pub fn to_canonical(&self) -> JaggedResult<ArrayRef> {
        let mut builder = builder_with_capacity(self.scalar.dtype(), self.len);
        for _ in 0..self.len {
            builder.append_scalar(&self.scalar)?;
        }
        Ok(builder.finish())
    }
}

impl Array for ConstantArray {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn to_array(&self) -> ArrayRef {
        self.clone().into_array()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn dtype(&self) -> &DType {
        self.scalar.dtype()
    }

    fn encoding(&self) -> EncodingId {
        Self::ID
    }

    fn validity(&self) -> Validity {
        if self.scalar.is_null() {
            Validity::AllInvalid
        } else {
            Validity::from_nullability(self.scalar.dtype().nullability())
        }
    }

    fn valid_scalar_at(&self, _index: usize) -> JaggedResult<Scalar> {
        Ok(self.scalar.clone())
    }

    fn take_ranges_fn(&self) -> Option<&dyn TakeRangesFn> {
        Some(self)
    }
}

impl TakeRangesFn for ConstantArray {
    fn take_ranges(&self, ranges: &[Range<usize>]) -> JaggedResult<ArrayRef> {
        let len = ranges.iter().map(|r| r.len()).sum();
        Ok(ConstantArray::new(self.scalar.clone(), len).into_array())
    }
}

impl IntoArray for ConstantArray {
    fn into_array(self) -> ArrayRef {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jagged_dtype::{DType, Nullability, PType};
    use jagged_scalar::Scalar;

    use crate::Array;
    use crate::arrays::{ConstantArray, ListArray, PrimitiveArray};

    #[test]
    fn canonical_primitive() {
        let constant = ConstantArray::new(7i16, 3);
        let canonical = constant.to_canonical().unwrap();
        let primitive = canonical.as_opt::<PrimitiveArray>().unwrap();
        assert_eq!(primitive.as_slice::<i16>(), &[7, 7, 7]);
        assert!(!primitive.dtype().is_nullable());
    }

    #[test]
    fn canonical_list() {
        let element_dtype = Arc::new(DType::Primitive(PType::U8, Nullability::NonNullable));
        let row = Scalar::list(
            element_dtype,
            vec![1u8.into(), 2u8.into()],
            Nullability::NonNullable,
        );
        let constant = ConstantArray::new(row.clone(), 2);
        let canonical = constant.to_canonical().unwrap();
        let list = canonical.as_opt::<ListArray>().unwrap();
        assert_eq!(list.offsets().as_slice(), &[0, 2, 4]);
        assert_eq!(list.scalar_at(1).unwrap(), row);
    }

    #[test]
    fn null_constant() {
        let constant = ConstantArray::new(Scalar::null(DType::Utf8(Nullability::Nullable)), 2);
        assert!(!constant.is_valid(0).unwrap());
        assert!(constant.scalar_at(1).unwrap().is_null());
        assert_eq!(constant.to_canonical().unwrap().len(), 2);
    }
}
