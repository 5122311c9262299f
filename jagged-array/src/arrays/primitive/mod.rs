mod compute;

use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use jagged_buffer::{Buffer, BufferMut};
use jagged_dtype::{DType, NativePType, Nullability, PType, match_each_native_ptype};
use jagged_error::{JaggedExpect, JaggedResult, jagged_panic};
use jagged_scalar::{PValue, Scalar};

use crate::compute::TakeRangesFn;
use crate::validity::Validity;
use crate::{Array, ArrayRef, EncodingId, IntoArray};

/// A flat array of one native type, stored in a shared [`Buffer`].
#[derive(Clone)]
pub struct PrimitiveArray {
    dtype: DType,
    ptype: PType,
    len: usize,
    // Always a `Buffer<T>` where `T::PTYPE == ptype`.
    buffer: Arc<dyn Any + Send + Sync>,
    validity: Validity,
}

impl PrimitiveArray {
    pub const ID: EncodingId = EncodingId::new_ref("jagged.primitive");

    pub fn try_new<T: NativePType>(buffer: Buffer<T>, validity: Validity) -> JaggedResult<Self> {
        validity.check_len(buffer.len())?;
        Ok(Self {
            dtype: DType::Primitive(T::PTYPE, validity.nullability()),
            ptype: T::PTYPE,
            len: buffer.len(),
            buffer: Arc::new(buffer),
            validity,
        })
    }

    /// Creates a primitive array, panicking if `validity` does not match the buffer length.
    pub fn new<T: NativePType>(buffer: impl Into<Buffer<T>>, validity: Validity) -> Self {
        Self::try_new(buffer.into(), validity).jagged_expect("PrimitiveArray::new")
    }

    pub fn empty<T: NativePType>(nullability: Nullability) -> Self {
        Self::new(Buffer::<T>::empty(), Validity::from_nullability(nullability))
    }

    /// Create a new nullable array from an iterator of optional values.
    pub fn from_option_iter<T: NativePType, I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut values = BufferMut::with_capacity(iter.size_hint().0);
        let mut validity = Vec::with_capacity(iter.size_hint().0);
        for value in iter {
            values.push(value.unwrap_or_default());
            validity.push(value.is_some());
        }
        Self::new(values.freeze(), Validity::from_iter(validity).into_nullable())
    }

    pub fn ptype(&self) -> PType {
        self.ptype
    }

    /// Returns the values buffer, which must hold `T`.
    pub fn buffer<T: NativePType>(&self) -> &Buffer<T> {
        if T::PTYPE != self.ptype {
            jagged_panic!(
                "Attempted to get buffer of type {} from array of type {}",
                T::PTYPE,
                self.ptype
            );
        }
        self.buffer
            .downcast_ref::<Buffer<T>>()
            .jagged_expect("buffer matches ptype")
    }

    pub fn as_slice<T: NativePType>(&self) -> &[T] {
        self.buffer::<T>().as_slice()
    }

    /// The optional value at each index, read as `i64`, saturating large unsigned values.
    ///
    /// Returns `None` for floating point arrays.
    pub fn to_i64_saturating(&self) -> Option<Vec<Option<i64>>> {
        if !self.ptype.is_int() {
            return None;
        }
        let values = (0..self.len)
            .map(|i| {
                self.validity.is_valid(i).then(|| {
                    let pvalue = match_each_native_ptype!(self.ptype, |$P| {
                        PValue::from(self.as_slice::<$P>()[i])
                    });
                    pvalue.as_i64_saturating().unwrap_or_default()
                })
            })
            .collect();
        Some(values)
    }
}

impl<T: NativePType> FromIterator<T> for PrimitiveArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Buffer<T>>(), Validity::NonNullable)
    }
}

impl Debug for PrimitiveArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match_each_native_ptype!(self.ptype, |$P| {
            f.debug_struct("PrimitiveArray")
                .field("dtype", &self.dtype)
                .field("values", self.buffer::<$P>())
                .field("validity", &self.validity)
                .finish()
        })
    }
}

impl Array for PrimitiveArray {
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
        &self.dtype
    }

    fn encoding(&self) -> EncodingId {
        Self::ID
    }

    fn validity(&self) -> Validity {
        self.validity.clone()
    }

    fn valid_scalar_at(&self, index: usize) -> JaggedResult<Scalar> {
        Ok(match_each_native_ptype!(self.ptype, |$P| {
            Scalar::primitive(self.as_slice::<$P>()[index], self.dtype.nullability())
        }))
    }

    fn take_ranges_fn(&self) -> Option<&dyn TakeRangesFn> {
        Some(self)
    }
}

impl IntoArray for PrimitiveArray {
    fn into_array(self) -> ArrayRef {
        Arc::new(self)
    }
}
