//! Incremental construction of arrays, one value at a time.

mod bool;
mod lazy_validity_builder;
mod list;
mod null;
mod primitive;
mod utf8;

use std::any::Any;

pub use bool::*;
use jagged_dtype::{DType, match_each_native_ptype};
use jagged_error::{JaggedResult, jagged_bail, jagged_err};
use jagged_scalar::{BoolScalar, ListScalar, PrimitiveScalar, Scalar, Utf8Scalar};
pub use list::*;
pub use null::*;
pub use primitive::*;
pub use utf8::*;

use crate::ArrayRef;

pub trait ArrayBuilder: Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn dtype(&self) -> &DType;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a "null" value to the array.
    fn append_null(&mut self) {
        self.append_nulls(1)
    }

    /// Appends n "null" values to the array.
    fn append_nulls(&mut self, n: usize);

    /// Constructs an Array from the builder components, resetting the builder.
    fn finish(&mut self) -> ArrayRef;
}

/// Construct a new empty builder for the given dtype.
pub fn builder_with_capacity(dtype: &DType, capacity: usize) -> Box<dyn ArrayBuilder> {
    match dtype {
        DType::Null => Box::new(NullBuilder::new()),
        DType::Bool(n) => Box::new(BoolBuilder::with_capacity(*n, capacity)),
        DType::Primitive(ptype, n) => {
            match_each_native_ptype!(ptype, |$P| {
                Box::new(PrimitiveBuilder::<$P>::with_capacity(*n, capacity))
            })
        }
        DType::Utf8(n) => Box::new(Utf8Builder::with_capacity(*n, capacity)),
        DType::List(dtype, n) => Box::new(ListBuilder::with_capacity(dtype.clone(), *n, capacity)),
    }
}

pub trait ArrayBuilderExt: ArrayBuilder {
    /// A generic function to append a scalar to the builder.
    fn append_scalar(&mut self, scalar: &Scalar) -> JaggedResult<()> {
        if !scalar.dtype().eq_ignore_nullability(self.dtype()) {
            jagged_bail!(
                "Builder has dtype {}, scalar has {}",
                self.dtype(),
                scalar.dtype()
            )
        }
        if scalar.is_null() && !self.dtype().is_nullable() {
            jagged_bail!("Cannot append null to non-nullable builder of {}", self.dtype())
        }
        match scalar.dtype() {
            DType::Null => self
                .as_any_mut()
                .downcast_mut::<NullBuilder>()
                .ok_or_else(|| jagged_err!("Cannot append null scalar to non-null builder"))?
                .append_null(),
            DType::Bool(_) => self
                .as_any_mut()
                .downcast_mut::<BoolBuilder>()
                .ok_or_else(|| jagged_err!("Cannot append bool scalar to non-bool builder"))?
                .append_option(BoolScalar::try_from(scalar)?.value()),
            DType::Primitive(ptype, ..) => {
                match_each_native_ptype!(ptype, |$P| {
                    self
                    .as_any_mut()
                    .downcast_mut::<PrimitiveBuilder<$P>>()
                    .ok_or_else(|| {
                        jagged_err!("Cannot append primitive scalar to non-primitive builder")
                    })?
                    .append_option(PrimitiveScalar::try_from(scalar)?.typed_value::<$P>())
                })
            }
            DType::Utf8(_) => self
                .as_any_mut()
                .downcast_mut::<Utf8Builder>()
                .ok_or_else(|| jagged_err!("Cannot append utf8 scalar to non-utf8 builder"))?
                .append_option(Utf8Scalar::try_from(scalar)?.value()),
            DType::List(..) => self
                .as_any_mut()
                .downcast_mut::<ListBuilder>()
                .ok_or_else(|| jagged_err!("Cannot append list scalar to non-list builder"))?
                .append_value(ListScalar::try_from(scalar)?)?,
        }
        Ok(())
    }
}

impl<T: ?Sized + ArrayBuilder> ArrayBuilderExt for T {}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jagged_dtype::{DType, Nullability, PType};
    use jagged_scalar::Scalar;
    use rstest::rstest;

    use crate::builders::{ArrayBuilderExt, builder_with_capacity};

    #[rstest]
    #[case(vec![Scalar::from(Some(1i64)), Scalar::from(None::<i64>)])]
    #[case(vec![Scalar::from(Some("a")), Scalar::from(None::<&str>)])]
    #[case(vec![Scalar::bool(true, Nullability::Nullable), Scalar::null(DType::Bool(Nullability::Nullable))])]
    #[case(vec![
        Scalar::list(
            Arc::new(PType::U16.into()),
            vec![3u16.into()],
            Nullability::Nullable,
        ),
        Scalar::null(DType::List(Arc::new(PType::U16.into()), Nullability::Nullable)),
    ])]
    fn builds_scalars_back(#[case] scalars: Vec<Scalar>) {
        let mut builder = builder_with_capacity(scalars[0].dtype(), scalars.len());
        for scalar in &scalars {
            builder.append_scalar(scalar).unwrap();
        }
        let array = builder.finish();
        assert_eq!(array.len(), scalars.len());
        for (i, scalar) in scalars.iter().enumerate() {
            assert_eq!(&array.scalar_at(i).unwrap(), scalar);
        }
    }

    #[test]
    fn rejects_mismatched_dtype() {
        let mut builder = builder_with_capacity(&PType::I32.into(), 1);
        assert!(builder.append_scalar(&Scalar::from(1i64)).is_err());
        assert!(builder.append_scalar(&Scalar::from(None::<i32>)).is_err());
        assert!(builder.append_scalar(&Scalar::from(1i32)).is_ok());
    }
}
