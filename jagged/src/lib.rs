pub use jagged_array::*;
pub use {
    jagged_buffer as buffer, jagged_dtype as dtype, jagged_error as error, jagged_expr as expr,
    jagged_scalar as scalar,
};
