use std::sync::LazyLock;

use jagged_array::ArrayRef;
use jagged_array::aliases::hash_map::HashMap;
use jagged_error::{JaggedResult, jagged_err};

use crate::{ListEnumerate, ListSlice, ScalarFunction};

const FUNCTIONS: &[&'static dyn ScalarFunction] = &[&ListEnumerate, &ListSlice];

static FUNCTION_REGISTRY: LazyLock<HashMap<&'static str, &'static dyn ScalarFunction>> =
    LazyLock::new(|| FUNCTIONS.iter().map(|f| (f.name(), *f)).collect());

/// Looks up a registered function by name.
pub fn find_function(name: &str) -> Option<&'static dyn ScalarFunction> {
    FUNCTION_REGISTRY.get(name).copied()
}

/// The names of all registered functions, sorted.
pub fn function_names() -> Vec<&'static str> {
    let mut names = FUNCTION_REGISTRY.keys().copied().collect::<Vec<_>>();
    names.sort_unstable();
    names
}

/// Evaluates the function registered under `name` on `args`.
pub fn invoke_function(name: &str, args: &[ArrayRef]) -> JaggedResult<ArrayRef> {
    let function = find_function(name).ok_or_else(|| jagged_err!("Unknown function {}", name))?;
    log::debug!("Invoking {} on {} arguments", name, args.len());
    function.evaluate(args)
}

#[cfg(test)]
mod tests {
    use jagged_array::IntoArray;
    use jagged_array::arrays::PrimitiveArray;
    use jagged_error::JaggedError;

    use super::*;

    #[test]
    fn finds_registered_functions() {
        assert_eq!(function_names(), vec!["list_enumerate", "list_slice"]);
        for name in function_names() {
            assert_eq!(find_function(name).unwrap().name(), name);
        }
        assert!(find_function("list_reverse").is_none());
    }

    #[test]
    fn unknown_function() {
        let values = PrimitiveArray::from_iter([1u8]).into_array();
        let err = invoke_function("list_reverse", &[values]).unwrap_err();
        assert!(matches!(err, JaggedError::InvalidArgument(..)));
        assert!(err.to_string().starts_with("Unknown function list_reverse"));
    }
}
