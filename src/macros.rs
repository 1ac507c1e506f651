/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// ```rust
/// use utilkit::{value, Value};
///
/// let args = value!([ "2024-03-05", 1, false, "-" ]);
/// assert_eq!(args.as_array().map(Vec::len), Some(4));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Anything else goes through `From`
    ($s:expr) => {
        $crate::Value::from($s)
    };
}
