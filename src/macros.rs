/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Object keys may be any literal; anything else falls back to
/// [`classify`](crate::classify), so every [`Human`](crate::Human) type can
/// be spliced in.
///
/// ```rust
/// use serde_human::{human, Value};
///
/// let value = human!({ "name": "Alice", "tags": ["a", "b"], "manager": null });
/// let map = value.as_map().unwrap();
/// assert_eq!(map.get_str("name"), Some(&Value::from("Alice")));
/// assert_eq!(map.get_str("manager"), Some(&Value::Null));
/// ```
#[macro_export]
macro_rules! human {
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
        $crate::Value::Seq(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Seq(vec![$($crate::human!($elem)),*])
    };

    ({}) => {
        $crate::Value::Map($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::Map::new();
        $(
            map.insert($key, $crate::human!($value));
        )*
        $crate::Value::Map(map)
    }};

    ($e:expr) => {
        $crate::classify(&$e)
    };
}
