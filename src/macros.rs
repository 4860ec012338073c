/// Builds a [`PlistValue`](crate::PlistValue) from a JSON-like literal.
///
/// Object keys must be string literals. Any other expression goes through
/// `PlistValue::from`, so annotated strings, numbers and nested values can be
/// spliced in directly.
///
/// # Examples
///
/// ```rust
/// use serde_pbxproj::{plist, CommentedString};
///
/// let file = CommentedString::with_comment("ABC123", "main.swift");
/// let phase = plist!({
///     "isa": "PBXSourcesBuildPhase",
///     "buildActionMask": 2147483647u32,
///     "files": [file],
///     "runOnlyForDeploymentPostprocessing": 0,
/// });
/// assert!(phase.is_dictionary());
/// ```
#[macro_export]
macro_rules! plist {
    // Handle empty array
    ([]) => {
        $crate::PlistValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::PlistValue::Array(vec![$($crate::plist!($elem)),*])
    };

    // Handle empty dictionary
    ({}) => {
        $crate::PlistValue::Dictionary($crate::PlistMap::new())
    };

    // Handle non-empty dictionary
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut dict = $crate::PlistMap::new();
        $(
            dict.insert($key, $crate::plist!($value));
        )*
        $crate::PlistValue::Dictionary(dict)
    }};

    ($e:expr) => {
        $crate::PlistValue::from($e)
    };
}
