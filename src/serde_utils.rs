/// Serde utility functions for common patterns
use serde::Deserializer;
use std::fmt;

/// Deserialize an optional integer that may arrive as a JSON number or as a
/// numeric string.
///
/// Web clients commonly send `<select>` values as strings (`"3"`), so ids and
/// difficulty scores accept both forms.
///
/// - Missing field or `null` → `None`
/// - `3` or `"3"` → `Some(3)`
/// - Anything else → deserialization error
///
/// Usage:
/// ```ignore
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Example {
///     #[serde(default, deserialize_with = "crate::serde_utils::lenient_int")]
///     category: Option<i64>,
/// }
/// ```
pub fn lenient_int<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientIntVisitor;

    impl<'de> serde::de::Visitor<'de> for LenientIntVisitor {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(LenientIntVisitor)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(v))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            i64::try_from(v)
                .map(Some)
                .map_err(|_| E::custom(format!("integer {} out of range", v)))
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            v.trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
        }
    }

    de.deserialize_option(LenientIntVisitor)
}
