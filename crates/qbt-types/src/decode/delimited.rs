/// Splits a delimited string into its non-empty, trimmed segments.
///
/// An empty string yields an empty list, never `[""]`.
pub fn split_list(value: &str, separator: char) -> Vec<String> {
    value
        .split(separator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Joins items with a separator, the inverse of [`split_list`].
pub fn join_list<S: AsRef<str>>(items: &[S], separator: char) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(item.as_ref());
    }
    out
}

macro_rules! delimited_serde {
    ($name:ident, $sep:literal, $what:literal) => {
        #[doc = concat!("Serde adapter for ", $what, " lists joined by `", $sep, "`.")]
        pub mod $name {
            use serde::{Deserialize, Deserializer, Serializer};

            /// Encodes the list as a single delimited string.
            pub fn serialize<S: Serializer>(
                items: &[String],
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&super::join_list(items, $sep))
            }

            /// Decodes a delimited string; `null` is treated as empty.
            pub fn deserialize<'de, D: Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Vec<String>, D::Error> {
                let raw = Option::<String>::deserialize(deserializer)?;
                Ok(raw.map(|s| super::split_list(&s, $sep)).unwrap_or_default())
            }
        }
    };
}

delimited_serde!(comma_list, ',', "comma separated");
delimited_serde!(pipe_list, '|', "pipe separated");
