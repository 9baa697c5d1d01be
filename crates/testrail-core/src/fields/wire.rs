//! serde adapters for the string-typed option values of field definitions.
//!
//! The server transmits every option value as a string regardless of its
//! native type: absent scalars ride as `""`, checkbox booleans as `"0"/"1"`
//! or `"true"/"false"`, numbers stringified, and item lists in the
//! numbered-line form of [`item_list`](super::item_list). These modules keep
//! all of those conversions at the codec boundary.

/// `Option<T> <-> String` where `None` rides as the empty string.
pub(crate) mod opt_str {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(value) => serializer.collect_str(value),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        if text.is_empty() {
            return Ok(None);
        }
        text.parse().map(Some).map_err(Error::custom)
    }
}

/// `T <-> String` for required stringified scalars.
pub(crate) mod int_str {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(Error::custom)
    }
}

/// `bool <-> String` accepting `"0"/"1"/"true"/"false"` in any casing and
/// writing lowercase `"true"/"false"`.
pub(crate) mod bool_str {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let text = String::deserialize(deserializer)?;
        match text.to_ascii_lowercase().as_str() {
            "0" | "false" => Ok(false),
            "1" | "true" => Ok(true),
            _ => Err(Error::invalid_value(
                Unexpected::Str(&text),
                &"\"0\", \"1\", \"true\" or \"false\"",
            )),
        }
    }
}

/// `Vec<String> <-> String` in the numbered-line item form.
pub(crate) mod items {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::super::item_list;

    pub fn serialize<S: Serializer>(items: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&item_list::encode(items))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<String>, D::Error> {
        let text = String::deserialize(deserializer)?;
        item_list::decode(&text).ok_or_else(|| {
            Error::custom("malformed item list: expected lines numbered \"1, ...\", \"2, ...\"")
        })
    }
}
