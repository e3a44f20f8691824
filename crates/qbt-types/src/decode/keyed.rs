//! Normalizes collections that arrive either keyed by name or as an array.
//!
//! `torrents/categories` returns `{"Movies": {"savePath": "/x"}}` while other
//! endpoints embed the name in each record. Both decode to the same
//! `Vec<T>`, with the object key injected through [`Keyed::set_key`].

use std::fmt;
use std::marker::PhantomData;

use serde::Deserializer;
use serde::de::{self, DeserializeOwned, MapAccess, SeqAccess, Visitor};

/// A record whose identifier may live outside of it on the wire.
pub trait Keyed {
    /// Stores the object key the record was found under.
    fn set_key(&mut self, key: String);
}

/// Decodes an object keyed by name, an array, or `null` into a list.
///
/// Use as `#[serde(deserialize_with = "keyed::deserialize")]`. The order of the
/// object form follows the document but callers should not rely on it.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Keyed,
{
    deserializer.deserialize_any(KeyedVisitor(PhantomData))
}

/// Decodes a whole response body in either keyed shape.
pub fn from_slice<T>(bytes: &[u8]) -> Result<Vec<T>, serde_json::Error>
where
    T: DeserializeOwned + Keyed,
{
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let list = deserialize(&mut de)?;
    de.end()?;
    Ok(list)
}

struct KeyedVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for KeyedVisitor<T>
where
    T: DeserializeOwned + Keyed,
{
    type Value = Vec<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object keyed by name or an array of records")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<T>()? {
            out.push(item);
        }
        Ok(out)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, mut item)) = map.next_entry::<String, T>()? {
            item.set_key(key);
            out.push(item);
        }
        Ok(out)
    }
}
