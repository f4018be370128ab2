//! Serde support, behind the `serde` feature.
//!
//! A map is serialized as a serde map, in ascending key order.
//! The node structure and the configuration are not part of the serialized form:
//! a deserialized map uses the default configuration.
use super::BTreeMap;
use serde::{
	de::{MapAccess, Visitor},
	Deserialize, Deserializer, Serialize, Serializer,
};
use std::{fmt, marker::PhantomData};

impl<K: Serialize, V: Serialize> Serialize for BTreeMap<K, V> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_map(self.iter())
	}
}

struct MapVisitor<K, V> {
	k: PhantomData<K>,
	v: PhantomData<V>,
}

impl<'de, K, V> Visitor<'de> for MapVisitor<K, V>
where
	K: Deserialize<'de> + Ord,
	V: Deserialize<'de>,
{
	type Value = BTreeMap<K, V>;

	fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str("a map")
	}

	fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
		let mut map = BTreeMap::new();
		while let Some((key, value)) = access.next_entry()? {
			map.insert(key, value);
		}

		Ok(map)
	}
}

impl<'de, K, V> Deserialize<'de> for BTreeMap<K, V>
where
	K: Deserialize<'de> + Ord,
	V: Deserialize<'de>,
{
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_map(MapVisitor {
			k: PhantomData,
			v: PhantomData,
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::BTreeMap;

	#[test]
	fn json() {
		let map: BTreeMap<String, u32> = [("b", 2), ("a", 1), ("c", 3)]
			.into_iter()
			.map(|(k, v)| (k.to_string(), v))
			.collect();

		let json = serde_json::to_string(&map).unwrap();
		assert_eq!(json, r#"{"a":1,"b":2,"c":3}"#);

		let back: BTreeMap<String, u32> = serde_json::from_str(&json).unwrap();
		assert_eq!(back, map);
	}
}
