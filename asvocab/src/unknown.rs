//! Pass-through handling for values no property or codec claims. Pure and stateless, nested maps
//! and arrays are walked recursively so nothing below an unknown value is shared with the input.

use serde_json::Value;

pub fn deserialize(raw: &Value) -> Value {
	normalize(raw)
}

pub fn serialize(value: &Value) -> Value {
	normalize(value)
}

fn normalize(value: &Value) -> Value {
	match value {
		Value::Array(arr) => Value::Array(arr.iter().map(normalize).collect()),
		Value::Object(map) => Value::Object(
			map.iter()
				.map(|(k, v)| (k.clone(), normalize(v)))
				.collect()
		),
		x => x.clone(),
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	#[test]
	fn nested_values_survive_unchanged() {
		let raw = json!({
			"a": [1, 2.5, {"b": null, "c": [true, "x"]}],
			"d": {"e": {"f": "g"}},
		});
		let stored = super::deserialize(&raw);
		assert_eq!(stored, raw);
		assert_eq!(super::serialize(&stored), raw);
	}

	#[test]
	fn scalars_pass_through() {
		for raw in [json!(null), json!(false), json!(12), json!("hello")] {
			assert_eq!(super::deserialize(&raw), raw);
		}
	}
}
