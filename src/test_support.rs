use crate::document;
use serde_json::Value as Json;

/// Run the filter and parse its output back into JSON for structural asserts.
pub(crate) fn transform_to_json(yaml: &str) -> Json {
    let output = document::transform(yaml).unwrap();
    serde_json::from_str(&output).unwrap()
}

/// The `storage.files[index]` entry of filtered output.
pub(crate) fn file_entry(json: &Json, index: usize) -> &Json {
    &json["storage"]["files"][index]
}

/// Keys of a YAML mapping, in document order.
pub(crate) fn mapping_keys(value: &serde_yaml::Value) -> Vec<String> {
    value
        .as_mapping()
        .unwrap()
        .keys()
        .map(|key| key.as_str().unwrap().to_string())
        .collect()
}
