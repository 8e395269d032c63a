use super::classes::*;
use super::fixtures::*;
use crate::Json;

fn json() -> Json {
    Json::builder()
        .pretty_printing()
        .with_constructor_adapters(false)
        .build()
}

#[test]
fn singleton_data() {
    assert_eq!(json().to_string(&SingletonData).unwrap(), "{}");
}

#[test]
fn primitive_data() {
    let json = json();
    assert_eq!(json.to_string(&boolean_data_object()).unwrap(), TO_JSON_BOOLEAN_DATA_JSON);
    assert_eq!(json.to_string(&double_data_object()).unwrap(), TO_JSON_DOUBLE_DATA_JSON);
    assert_eq!(json.to_string(&int_data_object()).unwrap(), TO_JSON_INT_DATA_JSON);
    assert_eq!(json.to_string(&long_data_object()).unwrap(), TO_JSON_LONG_DATA_JSON);
    assert_eq!(json.to_string(&string_data_object()).unwrap(), TO_JSON_STRING_DATA_JSON);
}

#[test]
fn object_data() {
    assert_eq!(json().to_string(&object_data_object()).unwrap(), TO_JSON_OBJECT_DATA_JSON);
}

#[test]
fn generic_data() {
    assert_eq!(json().to_string(&generic_data_object()).unwrap(), GENERIC_DATA_JSON);
}

#[test]
fn non_constructor_data() {
    assert_eq!(
        json().to_string(&non_constructor_data_object()).unwrap(),
        TO_JSON_NON_CONSTRUCTOR_DATA_JSON
    );
}

#[test]
fn serializable_name_data() {
    let value = serializable_name_data_object();
    assert_eq!(
        json().to_string_pretty(&value).unwrap(),
        r#"{
  "nonnull_string": "value",
  "bar": "value"
}"#
    );
}

#[test]
fn transient_string_data() {
    let json = json();
    assert_eq!(
        json.to_string(&to_json_transient_string_data_object()).unwrap(),
        TO_JSON_TRANSIENT_DATA_JSON
    );
    // Writing does not need the defaults.
    assert_eq!(
        json.to_string(&to_json_invalid_transient_string_data_object()).unwrap(),
        TO_JSON_TRANSIENT_DATA_JSON
    );
}

#[test]
fn compact_and_null_fields() {
    let value = string_data_object();

    let json = Json::builder().with_constructor_adapters(false).build();
    assert_eq!(
        json.to_string(&value).unwrap(),
        r#"{"nonnull_string":"foo","nullable_string1":"bar"}"#
    );

    let json = Json::builder()
        .with_constructor_adapters(false)
        .serialize_nulls()
        .build();
    assert_eq!(
        json.to_string(&value).unwrap(),
        r#"{"nonnull_string":"foo","nullable_string1":"bar","nullable_string2":null,"missing_string":null}"#
    );
}

#[test]
fn to_value() {
    let value = json().to_value(&Point { x: 1, y: Some(2) }).unwrap();
    assert_eq!(value, serde_json::json!({ "x": 1, "y": 2 }));
}

#[test]
fn codec_and_list_fields() {
    let palette = Palette {
        primary: Color::Green,
        accents: vec![Color::Red],
    };
    let json = Json::new();

    let output = json.to_string(&palette).unwrap();
    assert_eq!(output, r#"{"primary":"Green","accents":["Red"]}"#);
    assert_eq!(json.from_str::<Palette>(&output).unwrap(), Some(palette));
}

#[test]
fn recursive_data() {
    let tree = Tree {
        name: "a".into(),
        children: vec![Tree {
            name: "b".into(),
            children: Vec::new(),
        }],
    };
    assert_eq!(
        Json::new().to_string(&tree).unwrap(),
        r#"{"name":"a","children":[{"name":"b","children":[]}]}"#
    );
}
