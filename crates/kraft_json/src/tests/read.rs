use super::classes::*;
use super::fixtures::*;
use crate::{AdapterError, ErrorKind, Json, JsonError};

fn json() -> Json {
    Json::builder()
        .pretty_printing()
        .with_constructor_adapters(false)
        .build()
}

fn json_with_default_primitive_values() -> Json {
    Json::builder()
        .pretty_printing()
        .with_constructor_adapters(true)
        .build()
}

fn read<T: kraft_reflect::info::Typed>(json: &Json, input: &str) -> T {
    json.from_str::<T>(input).unwrap().unwrap()
}

#[test]
fn singleton_data() {
    assert_eq!(read::<SingletonData>(&json(), "{}"), SingletonData);
}

#[test]
fn boolean_data() {
    assert_eq!(read::<BooleanData>(&json(), FROM_JSON_BOOLEAN_DATA_JSON), boolean_data_object());
}

#[test]
fn double_data() {
    assert_eq!(read::<DoubleData>(&json(), FROM_JSON_DOUBLE_DATA_JSON), double_data_object());
}

#[test]
fn int_data() {
    assert_eq!(read::<IntData>(&json(), FROM_JSON_INT_DATA_JSON), int_data_object());
}

#[test]
fn long_data() {
    assert_eq!(read::<LongData>(&json(), FROM_JSON_LONG_DATA_JSON), long_data_object());
}

#[test]
fn string_data() {
    assert_eq!(read::<StringData>(&json(), FROM_JSON_STRING_DATA_JSON), string_data_object());
}

#[test]
fn object_data() {
    assert_eq!(read::<ObjectData>(&json(), FROM_JSON_OBJECT_DATA_JSON), object_data_object());
}

#[test]
fn generic_data() {
    assert_eq!(
        read::<GenericData<BooleanData>>(&json(), GENERIC_DATA_JSON),
        generic_data_object()
    );
}

#[test]
fn non_constructor_data_ignores_computed_fields() {
    let json = json();
    assert_eq!(
        read::<NonConstructorData>(&json, FROM_JSON_NON_CONSTRUCTOR_DATA_JSON),
        non_constructor_data_object()
    );
    assert_eq!(
        read::<NonConstructorData>(&json, TO_JSON_NON_CONSTRUCTOR_DATA_JSON),
        non_constructor_data_object()
    );
}

#[test]
fn serializable_name_data() {
    assert_eq!(
        read::<SerializableNameData>(&json(), SERIALIZABLE_NAME_DATA_JSON),
        serializable_name_data_object()
    );
}

#[test]
fn serializable_name_alternate_data() {
    assert_eq!(
        read::<SerializableNameAlternateData>(&json(), SERIALIZABLE_NAME_ALTERNATE_DATA_JSON),
        serializable_name_alternate_data_object()
    );
}

#[test]
fn serializable_name_alternate_data_duplicate_value() {
    let err = json()
        .from_str::<SerializableNameAlternateData>(
            SERIALIZABLE_NAME_ALTERNATE_WITH_DUPLICATE_VALUE_DATA_JSON,
        )
        .unwrap_err();

    assert_eq!(
        err.as_adapter(),
        Some(&AdapterError::DuplicateField {
            class: "SerializableNameAlternateData",
            param: "nullable_string1",
        })
    );
    assert_eq!(err.kind(), ErrorKind::Data);
    assert_eq!(
        err.to_string(),
        "SerializableNameAlternateData declares multiple JSON fields named nullable_string1"
    );
}

#[test]
fn duplicate_key_holding_null() {
    let err = json()
        .from_str::<StringData>(r#"{"nonnull_string":"a","nullable_string1":null,"nullable_string1":"b"}"#)
        .unwrap_err();
    assert!(matches!(err.as_adapter(), Some(AdapterError::DuplicateField { .. })));
}

#[test]
fn string_data_with_defaults() {
    assert_eq!(
        read::<StringDataWithDefaults>(&json(), STRING_DATA_WITH_DEFAULTS_JSON),
        string_data_with_defaults_object()
    );
}

#[test]
fn json_values_win_over_defaults() {
    let value = read::<StringDataWithDefaults>(
        &json(),
        r#"{"nonnull_string":"a","nullable_string":null}"#,
    );
    assert_eq!(
        value,
        StringDataWithDefaults {
            nonnull_string: "a".into(),
            nullable_string: None,
        }
    );
}

#[test]
fn default_primitive_data_disabled() {
    let err = json()
        .from_str::<DefaultPrimitiveData>(FROM_JSON_DEFAULT_PRIMITIVE_DATA_JSON)
        .unwrap_err();

    assert_eq!(
        err.as_adapter(),
        Some(&AdapterError::MissingParameter {
            class: "DefaultPrimitiveData",
            param: "nonnull_boolean",
        })
    );
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn default_primitive_data_enabled() {
    assert_eq!(
        read::<DefaultPrimitiveData>(
            &json_with_default_primitive_values(),
            FROM_JSON_DEFAULT_PRIMITIVE_DATA_JSON
        ),
        from_json_default_primitive_data_object()
    );
}

#[test]
fn default_primitive_values_do_not_cover_objects() {
    let err = json_with_default_primitive_values()
        .from_str::<DefaultPrimitiveData>(r#"{"nonnull_int":3}"#)
        .unwrap_err();
    assert!(matches!(
        err.as_adapter(),
        Some(AdapterError::MissingParameter { param: "string", .. })
    ));
}

#[test]
fn transient_string_data() {
    assert_eq!(
        read::<TransientStringData>(&json(), FROM_JSON_TRANSIENT_DATA_JSON),
        from_json_transient_string_data_object()
    );
}

#[test]
fn invalid_transient_string_data() {
    let err = json()
        .from_str::<InvalidTransientStringData>(FROM_JSON_TRANSIENT_DATA_JSON)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Transient constructor parameters must provide a default value. \
         (transient_string1, transient_string2) in InvalidTransientStringData"
    );
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn invalid_parameters_fail_before_parsing() {
    let err = json()
        .from_str::<InvalidTransientStringData>("not json")
        .unwrap_err();
    assert!(matches!(err, JsonError::Adapter(AdapterError::InvalidParameters { .. })));
}

#[test]
fn unnamed_parameter() {
    let err = json().from_str::<UnnamedData>(r#"{"label":"a"}"#).unwrap_err();
    assert_eq!(
        err.as_adapter(),
        Some(&AdapterError::InvalidParameters {
            class: "UnnamedData",
            params: vec!["#0".into()],
        })
    );
    assert!(err.to_string().ends_with("(#0) in UnnamedData"));

    let value = read::<UnnamedData>(&json_with_default_primitive_values(), r#"{"label":"a"}"#);
    assert_eq!(value, UnnamedData { count: 0, label: "a".into() });
}

#[test]
fn null_document() {
    assert_eq!(json().from_str::<StringData>("null").unwrap(), None);
    assert_eq!(json().from_str::<StringData>("  null ").unwrap(), None);
}

#[test]
fn null_for_non_nullable_parameter() {
    let err = json()
        .from_str::<StringData>(r#"{"nonnull_string":null}"#)
        .unwrap_err();

    assert_eq!(
        err.as_adapter(),
        Some(&AdapterError::NullParameter {
            class: "StringData",
            param: "nonnull_string",
        })
    );
    assert_eq!(err.kind(), ErrorKind::Data);
}

#[test]
fn unknown_keys_are_skipped() {
    let value = read::<StringData>(
        &json(),
        r#"{"extra":{"deep":[1,{"x":null}]},"nonnull_string":"foo","more":true}"#,
    );
    assert_eq!(value.nonnull_string, "foo");
    assert_eq!(value.nullable_string1, None);
}

#[test]
fn point() {
    let json = json();
    assert_eq!(read::<Point>(&json, r#"{"x":5}"#), Point { x: 5, y: None });

    let err = json.from_str::<Point>("{}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("`x`"));
}

#[test]
fn malformed_input() {
    let json = json();

    let err = json.from_str::<IntData>(r#"{"nonnull_int":"1"}"#).unwrap_err();
    assert!(matches!(err, JsonError::Json(_)));
    assert_eq!(err.kind(), ErrorKind::Data);

    let err = json.from_str::<IntData>(r#"{"nonnull_int":1"#).unwrap_err();
    assert!(matches!(err, JsonError::Json(_)));

    let err = json.from_str::<IntData>(r#"{"nonnull_int":1} []"#).unwrap_err();
    assert!(matches!(err, JsonError::Json(_)));
}

#[test]
fn recursive_data() {
    let input = r#"{"name":"root","children":[{"name":"leaf","children":[]}]}"#;
    let tree = read::<Tree>(&json(), input);

    assert_eq!(
        tree,
        Tree {
            name: "root".into(),
            children: vec![Tree {
                name: "leaf".into(),
                children: Vec::new(),
            }],
        }
    );
}

#[test]
fn custom_codec_fields() {
    let palette = read::<Palette>(&json(), r#"{"primary":"Red","accents":["Green","Red"]}"#);
    assert_eq!(
        palette,
        Palette {
            primary: Color::Red,
            accents: vec![Color::Green, Color::Red],
        }
    );
}
