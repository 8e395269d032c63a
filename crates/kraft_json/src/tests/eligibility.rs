use kraft_reflect::info::Typed;

use super::classes::*;
use crate::adapter::TypeAdapterFactory;
use crate::constructor::ConstructorAdapterFactory;
use crate::{AdapterError, ErrorKind, Json};

fn json() -> Json {
    Json::builder().with_constructor_adapters(false).build()
}

fn creates<T: Typed>(json: &Json) -> bool {
    ConstructorAdapterFactory::new(false)
        .create(json, T::type_info())
        .unwrap()
        .is_some()
}

#[test]
fn data_classes_are_handled() {
    let json = json();
    assert!(creates::<StringData>(&json));
    assert!(creates::<SingletonData>(&json));
    assert!(creates::<AbstractData>(&json));
    assert!(creates::<SealedData>(&json));
}

#[test]
fn other_classes_are_declined() {
    let json = json();
    assert!(!creates::<LocalData>(&json));
    assert!(!creates::<InterfaceData>(&json));
    assert!(!creates::<EnumLikeData>(&json));
    assert!(!creates::<PlainData>(&json));
    assert!(!creates::<Color>(&json));
    assert!(!creates::<String>(&json));
    assert!(!creates::<Option<StringData>>(&json));
}

#[test]
fn declined_classes_fall_back_to_structural() {
    let json = json();
    let value = PlainData { value: "x".into() };

    assert_eq!(json.to_string(&value).unwrap(), r#"{"value":"x"}"#);

    let err = json.from_str::<PlainData>(r#"{"value":"x"}"#).unwrap_err();
    assert!(matches!(err.as_adapter(), Some(AdapterError::Unsupported(_))));

    let err = json.from_str::<LocalData>(r#"{"value":"x"}"#).unwrap_err();
    assert!(matches!(err.as_adapter(), Some(AdapterError::Unsupported(_))));
}

#[test]
fn enums_use_their_codec() {
    let json = json();
    assert_eq!(json.to_string(&Color::Red).unwrap(), r#""Red""#);
    assert_eq!(json.from_str::<Color>(r#""Green""#).unwrap(), Some(Color::Green));
}

#[test]
fn inner_class() {
    let json = json();
    let err = json.get_adapter(InnerData::type_info()).err().unwrap();

    assert_eq!(err, AdapterError::InnerClass("kraft_json::tests::classes::InnerData"));
    assert_eq!(
        err.to_string(),
        "Cannot serialize inner class kraft_json::tests::classes::InnerData"
    );
    assert_eq!(err.kind(), ErrorKind::Configuration);

    // Nothing is cached for the failed type.
    assert!(json.get_adapter(InnerData::type_info()).is_err());
    assert!(json.to_string(&InnerData { value: "x".into() }).is_err());
}

#[test]
fn abstract_class() {
    let json = json();

    let err = json.from_str::<AbstractData>(r#"{"value":"x"}"#).unwrap_err();
    assert_eq!(err.to_string(), "Cannot deserialize abstract class 'AbstractData'");
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let value = AbstractData { value: "x".into() };
    assert_eq!(json.to_string(&value).unwrap(), r#"{"value":"x"}"#);
}

#[test]
fn sealed_class() {
    let json = json();

    let err = json.from_str::<SealedData>(r#"{"value":"x"}"#).unwrap_err();
    assert_eq!(err.to_string(), "Cannot deserialize sealed class 'SealedData'");

    let value = SealedData { value: "x".into() };
    assert_eq!(json.to_string(&value).unwrap(), r#"{"value":"x"}"#);
}

#[test]
fn clashing_json_names() {
    let err = json().get_adapter(Clashing::type_info()).err().unwrap();
    assert_eq!(err, AdapterError::DuplicateName { class: "Clashing", name: "b" });
}

#[test]
fn name_repeated_by_one_parameter() {
    let json = json();
    assert!(creates::<SelfAliased>(&json));

    assert_eq!(
        json.from_str::<SelfAliased>(r#"{"foo":1}"#).unwrap(),
        Some(SelfAliased { value: 1 })
    );
    assert_eq!(
        json.from_str::<SelfAliased>(r#"{"bar":2}"#).unwrap(),
        Some(SelfAliased { value: 2 })
    );

    let err = json.from_str::<SelfAliased>(r#"{"foo":1,"bar":2}"#).unwrap_err();
    assert!(matches!(err.as_adapter(), Some(AdapterError::DuplicateField { .. })));
}

#[test]
fn without_constructor_adapters() {
    let json = Json::builder().build();
    let err = json.from_str::<StringData>(r#"{"nonnull_string":"a"}"#).unwrap_err();
    assert!(matches!(err.as_adapter(), Some(AdapterError::Unsupported(_))));
}
