use base64::Engine;
use generative_ai::v1beta::codec::{self, Error};
use generative_ai::v1beta::{
    FileData, FunctionCall, FunctionResponse, InlineData, JsonObject, ModelContent, Part, Role,
};
use serde_json::json;

const PART_KEYS: [&str; 5] = [
    "text",
    "inlineData",
    "fileData",
    "functionCall",
    "functionResponse",
];

fn object(value: serde_json::Value) -> JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

fn every_variant() -> Vec<Part> {
    vec![
        Part::from("hello"),
        Part::inline_data("image/png", vec![0x89u8, 0x50, 0x4e, 0x47]),
        Part::file_data("application/pdf", "gs://bucket/doc.pdf"),
        Part::function_call("lookup", object(json!({"city": "Rome", "days": 3}))),
        Part::function_response("lookup", object(json!({"forecast": ["sun", "rain"]}))),
    ]
}

#[test]
fn deserializes_part_variants() {
    let part = Part::from_value(json!({"text": "hi"})).unwrap();
    assert_eq!(part.text(), Some("hi"));

    let inline = json!({"inlineData": {"mimeType": "image/png", "data": "AA=="}});
    match Part::from_value(inline).unwrap() {
        Part::InlineData(inline_data) => {
            assert_eq!(inline_data.mime_type(), "image/png");
            assert_eq!(inline_data.data(), &[0u8]);
        }
        other => panic!("unexpected part: {:?}", other),
    }

    let call = json!({"functionCall": {"name": "foo", "args": {"x": 1}}});
    match Part::from_value(call).unwrap() {
        Part::FunctionCall(function_call) => {
            assert_eq!(function_call.name(), "foo");
            assert_eq!(function_call.args()["x"], 1);
        }
        other => panic!("unexpected part: {:?}", other),
    }

    let resp = json!({"functionResponse": {"name": "foo", "response": {"result": 1}}});
    match Part::from_value(resp).unwrap() {
        Part::FunctionResponse(function_response) => {
            assert_eq!(function_response.name(), "foo");
            assert_eq!(function_response.response()["result"], 1);
        }
        other => panic!("unexpected part: {:?}", other),
    }

    let file = json!({"fileData": {"mimeType": "text/plain", "fileUri": "gs://b/p"}});
    if let Part::FileData(file_data) = Part::from_value(file).unwrap() {
        assert_eq!(file_data.mime_type(), "text/plain");
        assert_eq!(file_data.file_uri(), "gs://b/p");
        assert_eq!(file_data.scheme().as_deref(), Some("gs"));
    } else {
        panic!();
    }
}

#[test]
fn every_variant_round_trips() {
    for part in every_variant() {
        let encoded = codec::encode(&part).expect("encode");
        let decoded: Part = codec::decode(encoded).expect("decode");
        assert_eq!(decoded, part);
    }
}

#[test]
fn encoding_emits_exactly_one_key() {
    for part in every_variant() {
        let encoded = serde_json::to_value(&part).expect("encode");
        let keys: Vec<&str> = encoded
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 1, "{encoded}");
        assert!(PART_KEYS.contains(&keys[0]), "{encoded}");
    }
}

#[test]
fn only_text_parts_expose_text() {
    let parts = every_variant();
    let texts: Vec<Option<&str>> = parts.iter().map(Part::text).collect();
    assert_eq!(texts, vec![Some("hello"), None, None, None, None]);
}

#[test]
fn empty_object_is_unrecognized() {
    let err = Part::from_value(json!({})).unwrap_err();
    assert!(matches!(err, Error::UnrecognizedPart), "{err:?}");
}

#[test]
fn unknown_keys_only_is_unrecognized() {
    let err = Part::from_value(json!({"executableCode": {"code": "print(1)"}})).unwrap_err();
    assert!(matches!(err, Error::UnrecognizedPart), "{err:?}");
}

#[test]
fn unrecognized_part_fails_whole_content() {
    let err = serde_json::from_value::<ModelContent>(json!({
        "role": "model",
        "parts": [{"text": "ok"}, {}]
    }))
    .unwrap_err();
    assert!(err.to_string().contains("unrecognized part"), "{err}");
}

#[test]
fn multiple_keys_are_rejected() {
    let err = Part::from_value(json!({
        "text": "hi",
        "functionCall": {"name": "foo", "args": {}}
    }))
    .unwrap_err();
    match err {
        Error::MultiplePartKinds(keys) => assert_eq!(keys, ["text", "functionCall"]),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn extra_keys_next_to_a_known_one_are_ignored() {
    let part = Part::from_value(json!({"text": "hi", "thought": true})).unwrap();
    assert_eq!(part, Part::from("hi"));
}

#[test]
fn missing_function_args_decode_as_empty() {
    let part = Part::from_value(json!({"functionCall": {"name": "now"}})).unwrap();
    assert_eq!(
        part,
        Part::FunctionCall(FunctionCall::new("now", JsonObject::new()))
    );
}

#[test]
fn invalid_base64_fails() {
    let err = Part::from_value(json!({"inlineData": {"mimeType": "image/png", "data": "%%%"}}))
        .unwrap_err();
    assert!(matches!(err, Error::Json(_)), "{err:?}");
}

#[test]
fn inline_data_encodes_base64() {
    let data = vec![0x1u8, 0x2, 0x3];
    let inline = InlineData::new("image/png", data.clone());
    let json = serde_json::to_value(&inline).expect("serialize");
    let encoded = json["data"].as_str().unwrap();
    assert_eq!(
        encoded,
        base64::engine::general_purpose::STANDARD.encode(data)
    );
}

#[test]
fn inline_data_debug_hides_bytes() {
    let inline = InlineData::new("image/png", vec![7u8; 32]);
    let debug = format!("{:?}", inline);
    assert!(debug.contains("32 bytes"), "{debug}");
    assert!(!debug.contains('7'), "{debug}");
}

#[test]
fn payload_types_convert_into_parts() {
    assert!(matches!(
        Part::from(FileData::new("text/plain", "gs://b/f.txt")),
        Part::FileData(_)
    ));
    assert!(matches!(
        Part::from(FunctionResponse::new("f", JsonObject::new())),
        Part::FunctionResponse(_)
    ));
}

#[test]
fn content_round_trips_with_documented_shape() {
    let bytes = vec![0x89u8, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];
    let content = ModelContent::from_parts(
        Some(Role::User.into()),
        vec![
            Part::from("Is it a cat?"),
            Part::inline_data("image/png", bytes.clone()),
        ],
    );

    let encoded = codec::encode(&content).expect("encode");
    assert_eq!(
        encoded,
        json!({
            "role": "user",
            "parts": [
                {"text": "Is it a cat?"},
                {"inlineData": {
                    "mimeType": "image/png",
                    "data": base64::engine::general_purpose::STANDARD.encode(&bytes)
                }}
            ]
        })
    );

    let decoded: ModelContent = codec::decode(encoded).expect("decode");
    assert_eq!(decoded, content);
}

#[test]
fn content_without_role_omits_it() {
    let content = ModelContent::from_parts(None, vec![Part::from("hi")]);
    let encoded = serde_json::to_value(&content).expect("encode");
    assert_eq!(encoded, json!({"parts": [{"text": "hi"}]}));

    let decoded: ModelContent = serde_json::from_value(encoded).expect("decode");
    assert_eq!(decoded.role(), None);
}

#[test]
fn content_equality_is_structural() {
    let a = ModelContent::new(vec!["x", "y"]);
    let b = ModelContent::from_parts(Some("user".into()), vec![Part::from("x"), Part::from("y")]);
    assert_eq!(a, b);
    assert_ne!(a, b.clone().with_role(Role::Model));
    assert_ne!(a, ModelContent::new(vec!["y", "x"]));
}
