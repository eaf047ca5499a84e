//! JSON wire codec.
//!
//! Wire field names are camelCase and live only in this module and in the serde
//! attributes of the model types. A [`Part`] is encoded as an object carrying exactly one
//! of `text`, `inlineData`, `fileData`, `functionCall` or `functionResponse`; decoding
//! rejects objects carrying none or several of them.

use super::content::{FileData, FunctionCall, FunctionResponse, InlineData, Part};
use base64::{Engine as _, engine::general_purpose};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "unrecognized part: expected one of `text`, `inlineData`, `fileData`, `functionCall`, `functionResponse`"
    )]
    UnrecognizedPart,
    #[error("part carries more than one kind of data: {}", .0.join(", "))]
    MultiplePartKinds(Vec<&'static str>),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Encode any model type into its JSON wire value.
pub fn encode<T>(value: &T) -> Result<serde_json::Value, Error>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_value(value)?)
}

/// Decode a JSON wire value into a model type.
pub fn decode<T>(value: serde_json::Value) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(value)?)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePart {
    text: Option<String>,
    inline_data: Option<InlineData>,
    file_data: Option<FileData>,
    function_call: Option<FunctionCall>,
    function_response: Option<FunctionResponse>,
}

impl WirePart {
    fn into_part(self) -> Result<Part, Error> {
        let mut present: Vec<(&'static str, Part)> = [
            self.text.map(|text| ("text", Part::Text(text))),
            self.inline_data
                .map(|data| ("inlineData", Part::InlineData(data))),
            self.file_data.map(|data| ("fileData", Part::FileData(data))),
            self.function_call
                .map(|call| ("functionCall", Part::FunctionCall(call))),
            self.function_response
                .map(|response| ("functionResponse", Part::FunctionResponse(response))),
        ]
        .into_iter()
        .flatten()
        .collect();

        if present.len() > 1 {
            return Err(Error::MultiplePartKinds(
                present.into_iter().map(|(key, _)| key).collect(),
            ));
        }

        present
            .pop()
            .map(|(_, part)| part)
            .ok_or(Error::UnrecognizedPart)
    }
}

impl Part {
    /// Decode a single part from its wire value, keeping the typed error.
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        serde_json::from_value::<WirePart>(value)?.into_part()
    }
}

impl<'de> Deserialize<'de> for Part {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        WirePart::deserialize(deserializer)?
            .into_part()
            .map_err(serde::de::Error::custom)
    }
}

/// Enumerations received from the server.
///
/// New values may show up server side before the client knows them, so decoding never
/// fails on an unrecognized value: it logs it and falls back to [`WireEnum::UNKNOWN`].
pub(crate) trait WireEnum: Sized + Copy {
    const UNKNOWN: Self;
    const TYPE_NAME: &'static str;

    fn from_wire(value: &str) -> Option<Self>;
}

pub(crate) fn deserialize_tolerant<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: WireEnum,
{
    let raw = String::deserialize(deserializer)?;
    Ok(T::from_wire(&raw).unwrap_or_else(|| {
        warn!(
            kind = T::TYPE_NAME,
            value = %raw,
            "unrecognized enum value, decoding as unknown"
        );
        T::UNKNOWN
    }))
}

/// Declares a wire enumeration with an implicit `Unknown` variant.
///
/// `unknown` is the wire spelling of the unspecified value; it decodes to `Unknown`
/// silently, any other unrecognized string decodes to `Unknown` with a warning.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident = $wire:literal, )+
        }
        unknown = $unknown:literal;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant, )+
            /// A value this version of the crate does not recognize.
            #[default]
            Unknown,
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown => $unknown,
                }
            }
        }

        impl $crate::v1beta::codec::WireEnum for $name {
            const UNKNOWN: Self = Self::Unknown;
            const TYPE_NAME: &'static str = stringify!($name);

            fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $( $wire => Some(Self::$variant), )+
                    $unknown => Some(Self::Unknown),
                    _ => None,
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::v1beta::codec::deserialize_tolerant(deserializer)
            }
        }
    };
}

pub(crate) use wire_enum;

/// Serialize a byte array as a base64 encoded string.
pub(crate) fn serialize_base64<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&general_purpose::STANDARD.encode(bytes))
}

/// Deserialize a base64 encoded string into raw bytes.
pub(crate) fn deserialize_base64<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    general_purpose::STANDARD
        .decode(s)
        .map_err(serde::de::Error::custom)
}
