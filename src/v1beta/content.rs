use super::codec::{deserialize_base64, serialize_base64};
use super::media;
use super::representable::{PartsRepresentable, ThrowingPartsRepresentable};
use derive_new::new;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::fmt::Formatter;

/// Dynamically typed JSON object used for function arguments and results.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Conventional roles of a [`ModelContent`].
///
/// The wire role is a free-form string; this enum only covers the values the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Model,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
            Role::System => "system",
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// A single unit of model input or output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Part {
    Text(String),
    InlineData(InlineData),
    FileData(FileData),
    FunctionCall(FunctionCall),
    FunctionResponse(FunctionResponse),
}

impl Part {
    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Part::InlineData(InlineData::new(mime_type, data))
    }

    pub fn file_data(mime_type: impl Into<String>, file_uri: impl Into<String>) -> Self {
        Part::FileData(FileData::new(mime_type, file_uri))
    }

    pub fn function_call(name: impl Into<String>, args: JsonObject) -> Self {
        Part::FunctionCall(FunctionCall::new(name, args))
    }

    pub fn function_response(name: impl Into<String>, response: JsonObject) -> Self {
        Part::FunctionResponse(FunctionResponse::new(name, response))
    }

    /// The text of a [`Part::Text`], `None` for every other kind of part.
    pub fn text(&self) -> Option<&str> {
        match self {
            Part::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_function_call(&self) -> Option<&FunctionCall> {
        match self {
            Part::FunctionCall(call) => Some(call),
            _ => None,
        }
    }
}

impl From<&str> for Part {
    fn from(text: &str) -> Self {
        Part::Text(text.to_string())
    }
}

impl From<String> for Part {
    fn from(text: String) -> Self {
        Part::Text(text)
    }
}

impl From<InlineData> for Part {
    fn from(data: InlineData) -> Self {
        Part::InlineData(data)
    }
}

impl From<FileData> for Part {
    fn from(data: FileData) -> Self {
        Part::FileData(data)
    }
}

impl From<FunctionCall> for Part {
    fn from(call: FunctionCall) -> Self {
        Part::FunctionCall(call)
    }
}

impl From<FunctionResponse> for Part {
    fn from(response: FunctionResponse) -> Self {
        Part::FunctionResponse(response)
    }
}

/// Binary data sent inline with a message.
///
/// The bytes are encoded using base64 when serialized to JSON.
#[derive(Clone, PartialEq, Eq, Hash, Deserialize, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[new(into)]
    mime_type: String,
    #[new(into)]
    #[serde(
        serialize_with = "serialize_base64",
        deserialize_with = "deserialize_base64"
    )]
    data: Vec<u8>,
}

impl InlineData {
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

impl std::fmt::Debug for InlineData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InlineData")
            .field("mime_type", &self.mime_type)
            .field("data", &format_args!("[{} bytes]", self.data.len()))
            .finish()
    }
}

/// Reference to a file held in remote storage, usually a `gs://` URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    #[new(into)]
    mime_type: String,
    #[new(into)]
    file_uri: String,
}

impl FileData {
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn file_uri(&self) -> &str {
        &self.file_uri
    }

    /// Scheme of the file URI, `None` when the URI does not parse.
    pub fn scheme(&self) -> Option<String> {
        url::Url::parse(&self.file_uri)
            .ok()
            .map(|url| url.scheme().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCall {
    #[new(into)]
    name: String,
    #[serde(default)]
    args: JsonObject,
}

impl FunctionCall {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &JsonObject {
        &self.args
    }
}

/// Result of a function call, sent back to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    #[new(into)]
    name: String,
    #[serde(default)]
    response: JsonObject,
}

impl FunctionResponse {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn response(&self) -> &JsonObject {
        &self.response
    }
}

/// A role tagged, ordered group of parts.
///
/// Constructors default the role to `"user"`; use [`ModelContent::with_role`] to change
/// it or [`ModelContent::from_parts`] to leave it unset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct ModelContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    #[setters(skip)]
    parts: Vec<Part>,
}

impl ModelContent {
    pub fn new(parts: impl PartsRepresentable) -> Self {
        Self::from_parts(Some(Role::User.into()), parts.to_parts())
    }

    pub fn from_parts(role: Option<String>, parts: Vec<Part>) -> Self {
        Self { role, parts }
    }

    /// Like [`ModelContent::new`] for inputs whose conversion can fail, such as images.
    pub fn try_new<T>(parts: &T) -> Result<Self, media::Error>
    where
        T: ThrowingPartsRepresentable + ?Sized,
    {
        Ok(Self::from_parts(
            Some(Role::User.into()),
            parts.try_to_parts()?,
        ))
    }

    /// Concatenates the parts of every input, in order.
    pub fn try_from_representables(
        inputs: &[&dyn ThrowingPartsRepresentable],
    ) -> Result<Self, media::Error> {
        let mut parts = Vec::new();
        for input in inputs {
            parts.extend(input.try_to_parts()?);
        }
        Ok(Self::from_parts(Some(Role::User.into()), parts))
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }
}
