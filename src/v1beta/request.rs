use super::content::ModelContent;
use super::safety::SafetySetting;
use derive_new::new;
use derive_setters::Setters;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, new, Setters)]
#[setters(prefix = "with_")]
#[setters(into, strip_option)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[setters(skip)]
    #[new(into)]
    contents: Vec<ModelContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[new(default)]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[new(default)]
    safety_settings: Vec<SafetySetting>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[new(default)]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[new(default)]
    tool_config: Option<ToolConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[new(default)]
    system_instruction: Option<ModelContent>,
}

impl GenerateContentRequest {
    pub fn contents(&self) -> &[ModelContent] {
        &self.contents
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct CountTokensRequest {
    #[new(into)]
    contents: Vec<ModelContent>,
}

/// Configuration options controlling text generation.
///
/// Every field is optional; unset fields are left out of the request entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Setters, new, Default)]
#[setters(prefix = "with_", strip_option)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[new(default)]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[new(default)]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[new(default)]
    top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[new(default)]
    candidate_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[new(default)]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[new(default)]
    stop_sequences: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[new(default)]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[new(default)]
    response_schema: Option<serde_json::Value>, // OpenAPI Schema
}

#[derive(Debug, Clone, PartialEq, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[new(into)]
    function_declarations: Vec<FunctionDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, new, Setters)]
#[setters(prefix = "with_")]
#[setters(into, strip_option)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    #[setters(skip)]
    #[new(into)]
    name: String,
    #[setters(skip)]
    #[new(into)]
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[new(default)]
    parameters: Option<serde_json::Value>, // OpenAPI Schema
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FunctionCallingMode {
    /// The model decides whether to call a function or answer in text.
    Auto,
    /// The model always calls a function.
    Any,
    /// The model never calls a function.
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, new, Setters)]
#[setters(prefix = "with_")]
#[setters(into)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCallingConfig {
    #[setters(skip)]
    mode: FunctionCallingMode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[new(default)]
    allowed_function_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    function_calling_config: FunctionCallingConfig,
}
