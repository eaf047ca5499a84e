use super::codec;
use super::content::ModelContent;
use super::representable::ThrowingPartsRepresentable;
use super::request::{
    CountTokensRequest, GenerateContentRequest, GenerationConfig, Tool, ToolConfig,
};
use super::response::{CountTokensResponse, GenerateContentResponse};
use super::rest::{Client, Error, Method, Transport};
use super::safety::SafetySetting;
use derive_new::new;
use derive_setters::Setters;

/// A remote model together with the defaults applied to every request sent to it.
#[derive(Debug, Clone, new, Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct GenerativeModel<T> {
    #[setters(skip)]
    transport: T,
    #[new(default)]
    generation_config: Option<GenerationConfig>,
    #[new(default)]
    safety_settings: Vec<SafetySetting>,
    #[new(default)]
    tools: Vec<Tool>,
    #[new(default)]
    tool_config: Option<ToolConfig>,
    #[new(default)]
    system_instruction: Option<ModelContent>,
}

impl<T> GenerativeModel<T>
where
    T: Transport,
{
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn generate_request(&self, contents: Vec<ModelContent>) -> GenerateContentRequest {
        let mut request = GenerateContentRequest::new(contents)
            .with_safety_settings(self.safety_settings.clone())
            .with_tools(self.tools.clone());
        if let Some(config) = &self.generation_config {
            request = request.with_generation_config(config.clone());
        }
        if let Some(tool_config) = &self.tool_config {
            request = request.with_tool_config(tool_config.clone());
        }
        if let Some(instruction) = &self.system_instruction {
            request = request.with_system_instruction(instruction.clone());
        }
        request
    }

    #[tracing::instrument(skip_all, fields(contents = contents.len()))]
    pub async fn generate_content(
        &self,
        contents: Vec<ModelContent>,
    ) -> Result<GenerateContentResponse, Error> {
        let request = codec::encode(&self.generate_request(contents))?;
        let response = self
            .transport
            .send(Method::GenerateContent, request)
            .await?;
        Ok(codec::decode(response)?)
    }

    /// Send `input` as a single user turn.
    pub async fn generate_content_from<P>(
        &self,
        input: &P,
    ) -> Result<GenerateContentResponse, Error>
    where
        P: ThrowingPartsRepresentable + ?Sized,
    {
        let content = ModelContent::try_new(input)?;
        self.generate_content(vec![content]).await
    }

    #[tracing::instrument(skip_all, fields(contents = contents.len()))]
    pub async fn count_tokens(
        &self,
        contents: Vec<ModelContent>,
    ) -> Result<CountTokensResponse, Error> {
        let request = codec::encode(&CountTokensRequest::new(contents))?;
        let response = self.transport.send(Method::CountTokens, request).await?;
        Ok(codec::decode(response)?)
    }
}

impl GenerativeModel<Client> {
    /// Like [`GenerativeModel::generate_content`], streaming partial responses as they arrive.
    #[tracing::instrument(skip_all, fields(contents = contents.len()))]
    pub async fn stream_generate_content(
        &self,
        contents: Vec<ModelContent>,
    ) -> Result<impl tokio_stream::Stream<Item = Result<GenerateContentResponse, Error>>, Error>
    {
        let request = codec::encode(&self.generate_request(contents))?;
        self.transport.stream_encoded(request).await
    }
}
