use super::{API_BASE, codec, media, request, response};
use async_trait::async_trait;
use derive_new::new;
use derive_setters::Setters;
use std::pin::Pin;
use std::task::{Context, Poll, ready};
use thiserror::Error;
use tokio_stream::Stream;
use tracing::{debug, trace};

/// Environment variable holding the API key read by [`Client::from_env`].
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable holding the model name read by [`Client::from_env`].
pub const MODEL_ENV: &str = "GEMINI_MODEL";
/// Optional environment variable overriding [`API_BASE`].
pub const API_BASE_ENV: &str = "GEMINI_API_BASE";

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    ApiError(String),
    #[error("environment variable `{0}` is not set")]
    MissingEnv(&'static str),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Codec(#[from] codec::Error),
    #[error(transparent)]
    Media(#[from] media::Error),
}

/// Remote method a request is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GenerateContent,
    CountTokens,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GenerateContent => "generateContent",
            Method::CountTokens => "countTokens",
        }
    }
}

/// Sends an encoded request and hands back the encoded response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        request: serde_json::Value,
    ) -> Result<serde_json::Value, Error>;
}

#[derive(Debug, Clone, new, Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct Client {
    #[setters(skip)]
    #[new(into)]
    api_key: String,
    #[setters(skip)]
    #[new(into)]
    model: String,
    #[new(value = "API_BASE.to_string()")]
    api_base: String,
    #[new(value = "reqwest::Client::new()")]
    client: reqwest::Client,
}

impl Client {
    /// Build a client from [`API_KEY_ENV`], [`MODEL_ENV`] and, when set, [`API_BASE_ENV`].
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| Error::MissingEnv(API_KEY_ENV))?;
        let model = std::env::var(MODEL_ENV).map_err(|_| Error::MissingEnv(MODEL_ENV))?;
        let client = Client::new(api_key, model);
        Ok(match std::env::var(API_BASE_ENV) {
            Ok(api_base) => client.with_api_base(api_base),
            Err(_) => client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self, method: &str, query: &str) -> String {
        format!(
            "{api_base}/{model}:{method}?{query}key={api_key}",
            api_base = self.api_base,
            model = self.model,
            api_key = self.api_key,
        )
    }

    async fn post(&self, url: &str, body: &serde_json::Value) -> Result<reqwest::Response, Error> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::USER_AGENT, env!("CARGO_CRATE_NAME"))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error body: {}", e));
            return Err(Error::ApiError(error_body));
        }

        Ok(response)
    }

    #[tracing::instrument(skip(self, request), fields(model = %self.model))]
    pub async fn stream_generate_content(
        &self,
        request: &request::GenerateContentRequest,
    ) -> Result<
        impl tokio_stream::Stream<Item = Result<response::GenerateContentResponse, Error>>,
        Error,
    > {
        let body = codec::encode(request)?;
        self.stream_encoded(body).await
    }

    /// Stream an already encoded `generateContent` request.
    pub(crate) async fn stream_encoded(
        &self,
        body: serde_json::Value,
    ) -> Result<
        impl tokio_stream::Stream<Item = Result<response::GenerateContentResponse, Error>>,
        Error,
    > {
        let url = self.url("streamGenerateContent", "alt=sse&");
        debug!(method = "streamGenerateContent", "sending request");
        let http_response = self.post(&url, &body).await?;

        Ok(EventStream::new(Box::pin(http_response.bytes_stream())))
    }
}

#[async_trait]
impl Transport for Client {
    #[tracing::instrument(skip(self, request), fields(model = %self.model, method = method.as_str()))]
    async fn send(
        &self,
        method: Method,
        request: serde_json::Value,
    ) -> Result<serde_json::Value, Error> {
        let url = self.url(method.as_str(), "");
        debug!("sending request");
        let response = self.post(&url, &request).await?;
        Ok(response.json().await?)
    }
}

/// Server-sent events decoded from a response body.
///
/// Network chunks do not line up with events: the body is buffered and cut on blank lines,
/// so an event may span several chunks and a chunk may carry several events.
struct EventStream<S> {
    inner: S,
    buffer: Vec<u8>,
    finished: bool,
}

impl<S> EventStream<S> {
    fn new(inner: S) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
            finished: false,
        }
    }
}

impl<S, B> Stream for EventStream<S>
where
    S: Stream<Item = Result<B, reqwest::Error>> + Unpin,
    B: AsRef<[u8]>,
{
    type Item = Result<response::GenerateContentResponse, Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            while let Some(event) = take_event(&mut this.buffer) {
                if let Some(item) = decode_event(&event) {
                    return Poll::Ready(Some(item));
                }
            }

            if this.finished {
                // A last event may end without its blank line.
                let rest = std::mem::take(&mut this.buffer);
                return Poll::Ready(decode_event(&rest));
            }

            match ready!(Pin::new(&mut this.inner).poll_next(cx)) {
                Some(Ok(chunk)) => this.buffer.extend_from_slice(chunk.as_ref()),
                Some(Err(e)) => return Poll::Ready(Some(Err(e.into()))),
                None => this.finished = true,
            }
        }
    }
}

/// Cut the first complete event off `buffer`, without its terminating blank line.
fn take_event(buffer: &mut Vec<u8>) -> Option<Vec<u8>> {
    let (end, separator_len) = [&b"\r\n\r\n"[..], &b"\n\n"[..]]
        .iter()
        .filter_map(|separator| {
            buffer
                .windows(separator.len())
                .position(|window| window == *separator)
                .map(|position| (position, separator.len()))
        })
        .min()?;
    let event = buffer[..end].to_vec();
    buffer.drain(..end + separator_len);
    Some(event)
}

/// Decode the `data:` lines of one event. `None` for events carrying no data.
fn decode_event(event: &[u8]) -> Option<Result<response::GenerateContentResponse, Error>> {
    let text = String::from_utf8_lossy(event);
    let mut data = Vec::new();
    for line in text.lines() {
        if let Some(value) = line.strip_prefix("data:") {
            data.push(value.strip_prefix(' ').unwrap_or(value));
        } else if line.is_empty()
            || line.starts_with(':')
            || ["event:", "id:", "retry:"]
                .iter()
                .any(|field| line.starts_with(field))
        {
            continue;
        } else {
            return Some(Err(Error::ApiError(format!(
                "Invalid SSE data format, missing 'data: ' prefix. Full text: '{}'",
                text
            ))));
        }
    }

    if data.is_empty() {
        return None;
    }
    trace!(len = event.len(), "decoding event");
    Some(decode_data(&data.join("\n")))
}

fn decode_data(data: &str) -> Result<response::GenerateContentResponse, Error> {
    let value = serde_json::from_str::<serde_json::Value>(data)?;
    Ok(codec::decode(value)?)
}
