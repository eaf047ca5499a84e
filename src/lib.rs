//! Rust client for generative-AI content APIs.
//!
//! This crate provides strongly typed models for the public **v1beta** endpoints and the
//! JSON codec that maps them to the wire. Build [`v1beta::ModelContent`] values from text,
//! parts or images, send them through a [`v1beta::rest::Transport`] (the bundled
//! [`v1beta::rest::Client`] talks HTTP) and read the decoded
//! [`v1beta::response::GenerateContentResponse`].
//!
//! ## Example
//!
//! ```no_run
//! use generative_ai::v1beta::{
//!     GenerativeModel, ModelContent, Part, request::GenerationConfig, rest::Client,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let model = GenerativeModel::new(Client::new("API_KEY", "gemini-2.0-flash"))
//!     .with_generation_config(GenerationConfig::new().with_max_output_tokens(64));
//!
//! let content = ModelContent::new(vec![
//!     Part::from("Is it a cat?"),
//!     Part::inline_data("image/png", std::fs::read("cat.png")?),
//! ]);
//!
//! let response = model.generate_content(vec![content]).await?;
//! println!("{:?}", response.text());
//! # Ok(())
//! # }
//! ```

pub mod v1beta;
