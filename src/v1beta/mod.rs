pub const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub mod codec;
pub mod content;
pub mod media;
pub mod model;
pub mod representable;
pub mod request;
pub mod response;
pub mod rest;
pub mod safety;

pub use content::{
    FileData, FunctionCall, FunctionResponse, InlineData, JsonObject, ModelContent, Part, Role,
};
pub use model::GenerativeModel;
pub use representable::{PartsRepresentable, ThrowingPartsRepresentable};
