use super::codec::wire_enum;
use derive_new::new;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Category of potentially harmful content.
    pub enum HarmCategory {
        Harassment = "HARM_CATEGORY_HARASSMENT",
        HateSpeech = "HARM_CATEGORY_HATE_SPEECH",
        SexuallyExplicit = "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        DangerousContent = "HARM_CATEGORY_DANGEROUS_CONTENT",
        CivicIntegrity = "HARM_CATEGORY_CIVIC_INTEGRITY",
    }
    unknown = "HARM_CATEGORY_UNSPECIFIED";
}

wire_enum! {
    /// Probability that a piece of content is harmful.
    pub enum HarmProbability {
        Negligible = "NEGLIGIBLE",
        Low = "LOW",
        Medium = "MEDIUM",
        High = "HIGH",
    }
    unknown = "HARM_PROBABILITY_UNSPECIFIED";
}

wire_enum! {
    /// Blocking policy applied to a [`HarmCategory`].
    pub enum HarmBlockThreshold {
        /// Block when the probability is low or higher.
        BlockLowAndAbove = "BLOCK_LOW_AND_ABOVE",
        /// Block when the probability is medium or higher.
        BlockMediumAndAbove = "BLOCK_MEDIUM_AND_ABOVE",
        /// Block only content with a high probability of harm.
        BlockOnlyHigh = "BLOCK_ONLY_HIGH",
        /// Never block.
        BlockNone = "BLOCK_NONE",
    }
    unknown = "HARM_BLOCK_THRESHOLD_UNSPECIFIED";
}

/// Request side safety policy for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// Response side safety assessment for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SafetyRating {
    #[serde(default)]
    pub category: HarmCategory,
    #[serde(default)]
    pub probability: HarmProbability,
    #[serde(default)]
    pub blocked: bool,
}
