// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::StrengthLabel;

// Generator requests and responses
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PasswordGenerationRequest {
    /// Password length (default: 8, at most the configured maximum)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: false)
    pub include_lowercase: Option<bool>,
    /// Include numbers (default: false)
    pub include_numbers: Option<bool>,
    /// Include special characters `!@#$%^&*()` (default: false)
    pub include_symbols: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Strength label of the generated password
    pub strength: Option<StrengthLabel>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            password: None,
            strength: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Strength label
    pub strength: StrengthLabel,
    /// How many of the four character checks passed (0-4)
    pub satisfied: u8,
    /// Feedback and suggestions for improvement
    pub feedback: Vec<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

// System types
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the server is answering
    pub status: String,
    /// Crate version
    pub version: String,
}
