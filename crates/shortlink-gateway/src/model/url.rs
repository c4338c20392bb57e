use crate::error::AppError;
use serde::{Deserialize, Serialize};

const MAX_URL_LEN: usize = 2048;
const MAX_SHORT_URL_LEN: usize = 255;

#[derive(Debug, Deserialize)]
pub struct EncodeRequest {
    #[serde(default)]
    pub url: String,
}

impl EncodeRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_field(&self.url, "URL", MAX_URL_LEN)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeRequest {
    #[serde(default)]
    pub short_url: String,
}

impl DecodeRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_field(&self.short_url, "short URL", MAX_SHORT_URL_LEN)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeResponse {
    pub short_url: String,
    pub original_url: String,
    pub timestamp: i64,
}

impl EncodeResponse {
    pub fn new(short_url: String, original_url: String) -> Self {
        Self {
            short_url,
            original_url,
            timestamp: super::now_millis(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeResponse {
    pub original_url: String,
    pub short_url: String,
    pub timestamp: i64,
}

impl DecodeResponse {
    pub fn new(original_url: String, short_url: String) -> Self {
        Self {
            original_url,
            short_url,
            timestamp: super::now_millis(),
        }
    }
}

fn validate_field(value: &str, name: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", name)));
    }

    if value.chars().count() > max_len {
        return Err(AppError::Validation(format!(
            "{} is too long (maximum {} characters)",
            name, max_len
        )));
    }

    Ok(())
}
