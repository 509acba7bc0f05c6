//! Derived artifact payloads (illustrative image, PDF export)

use serde::{Deserialize, Serialize};

/// Body of an image generation request; the prompt is derived from the
/// displayed story, never entered directly
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ImageRequest {
    pub prompt: String,
}

/// Reference to the generated image
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ImageResponse {
    pub image_path: String,
}

/// Body of a PDF export request. An absent image path means a text-only
/// export.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PdfRequest {
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

/// Downloadable reference to the rendered PDF
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PdfResponse {
    pub pdf_path: String,
}
