//! Client for the image-processing service.
//!
//! The service accepts a multipart form with a single `image` field holding
//! the source data URI and answers with JSON of the form
//! `{ "image": "<base64 png>" }`. The base64 payload is decoded up front so
//! a malformed response surfaces as an error instead of a broken render.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use iced::widget::image::Handle;
use serde::Deserialize;
use thiserror::Error;

pub const PROCESS_ENDPOINT: &str = "http://localhost:5000/process";
pub const IMAGE_FIELD: &str = "image";
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

// The service does not emit canonical base64: payloads may arrive without
// padding and with nonzero trailing bits.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Debug, Clone)]
pub struct ProcessedImage {
    pub data_uri: String,
    pub handle: Handle,
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("request to processing service failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("processing service returned a malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("processing service returned an invalid image payload: {0}")]
    InvalidPayload(#[from] base64::DecodeError),
}

#[derive(Debug, Deserialize)]
struct ProcessResponse {
    image: String,
}

pub async fn process_image(data_uri: String) -> Result<ProcessedImage, ProcessError> {
    log::info!("Submitting image to {PROCESS_ENDPOINT}");
    let form = reqwest::multipart::Form::new().text(IMAGE_FIELD, data_uri);
    let response = reqwest::Client::new()
        .post(PROCESS_ENDPOINT)
        .multipart(form)
        .send()
        .await?
        .error_for_status()?;
    let body = response.bytes().await?;
    decode_response(&body)
}

fn decode_response(body: &[u8]) -> Result<ProcessedImage, ProcessError> {
    let payload: ProcessResponse = serde_json::from_slice(body)?;
    let png = PAYLOAD_ENGINE.decode(payload.image.as_bytes())?;
    log::debug!("Decoded processed image: {} bytes", png.len());

    Ok(ProcessedImage {
        data_uri: format!("{PNG_DATA_URI_PREFIX}{}", payload.image),
        handle: Handle::from_bytes(png),
    })
}
