//! Prediction handlers: multipart file upload and the canvas data-URL flow.

use axum::{
    Json,
    extract::{Multipart, State},
};
use base64::Engine;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::SharedState;

/// Field name the upload form posts the image under.
const UPLOAD_FIELD: &str = "uploadFile";

/// POST /predict — multipart image upload, responds with the digit as text.
pub async fn predict_upload(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<String, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::InvalidImage(err.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|err| AppError::InvalidImage(err.to_string()))?;

        let prediction = state.predict(&bytes)?;
        tracing::info!(
            digit = prediction.digit,
            confidence = prediction.confidence,
            "classified upload"
        );

        return Ok(prediction.digit.to_string());
    }

    Err(AppError::MissingField(UPLOAD_FIELD))
}

/// Body of the canvas flow: the browser posts its drawing as a data URL.
#[derive(Deserialize)]
pub struct SketchRequest {
    #[serde(rename = "imgUrl")]
    pub img_url: String,
}

/// POST /api/sketch — decode the data URL and run the same prediction path.
pub async fn predict_sketch(
    State(state): State<SharedState>,
    Json(request): Json<SketchRequest>,
) -> Result<String, AppError> {
    // Data URLs have two parts, the mime prefix and the base64 payload.
    let (_, encoded) = request
        .img_url
        .split_once(";base64,")
        .ok_or(AppError::MalformedDataUrl)?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| AppError::MalformedDataUrl)?;

    let prediction = state.predict(&bytes)?;
    tracing::info!(
        digit = prediction.digit,
        confidence = prediction.confidence,
        "classified sketch"
    );

    Ok(prediction.digit.to_string())
}
