use axum::Json;
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    measurement::{self, parse_leading_float, Measurements},
    types::AppError,
    upload::MeasurementForm,
};

/// Successful estimate, measurements flattened between `confidence` and `notes`
#[derive(Debug, Serialize, JsonSchema)]
pub struct MeasureResponse {
    ok: bool,
    /// Unit of every measurement, always `cm`
    unit: &'static str,
    /// Confidence score in `[0, 1]`
    confidence: f64,
    #[serde(flatten)]
    measurements: Measurements,
    notes: &'static str,
}

impl MeasureResponse {
    const fn new(measurements: Measurements) -> Self {
        Self {
            ok: true,
            unit: measurement::UNIT,
            confidence: measurement::CONFIDENCE,
            measurements,
            notes: measurement::NOTES,
        }
    }
}

/// Estimate body measurements
///
/// Accepts `front`, `side`, `back` and `angle` photos plus optional `height`
/// (cm) and `weight` (kg) text fields. `front` and `side` are required.
#[instrument(skip(form))]
pub async fn handler(form: MeasurementForm) -> Result<Json<MeasureResponse>, AppError> {
    let height = form.height.as_deref().and_then(parse_leading_float);
    let weight = form.weight.as_deref().and_then(parse_leading_float);

    let (front, side) = form.uploads.require_front_and_side()?;
    debug!(
        ?height,
        ?weight,
        front_bytes = front.bytes.len(),
        side_bytes = side.bytes.len(),
        slots = ?form.uploads.slots(),
        "Received measurement request"
    );

    // TODO: replace with a call to a real body-measurement model once one is chosen
    let measurements = measurement::estimate(height, weight);
    info!(waist = measurements.waist, "Computed placeholder measurements");

    Ok(Json(MeasureResponse::new(measurements)))
}
