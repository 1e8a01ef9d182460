//! Multipart extractor for the measurement endpoint

use aide::{generate::GenContext, openapi::Operation, operation::OperationInput};
use axum::extract::{
    multipart::{Field, Multipart},
    FromRequest, Request,
};
use tracing::debug;

use super::{ImageSlot, UploadError, UploadSet, UploadedImage, MAX_FIELD_SIZE, MAX_FILE_SIZE};
use crate::types::AppError;

/// Decoded `multipart/form-data` body of a measurement request
#[derive(Debug, Default)]
pub struct MeasurementForm {
    /// Raw `height` text field, first occurrence
    pub height: Option<String>,
    /// Raw `weight` text field, first occurrence
    pub weight: Option<String>,
    /// Uploaded photos
    pub uploads: UploadSet,
}

impl MeasurementForm {
    /// Reads every part of `multipart` into memory.
    ///
    /// # Errors
    ///
    /// Fails if the stream is malformed, a photo exceeds [`MAX_FILE_SIZE`], a
    /// text value exceeds [`MAX_FIELD_SIZE`] or a file arrives under a name
    /// that is not a photo slot.
    pub async fn read(multipart: &mut Multipart) -> Result<Self, UploadError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(ToOwned::to_owned) else {
                debug!("Skipping unnamed multipart field");
                continue;
            };

            let file_name = field.file_name().map(ToOwned::to_owned);
            let Some(file_name) = file_name else {
                let value = read_text(field, &name).await?;
                let target = match name.as_str() {
                    "height" => &mut form.height,
                    "weight" => &mut form.weight,
                    _ => {
                        debug!(field = %name, "Ignoring unknown text field");
                        continue;
                    }
                };
                target.get_or_insert(value);
                continue;
            };

            let Some(slot) = ImageSlot::from_field_name(&name) else {
                return Err(UploadError::UnexpectedField(name));
            };

            let image = read_image(field, slot, file_name).await?;
            debug!(
                field = slot.as_str(),
                file_name = %image.file_name,
                content_type = ?image.content_type,
                size = image.bytes.len(),
                "Received uploaded image"
            );
            if !form.uploads.insert_first(slot, image) {
                debug!(field = slot.as_str(), "Ignoring empty or repeated image");
            }
        }

        Ok(form)
    }
}

/// Buffers a text part, failing as soon as it grows past [`MAX_FIELD_SIZE`]
async fn read_text(mut field: Field<'_>, name: &str) -> Result<String, UploadError> {
    let mut buffer = Vec::new();

    while let Some(chunk) = field.chunk().await? {
        if buffer.len() + chunk.len() > MAX_FIELD_SIZE {
            return Err(UploadError::FieldTooLarge {
                field: name.to_owned(),
                limit: MAX_FIELD_SIZE,
            });
        }
        buffer.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Buffers a file part, failing as soon as it grows past [`MAX_FILE_SIZE`]
async fn read_image(
    mut field: Field<'_>,
    slot: ImageSlot,
    file_name: String,
) -> Result<UploadedImage, UploadError> {
    let content_type = field.content_type().map(ToOwned::to_owned);
    let mut buffer = Vec::new();

    while let Some(chunk) = field.chunk().await? {
        if buffer.len() + chunk.len() > MAX_FILE_SIZE {
            return Err(UploadError::FileTooLarge {
                field: slot.as_str(),
                limit: MAX_FILE_SIZE,
            });
        }
        buffer.extend_from_slice(&chunk);
    }

    Ok(UploadedImage {
        file_name,
        content_type,
        bytes: buffer.into(),
    })
}

impl<S> FromRequest<S> for MeasurementForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| UploadError::Malformed(rejection.body_text()))?;

        Ok(Self::read(&mut multipart).await?)
    }
}

impl OperationInput for MeasurementForm {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Multipart::operation_input(ctx, operation);
    }
}
