//! In-memory handling of measurement photo uploads

mod error;
mod form;

pub use error::UploadError;
pub use form::MeasurementForm;

use axum::body::Bytes;

/// Largest accepted file, per field
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Largest accepted text field value
pub const MAX_FIELD_SIZE: usize = 1024 * 1024;

/// Room left for text fields and multipart framing on top of the files
const FORM_OVERHEAD: usize = 1024 * 1024;

/// Body limit covering one maximum-size file for every slot
pub const MAX_BODY_SIZE: usize = ImageSlot::ALL.len() * MAX_FILE_SIZE + FORM_OVERHEAD;

/// Form fields that accept a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    /// Front view, required
    Front,
    /// Side view, required
    Side,
    /// Back view
    Back,
    /// Angled view
    Angle,
}

impl ImageSlot {
    /// Every slot, in form order
    pub const ALL: [Self; 4] = [Self::Front, Self::Side, Self::Back, Self::Angle];

    /// Looks up the slot for a form field name
    #[must_use]
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.as_str() == name)
    }

    /// Form field name of this slot
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Side => "side",
            Self::Back => "back",
            Self::Angle => "angle",
        }
    }
}

/// A single uploaded photo, held in memory for the request
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// File name as sent by the client
    pub file_name: String,
    /// Declared content type, if any
    pub content_type: Option<String>,
    /// Raw file contents
    pub bytes: Bytes,
}

/// Photos of one request, at most one per slot
#[derive(Debug, Default)]
pub struct UploadSet {
    front: Option<UploadedImage>,
    side: Option<UploadedImage>,
    back: Option<UploadedImage>,
    angle: Option<UploadedImage>,
}

impl UploadSet {
    /// Photo stored in `slot`
    #[must_use]
    pub const fn get(&self, slot: ImageSlot) -> Option<&UploadedImage> {
        match slot {
            ImageSlot::Front => self.front.as_ref(),
            ImageSlot::Side => self.side.as_ref(),
            ImageSlot::Back => self.back.as_ref(),
            ImageSlot::Angle => self.angle.as_ref(),
        }
    }

    const fn slot_mut(&mut self, slot: ImageSlot) -> &mut Option<UploadedImage> {
        match slot {
            ImageSlot::Front => &mut self.front,
            ImageSlot::Side => &mut self.side,
            ImageSlot::Back => &mut self.back,
            ImageSlot::Angle => &mut self.angle,
        }
    }

    /// Stores `image` unless the slot is already taken.
    ///
    /// Empty files are never stored. Returns whether the image was kept.
    pub fn insert_first(&mut self, slot: ImageSlot, image: UploadedImage) -> bool {
        if image.bytes.is_empty() {
            return false;
        }
        let entry = self.slot_mut(slot);
        if entry.is_some() {
            return false;
        }
        *entry = Some(image);
        true
    }

    /// Slots holding a photo, in form order
    #[must_use]
    pub fn slots(&self) -> Vec<ImageSlot> {
        ImageSlot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot).is_some())
            .collect()
    }

    /// Returns the front and side photos.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::MissingRequiredImages`] if either is absent.
    pub fn require_front_and_side(&self) -> Result<(&UploadedImage, &UploadedImage), UploadError> {
        match (self.front.as_ref(), self.side.as_ref()) {
            (Some(front), Some(side)) => Ok((front, side)),
            _ => Err(UploadError::MissingRequiredImages),
        }
    }
}
