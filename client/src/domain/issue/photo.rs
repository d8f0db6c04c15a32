//! Opaque photo payloads attached to issues.

use std::fmt;
use std::sync::Arc;

/// Raw input handed over by the photo capture provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoPayload {
    /// Binary image data straight from the camera.
    Bytes(Vec<u8>),
    /// A `data:` URL, as produced by a browser file reader.
    DataUrl(String),
}

/// Reasons a photo payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhotoError {
    /// No file was supplied or the file was empty.
    #[error("photo payload is empty")]
    Empty,
    /// The data URL has no `data:` scheme or no `,` separator.
    #[error("photo data URL is malformed")]
    MalformedDataUrl,
}

#[derive(Clone, PartialEq, Eq)]
enum Stored {
    Bytes(Arc<[u8]>),
    DataUrl(Arc<str>),
    Reference(Arc<str>),
}

/// A validated, non-empty photo.
///
/// Cloning is cheap; the payload is shared.
///
/// # Examples
/// ```
/// use impact_client::domain::{Photo, PhotoError, PhotoPayload};
///
/// let photo = Photo::try_from(PhotoPayload::DataUrl("data:image/png;base64,iVBO".into()))
///     .expect("valid data URL");
/// assert!(photo.is_data_url());
/// assert_eq!(Photo::try_from(PhotoPayload::Bytes(Vec::new())), Err(PhotoError::Empty));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Photo(Stored);

impl Photo {
    /// Accept raw image bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, PhotoError> {
        if bytes.is_empty() {
            return Err(PhotoError::Empty);
        }
        Ok(Self(Stored::Bytes(bytes.into())))
    }

    /// Accept a `data:` URL with a non-empty payload.
    pub fn from_data_url(url: String) -> Result<Self, PhotoError> {
        if url.trim().is_empty() {
            return Err(PhotoError::Empty);
        }
        let Some(rest) = url.strip_prefix("data:") else {
            return Err(PhotoError::MalformedDataUrl);
        };
        match rest.split_once(',') {
            Some((_, data)) if !data.trim().is_empty() => Ok(Self(Stored::DataUrl(url.into()))),
            Some(_) => Err(PhotoError::Empty),
            None => Err(PhotoError::MalformedDataUrl),
        }
    }

    /// Reference an image hosted elsewhere, as demo issues do.
    pub fn from_reference(reference: impl Into<String>) -> Result<Self, PhotoError> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            return Err(PhotoError::Empty);
        }
        Ok(Self(Stored::Reference(reference.into())))
    }

    /// Whether the photo was supplied as a data URL.
    pub fn is_data_url(&self) -> bool {
        matches!(self.0, Stored::DataUrl(_))
    }

    /// Raw bytes, when supplied as binary.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.0 {
            Stored::Bytes(bytes) => Some(bytes),
            Stored::DataUrl(_) | Stored::Reference(_) => None,
        }
    }

    /// Data URL or image reference, when supplied as text.
    pub fn url(&self) -> Option<&str> {
        match &self.0 {
            Stored::DataUrl(url) | Stored::Reference(url) => Some(url),
            Stored::Bytes(_) => None,
        }
    }
}

impl TryFrom<PhotoPayload> for Photo {
    type Error = PhotoError;

    fn try_from(value: PhotoPayload) -> Result<Self, Self::Error> {
        match value {
            PhotoPayload::Bytes(bytes) => Self::from_bytes(bytes),
            PhotoPayload::DataUrl(url) => Self::from_data_url(url),
        }
    }
}

impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Payloads can be megabytes; only show the shape.
        match &self.0 {
            Stored::Bytes(bytes) => write!(f, "Photo(bytes, {} B)", bytes.len()),
            Stored::DataUrl(url) => write!(f, "Photo(data url, {} chars)", url.len()),
            Stored::Reference(reference) => write!(f, "Photo({reference})"),
        }
    }
}
