//! Uploaded media value objects

pub mod uploaded_media;

pub use uploaded_media::{MediaMimeType, UploadedMedia, SOFT_SIZE_LIMIT_BYTES};
