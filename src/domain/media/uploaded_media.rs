//! Uploaded media value object

use std::fmt;

/// Soft per-file size ceiling advertised by the upload surface (25 MB).
/// Advisory only: the presenter warns, no core component rejects larger files.
pub const SOFT_SIZE_LIMIT_BYTES: usize = 25 * 1024 * 1024;

/// Supported media MIME types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaMimeType {
    Mp3,
    Mp4,
    Mpeg,
    M4a,
    Wav,
    Webm,
    Ogg,
    Flac,
}

impl MediaMimeType {
    /// MIME string as sent in the multipart file part.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mp3",
            Self::Mp4 => "audio/mp4",
            Self::Mpeg => "audio/mpeg",
            Self::M4a => "audio/m4a",
            Self::Wav => "audio/wav",
            Self::Webm => "audio/webm",
            Self::Ogg => "audio/ogg",
            Self::Flac => "audio/flac",
        }
    }

    /// Canonical filename extension for this type.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 | Self::Mpeg => "mp3",
            Self::Mp4 => "mp4",
            Self::M4a => "m4a",
            Self::Wav => "wav",
            Self::Webm => "webm",
            Self::Ogg => "ogg",
            Self::Flac => "flac",
        }
    }

    /// Guess the MIME type from a filename extension
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = filename.rsplit('.').next()?;
        match ext.to_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "mp4" => Some(Self::Mp4),
            "mpeg" | "mpga" => Some(Self::Mpeg),
            "m4a" => Some(Self::M4a),
            "wav" => Some(Self::Wav),
            "webm" => Some(Self::Webm),
            "ogg" | "oga" => Some(Self::Ogg),
            "flac" => Some(Self::Flac),
            _ => None,
        }
    }
}

impl fmt::Display for MediaMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for MediaMimeType {
    fn default() -> Self {
        Self::Mp3
    }
}

/// Value object representing an uploaded meeting recording.
/// Opaque bytes plus the filename it arrived under; never mutated downstream.
#[derive(Debug, Clone)]
pub struct UploadedMedia {
    filename: String,
    data: Vec<u8>,
    mime_type: MediaMimeType,
}

impl UploadedMedia {
    /// Create UploadedMedia, guessing the MIME type from the filename.
    /// Unknown extensions fall back to the default type; the remote
    /// transcription service makes the final call on format support.
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        let filename = filename.into();
        let mime_type = MediaMimeType::from_filename(&filename).unwrap_or_default();
        Self {
            filename,
            data,
            mime_type,
        }
    }

    /// Create with an explicit MIME type
    pub fn with_mime_type(
        filename: impl Into<String>,
        data: Vec<u8>,
        mime_type: MediaMimeType,
    ) -> Self {
        Self {
            filename: filename.into(),
            data,
            mime_type,
        }
    }

    /// Get the source filename
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn mime_type(&self) -> MediaMimeType {
        self.mime_type
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Whether the file exceeds the advertised soft size ceiling
    pub fn exceeds_soft_limit(&self) -> bool {
        self.size_bytes() > SOFT_SIZE_LIMIT_BYTES
    }

    /// Size formatted for warnings, e.g. "26.1 MB".
    pub fn human_readable_size(&self) -> String {
        const KIB: f64 = 1024.0;
        const MIB: f64 = 1024.0 * 1024.0;

        let bytes = self.size_bytes();
        match bytes as f64 {
            b if b < KIB => format!("{} B", bytes),
            b if b < MIB => format!("{:.1} KB", b / KIB),
            b => format!("{:.1} MB", b / MIB),
        }
    }
}
