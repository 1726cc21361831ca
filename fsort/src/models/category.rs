// src/models/category.rs
use std::path::Path;

/// The folder a file is sorted into, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Images,
    Video,
    Documents,
    Audio,
    Archives,
    Others,
}

const EXTENSION_TABLE: &[(&str, Category)] = &[
    ("JPEG", Category::Images),
    ("PNG", Category::Images),
    ("JPG", Category::Images),
    ("SVG", Category::Images),
    ("GIF", Category::Images),
    ("AVI", Category::Video),
    ("MP4", Category::Video),
    ("MOV", Category::Video),
    ("MKV", Category::Video),
    ("DOC", Category::Documents),
    ("DOCX", Category::Documents),
    ("TXT", Category::Documents),
    ("PDF", Category::Documents),
    ("XLSX", Category::Documents),
    ("XLS", Category::Documents),
    ("PPTX", Category::Documents),
    ("MP3", Category::Audio),
    ("OGG", Category::Audio),
    ("WAV", Category::Audio),
    ("AMR", Category::Audio),
    ("ZIP", Category::Archives),
    ("GZ", Category::Archives),
    ("TAR", Category::Archives),
];

impl Category {
    /// All categories in report order.
    pub const ALL: [Self; 6] = [
        Self::Images,
        Self::Video,
        Self::Documents,
        Self::Audio,
        Self::Archives,
        Self::Others,
    ];

    #[inline]
    #[must_use]
    pub const fn folder_name(self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Video => "video",
            Self::Documents => "documents",
            Self::Audio => "audio",
            Self::Archives => "archives",
            Self::Others => "others",
        }
    }

    /// Position of the category in [`Category::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Images => 0,
            Self::Video => 1,
            Self::Documents => 2,
            Self::Audio => 3,
            Self::Archives => 4,
            Self::Others => 5,
        }
    }

    /// Looks up an upper-cased extension (no leading dot) in the table.
    #[must_use]
    pub fn from_extension(key: &str) -> Option<Self> {
        EXTENSION_TABLE
            .iter()
            .find(|(ext, _)| *ext == key)
            .map(|(_, category)| *category)
    }

    /// Classifies a path by its extension, falling back to [`Category::Others`].
    #[must_use]
    pub fn classify(path: &Path) -> Self {
        Self::from_extension(&extension_key(path)).unwrap_or(Self::Others)
    }
}

/// Upper-cased last extension of `path` without the dot.
///
/// Empty when the file has no extension. Names with only a leading dot
/// (`.bashrc`) have none.
#[must_use]
pub fn extension_key(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}
