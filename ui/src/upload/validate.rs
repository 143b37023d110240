use std::fmt;
use std::sync::Arc;

use dioxus::html::FileEngine;

use super::UploadError;

/// 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Extension → MIME type for the formats the backend can analyse.
pub const ACCEPTED_TYPES: [(&str, &str); 4] = [
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("txt", "text/plain"),
];

/// `accept` attribute for the file picker.
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.doc,.docx,.txt";

// Common formats users pick by mistake; only used to report a real MIME type.
const OTHER_TYPES: [(&str, &str); 8] = [
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("rtf", "application/rtf"),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    ("zip", "application/zip"),
];

/// File pickers do not report MIME types on every platform, so the type is
/// derived from the extension.
pub fn mime_for_name(name: &str) -> String {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    ACCEPTED_TYPES
        .iter()
        .chain(OTHER_TYPES.iter())
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| mime.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string())
}

pub fn is_accepted_type(mime: &str) -> bool {
    ACCEPTED_TYPES.iter().any(|(_, accepted)| *accepted == mime)
}

/// Last path component; desktop pickers hand back absolute paths.
pub fn display_name(path: &str) -> String {
    path.rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(path)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

/// Type first, then size.
pub fn validate(meta: &FileMeta) -> Result<(), UploadError> {
    if !is_accepted_type(&meta.mime) {
        return Err(UploadError::UnsupportedType {
            mime: meta.mime.clone(),
        });
    }
    if meta.size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge { size: meta.size });
    }
    Ok(())
}

enum FileSource {
    Bytes(Vec<u8>),
    Engine { key: String, engine: Arc<dyn FileEngine> },
}

/// A file the user picked. Metadata is known up front; the contents are only
/// read once validation has passed.
pub struct SelectedFile {
    meta: FileMeta,
    source: FileSource,
}

impl SelectedFile {
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        Self {
            meta: FileMeta {
                mime: mime_for_name(&name),
                size: bytes.len() as u64,
                name,
            },
            source: FileSource::Bytes(bytes),
        }
    }

    /// Wrap an entry of a picker's file engine. `key` is what the engine
    /// reported (a path on desktop, a bare name on the web).
    pub fn from_engine(key: String, size: u64, engine: Arc<dyn FileEngine>) -> Self {
        let name = display_name(&key);
        Self {
            meta: FileMeta {
                mime: mime_for_name(&name),
                size,
                name,
            },
            source: FileSource::Engine { key, engine },
        }
    }

    pub fn meta(&self) -> &FileMeta {
        &self.meta
    }

    pub(crate) async fn read(self) -> Result<(FileMeta, Vec<u8>), UploadError> {
        let bytes = match self.source {
            FileSource::Bytes(bytes) => bytes,
            FileSource::Engine { key, engine } => engine
                .read_file(&key)
                .await
                .ok_or(UploadError::Unreadable)?,
        };
        Ok((self.meta, bytes))
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.meta.name)
            .field("mime", &self.meta.mime)
            .field("size", &self.meta.size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str, size: u64) -> FileMeta {
        FileMeta {
            name: name.into(),
            mime: mime_for_name(name),
            size,
        }
    }

    #[test]
    fn accepted_extensions_map_to_allowed_types() {
        for name in ["a.pdf", "b.DOC", "c.docx", "notes.txt"] {
            assert!(is_accepted_type(&mime_for_name(name)), "{name}");
        }
    }

    #[test]
    fn other_extensions_are_rejected_with_their_type() {
        let err = validate(&meta("scan.png", 100)).unwrap_err();
        assert_eq!(
            err,
            UploadError::UnsupportedType {
                mime: "image/png".into()
            }
        );
        assert_eq!(mime_for_name("README"), "application/octet-stream");
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(validate(&meta("a.pdf", MAX_UPLOAD_BYTES)).is_ok());
        assert_eq!(
            validate(&meta("a.pdf", MAX_UPLOAD_BYTES + 1)),
            Err(UploadError::TooLarge {
                size: MAX_UPLOAD_BYTES + 1
            })
        );
    }

    #[test]
    fn type_is_checked_before_size() {
        let err = validate(&meta("huge.png", MAX_UPLOAD_BYTES * 3)).unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedType { .. }));
    }

    #[test]
    fn display_name_strips_directories() {
        assert_eq!(display_name("/home/ada/docs/policy.pdf"), "policy.pdf");
        assert_eq!(display_name(r"C:\Users\ada\policy.docx"), "policy.docx");
        assert_eq!(display_name("policy.txt"), "policy.txt");
    }
}
