use std::path::PathBuf;

use thiserror::Error;

/// Acquisition-tier failures. Any of these fails the whole pipeline;
/// unmatched fields never surface here.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A path was supplied but does not reference an existing file.
    #[error("document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The bytes or file content are not a readable PDF.
    #[error("failed to parse document: {0}")]
    Parse(String),

    /// Neither a byte buffer nor a path was supplied.
    #[error("no document source provided")]
    NoInput,
}

/// Where the brief comes from: an in-memory buffer or a file on disk.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    Memory(Vec<u8>),
    File(PathBuf),
}

impl DocumentSource {
    /// Picks a source from the caller's optional inputs. The in-memory
    /// buffer wins when both are offered; neither is `NoInput`.
    pub fn resolve(
        bytes: Option<Vec<u8>>,
        path: Option<PathBuf>,
    ) -> Result<Self, DocumentError> {
        match (bytes, path) {
            (Some(buffer), _) => Ok(DocumentSource::Memory(buffer)),
            (None, Some(path)) => Ok(DocumentSource::File(path)),
            (None, None) => Err(DocumentError::NoInput),
        }
    }
}

/// Extracts each page's text layer in page order. A page without
/// extractable text contributes an empty string, never an error.
pub fn read_pages(source: &DocumentSource) -> Result<Vec<String>, DocumentError> {
    match source {
        DocumentSource::Memory(bytes) => pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| DocumentError::Parse(e.to_string())),
        DocumentSource::File(path) => {
            if !path.is_file() {
                return Err(DocumentError::NotFound(path.clone()));
            }
            pdf_extract::extract_text_by_pages(path)
                .map_err(|e| DocumentError::Parse(e.to_string()))
        }
    }
}

/// The whole document as one flat string, pages joined with a single
/// newline.
pub fn read_text(source: &DocumentSource) -> Result<String, DocumentError> {
    Ok(read_pages(source)?.join("\n"))
}

pub fn page_count(source: &DocumentSource) -> Result<usize, DocumentError> {
    Ok(read_pages(source)?.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_buffer_over_path() {
        let source =
            DocumentSource::resolve(Some(vec![1, 2, 3]), Some(PathBuf::from("ignored.pdf")))
                .unwrap();
        assert!(matches!(source, DocumentSource::Memory(ref b) if b == &vec![1, 2, 3]));
    }

    #[test]
    fn resolve_falls_back_to_path() {
        let source = DocumentSource::resolve(None, Some(PathBuf::from("brief.pdf"))).unwrap();
        assert!(matches!(source, DocumentSource::File(_)));
    }

    #[test]
    fn resolve_without_input_fails() {
        let err = DocumentSource::resolve(None, None).unwrap_err();
        assert!(matches!(err, DocumentError::NoInput));
    }

    #[test]
    fn missing_file_is_not_found() {
        let source = DocumentSource::File(PathBuf::from("does/not/exist.pdf"));
        let err = read_text(&source).unwrap_err();
        assert!(matches!(err, DocumentError::NotFound(_)));
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let source = DocumentSource::Memory(b"not a pdf at all".to_vec());
        let err = read_text(&source).unwrap_err();
        assert!(matches!(err, DocumentError::Parse(_)));
    }
}
