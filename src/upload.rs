//! Builds the `multipart/form-data` payload for an image upload.
//!
//! There is no server: the payload is assembled and logged, never sent.

use crate::error::{SketchError, SketchResult};
use crate::loader::SourceImage;

/// Form field the image is attached under.
pub const UPLOAD_FIELD: &str = "myImage";

/// One part of a multipart body, kept for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub len: usize,
}

/// A finished multipart body.
#[derive(Debug, Clone)]
pub struct FormPayload {
    boundary: String,
    parts: Vec<FormPart>,
    body: Vec<u8>,
}

impl FormPayload {
    /// Value for the `Content-Type` request header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Incremental builder for a multipart body.
#[derive(Debug)]
pub struct MultipartForm {
    boundary: String,
    parts: Vec<FormPart>,
    body: Vec<u8>,
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::with_boundary(format!("----sketchpad-{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            parts: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Append a file part.
    pub fn append_file(&mut self, field: &str, file_name: &str, content_type: &str, bytes: &[u8]) {
        let file_name = file_name.replace('"', "%22");
        self.body.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n")
                .as_bytes(),
        );
        self.body
            .extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");

        self.parts.push(FormPart {
            field: field.to_owned(),
            file_name,
            content_type: content_type.to_owned(),
            len: bytes.len(),
        });
    }

    /// Close the body with the final boundary.
    pub fn finish(mut self) -> FormPayload {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        FormPayload {
            boundary: self.boundary,
            parts: self.parts,
            body: self.body,
        }
    }
}

/// Package the selected image the way the upload form would send it.
pub fn build_upload(source: Option<&SourceImage>) -> SketchResult<FormPayload> {
    let source = source.ok_or(SketchError::NoImageSelected)?;
    let mut form = MultipartForm::new();
    form.append_file(UPLOAD_FIELD, source.name(), source.mime(), source.bytes());
    Ok(form.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_layout() {
        let mut form = MultipartForm::with_boundary("XYZ");
        form.append_file(UPLOAD_FIELD, "cat.png", "image/png", b"PNGDATA");
        let payload = form.finish();

        let expected = "--XYZ\r\n\
            Content-Disposition: form-data; name=\"myImage\"; filename=\"cat.png\"\r\n\
            Content-Type: image/png\r\n\r\n\
            PNGDATA\r\n\
            --XYZ--\r\n";
        assert_eq!(String::from_utf8_lossy(payload.body()), expected);
        assert_eq!(payload.content_type(), "multipart/form-data; boundary=XYZ");
        assert_eq!(payload.parts().len(), 1);
        assert_eq!(payload.parts()[0].len, 7);
    }

    #[test]
    fn test_quotes_in_file_name_are_escaped() {
        let mut form = MultipartForm::with_boundary("b");
        form.append_file(UPLOAD_FIELD, "a\"b.png", "image/png", b"");
        assert_eq!(form.finish().parts()[0].file_name, "a%22b.png");
    }

    #[test]
    fn test_generated_boundaries_differ() {
        assert_ne!(MultipartForm::new().boundary, MultipartForm::new().boundary);
    }

    #[test]
    fn test_upload_without_image() {
        assert!(matches!(build_upload(None), Err(SketchError::NoImageSelected)));
    }
}
