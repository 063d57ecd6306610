use crate::error::{ProductError, ProductResult};

/// 10 MiB
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

pub const IMAGE_REQUIRED: &str = "The image field is required.";
pub const IMAGE_NOT_IMAGE: &str = "The image field must be an image.";
pub const IMAGE_TOO_LARGE: &str = "The image field must not be greater than 10240 kilobytes.";
pub const IMAGE_EMPTY: &str = "The image field must not be empty.";

/// Extension and MIME type of each accepted format.
const FORMATS: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
    ("webp", "image/webp"),
];

/// A file received in the `image` multipart field.
#[derive(Debug, Clone, Default)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// An upload that passed validation.
#[derive(Debug, Clone)]
pub struct CheckedImage {
    pub extension: &'static str,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn checked(self) -> ProductResult<CheckedImage> {
        if self.bytes.is_empty() {
            return Err(ProductError::InvalidImage(IMAGE_EMPTY.into()));
        }
        if self.bytes.len() > MAX_IMAGE_BYTES {
            return Err(ProductError::InvalidImage(IMAGE_TOO_LARGE.into()));
        }

        let by_name = self
            .file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .and_then(|ext| FORMATS.iter().find(|(known, _)| *known == ext));
        let by_type = self
            .content_type
            .as_deref()
            .map(str::to_ascii_lowercase)
            .and_then(|mime| FORMATS.iter().find(|(_, known)| *known == mime));

        let Some(&(extension, default_mime)) = by_name.or(by_type) else {
            return Err(ProductError::InvalidImage(IMAGE_NOT_IMAGE.into()));
        };
        let mime_type = self
            .content_type
            .filter(|mime| mime.starts_with("image/"))
            .unwrap_or_else(|| default_mime.to_string());

        Ok(CheckedImage {
            extension,
            mime_type,
            bytes: self.bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: Option<&str>, mime: Option<&str>, len: usize) -> ImageUpload {
        ImageUpload {
            file_name: name.map(Into::into),
            content_type: mime.map(Into::into),
            bytes: vec![1; len],
        }
    }

    fn message(result: ProductResult<CheckedImage>) -> String {
        match result {
            Err(ProductError::InvalidImage(msg)) => msg,
            other => panic!("expected invalid image, got {other:?}"),
        }
    }

    #[test]
    fn test_extension_decides_format() {
        let image = upload(Some("Photo.JPG"), Some("application/octet-stream"), 4)
            .checked()
            .unwrap();
        assert_eq!(image.extension, "jpg");
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[test]
    fn test_content_type_used_without_extension() {
        let image = upload(Some("blob"), Some("image/webp"), 4).checked().unwrap();
        assert_eq!(image.extension, "webp");
        assert_eq!(image.mime_type, "image/webp");
    }

    #[test]
    fn test_non_image_rejected() {
        assert_eq!(
            message(upload(Some("notes.txt"), Some("text/plain"), 4).checked()),
            IMAGE_NOT_IMAGE
        );
    }

    #[test]
    fn test_size_limits() {
        assert_eq!(message(upload(Some("a.png"), None, 0).checked()), IMAGE_EMPTY);
        assert_eq!(
            message(upload(Some("a.png"), None, MAX_IMAGE_BYTES + 1).checked()),
            IMAGE_TOO_LARGE
        );
        assert!(upload(Some("a.png"), None, MAX_IMAGE_BYTES).checked().is_ok());
    }
}
