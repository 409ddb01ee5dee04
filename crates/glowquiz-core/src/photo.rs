//! The user-selected photo.

use image::ImageFormat;

/// Opaque handle to the selfie chosen on step 1.
///
/// Holds the raw bytes exactly as read from disk. The MIME type is sniffed
/// from the magic bytes so the multipart upload can label the part; an
/// unrecognized format falls back to a generic octet stream. Sniffing is
/// labelling, not validation: any file is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

impl PhotoFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mime = sniff_mime(&bytes);
        Self {
            file_name: file_name.into(),
            bytes,
            mime,
        }
    }
}

fn sniff_mime(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => "image/png",
        Ok(ImageFormat::Jpeg) => "image/jpeg",
        Ok(ImageFormat::WebP) => "image/webp",
        Ok(ImageFormat::Gif) => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_magic_bytes() {
        let photo = PhotoFile::new("selfie.png", vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
        assert_eq!(photo.mime, "image/png");
    }

    #[test]
    fn test_jpeg_magic_bytes() {
        let photo = PhotoFile::new("selfie.jpg", vec![0xFF, 0xD8, 0xFF, 0xE0]);
        assert_eq!(photo.mime, "image/jpeg");
    }

    #[test]
    fn test_unknown_bytes_fall_back() {
        let photo = PhotoFile::new("notes.txt", b"not an image".to_vec());
        assert_eq!(photo.mime, "application/octet-stream");
    }

    #[test]
    fn test_bytes_kept_verbatim() {
        let bytes = vec![0xFF, 0xD8, 0xFF, 0x00, 0x42];
        let photo = PhotoFile::new("x.jpg", bytes.clone());
        assert_eq!(photo.bytes, bytes);
        assert_eq!(photo.file_name, "x.jpg");
    }
}
