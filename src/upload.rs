//! Image upload seam used by the comment editor.

use std::future::Future;
use std::pin::Pin;

use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("image '{0}' is empty")]
    EmptyImage(String),

    #[error("image upload failed: {0}")]
    Failed(String),
}

/// Image picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadImage {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

pub type UploadFuture<'a> = Pin<Box<dyn Future<Output = Result<String, UploadError>> + Send + 'a>>;

/// Turns an image into a URL the comment markdown can reference.
pub trait ImageUploader: Send + Sync {
    fn upload<'a>(&'a self, image: &'a UploadImage) -> UploadFuture<'a>;
}

/// Inlines the image as a `data:` URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlUploader;

impl ImageUploader for DataUrlUploader {
    fn upload<'a>(&'a self, image: &'a UploadImage) -> UploadFuture<'a> {
        Box::pin(async move {
            if image.bytes.is_empty() {
                return Err(UploadError::EmptyImage(image.name.clone()));
            }
            let mime = if image.mime.is_empty() {
                "application/octet-stream"
            } else {
                image.mime.as_str()
            };
            Ok(format!(
                "data:{mime};base64,{}",
                general_purpose::STANDARD.encode(&image.bytes)
            ))
        })
    }
}

/// Markdown snippet inserted into the editor once an upload finishes.
pub fn image_markdown(name: &str, url: &str) -> String {
    format!("![{name}]({url})")
}

#[cfg(test)]
mod tests {
    use super::{image_markdown, DataUrlUploader, ImageUploader, UploadError, UploadImage};

    #[tokio::test]
    async fn data_url_encodes_bytes() {
        let image = UploadImage {
            name: "dot.png".to_owned(),
            mime: "image/png".to_owned(),
            bytes: b"png".to_vec(),
        };
        let url = DataUrlUploader.upload(&image).await.expect("upload");
        assert_eq!(url, "data:image/png;base64,cG5n");
        assert_eq!(image_markdown(&image.name, &url), format!("![dot.png]({url})"));
    }

    #[tokio::test]
    async fn empty_image_is_rejected() {
        let image = UploadImage {
            name: "empty.png".to_owned(),
            mime: "image/png".to_owned(),
            bytes: Vec::new(),
        };
        assert_eq!(
            DataUrlUploader.upload(&image).await,
            Err(UploadError::EmptyImage("empty.png".to_owned()))
        );
    }
}
