use crate::config::Config;
use crate::error::{AppError, Result};
use crate::image_input::SourceImage;
use crate::spec::StyleHint;

/// Client for the external image-generation backend.
///
/// The backend is opaque: one `POST /generate` with a multipart body and
/// either raw image bytes back (200) or a failure. There is no retry,
/// timeout policy, or concurrent-request handling here.
pub struct BackendClient {
    http: reqwest::Client,
    endpoint: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.generate_endpoint(),
        }
    }

    /// Sends one generation request and returns the rendered image bytes.
    ///
    /// The multipart form carries the `image` binary part, the composed
    /// `prompt`, and the `lora` style label (the literal `"None"` when no
    /// style is selected).
    pub async fn generate(
        &self,
        image: &SourceImage,
        prompt: &str,
        style: StyleHint,
    ) -> Result<Vec<u8>> {
        let part = reqwest::multipart::Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.mime_type())
            .map_err(|e| AppError::request(format!("invalid image mime type: {e}")))?;

        let form = reqwest::multipart::Form::new()
            .part("image", part)
            .text("prompt", prompt.to_string())
            .text("lora", style.wire_label());

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::request(format!("generation request failed: {e}")))?;

        // The backend contract is exactly 200 with raw image bytes; any
        // other status, 2xx included, is a failure.
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable response body>".to_string());
            return Err(AppError::backend(status.as_u16(), message));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::request(format!("failed to read generated image: {e}")))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn test_image() -> SourceImage {
        SourceImage::from_bytes(PNG_MAGIC.to_vec(), "room.png".into()).unwrap()
    }

    fn client_for(url: &str) -> BackendClient {
        let config = Config::from_url_str(url).unwrap();
        BackendClient::new(&config)
    }

    #[tokio::test]
    async fn ok_response_returns_body_bytes() {
        let mut server = Server::new_async().await;
        let rendered: &[u8] = b"fake png bytes";
        let mock = server
            .mock("POST", "/generate")
            .with_status(200)
            .with_header("content-type", "image/png")
            .with_body(rendered)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let bytes = client
            .generate(&test_image(), "a prompt", StyleHint::None)
            .await
            .unwrap();

        assert_eq!(bytes, rendered);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_200_success_status_is_a_backend_error() {
        // 201 from a confused backend must not be written out as an image.
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/generate")
            .with_status(201)
            .with_body("oops")
            .create_async()
            .await;

        let client = client_for(&server.url());
        let result = client
            .generate(&test_image(), "a prompt", StyleHint::None)
            .await;

        assert!(matches!(
            result,
            Err(AppError::Backend { status: 201, ref message }) if message.as_str() == "oops"
        ));
    }

    #[tokio::test]
    async fn error_status_carries_status_and_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/generate")
            .with_status(500)
            .with_body("CUDA out of memory")
            .create_async()
            .await;

        let client = client_for(&server.url());
        let result = client
            .generate(&test_image(), "a prompt", StyleHint::PastelMix)
            .await;

        match result {
            Err(AppError::Backend { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "CUDA out of memory");
            }
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_request_error() {
        // Port 1 is never listening; the connection itself fails.
        let client = client_for("http://127.0.0.1:1");
        let result = client
            .generate(&test_image(), "a prompt", StyleHint::None)
            .await;

        assert!(matches!(result, Err(AppError::Request(_))));
    }
}
