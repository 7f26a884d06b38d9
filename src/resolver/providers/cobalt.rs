use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;

use crate::resolver::errors::ResolveError;
use crate::resolver::models::DownloadLink;
use crate::resolver::traits::{ConversionRequest, ConversionService};
use crate::resolver::utils::snippet;

/// Cobalt-style converter: `POST {endpoint}` with a JSON request body
pub struct CobaltConverter {
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ConversionResponse {
    status: Option<String>,
    url: Option<String>,
    text: Option<String>,
}

impl CobaltConverter {
    pub fn new(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait]
impl ConversionService for CobaltConverter {
    fn name(&self) -> &str {
        "cobalt"
    }

    async fn convert(&self, request: &ConversionRequest) -> Result<DownloadLink, ResolveError> {
        log::debug!("[Converter] POST {} ({} {})", self.endpoint, request.format, request.url);

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        let http_status = response.status();
        let body = response.text().await.map_err(transport)?;

        interpret_response(http_status, &body, request)
    }
}

// Anything that is not a provider-reported error is a transport failure
fn transport(e: reqwest::Error) -> ResolveError {
    match ResolveError::from(e) {
        ResolveError::MalformedResponse(msg) => ResolveError::ProviderUnreachable(msg),
        other => other,
    }
}

fn interpret_response(
    http_status: reqwest::StatusCode,
    body: &str,
    request: &ConversionRequest,
) -> Result<DownloadLink, ResolveError> {
    let parsed: ConversionResponse = serde_json::from_str(body).map_err(|e| {
        ResolveError::ProviderUnreachable(format!(
            "HTTP {} with non-JSON body ({}): {}",
            http_status.as_u16(),
            e,
            snippet(body)
        ))
    })?;

    if parsed.status.as_deref() == Some("error") {
        let reason = parsed
            .text
            .unwrap_or_else(|| "provider reported an error".to_string());
        return Err(ResolveError::ConversionFailed(reason));
    }

    if !http_status.is_success() {
        return Err(ResolveError::ProviderUnreachable(format!(
            "HTTP {}: {}",
            http_status.as_u16(),
            snippet(body)
        )));
    }

    match parsed.url {
        Some(href) if !href.is_empty() => Ok(DownloadLink {
            label: request.format.label().to_string(),
            href,
        }),
        _ => Err(ResolveError::ProviderUnreachable(format!(
            "response without url: {}",
            snippet(body)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::config::ProviderConfig;
    use crate::resolver::models::{FormatHint, VideoId};
    use reqwest::StatusCode;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(format: FormatHint) -> ConversionRequest {
        let id = VideoId::parse("AAAAAAAAAAA").unwrap();
        ConversionRequest::for_video(&id, format, &ProviderConfig::default())
    }

    #[test]
    fn test_error_status_is_conversion_failure() {
        let err = interpret_response(
            StatusCode::BAD_REQUEST,
            r#"{"status":"error","text":"video too long"}"#,
            &request(FormatHint::Video),
        )
        .unwrap_err();
        assert_eq!(err, ResolveError::ConversionFailed("video too long".to_string()));
    }

    #[test]
    fn test_non_json_is_transport_failure() {
        let err = interpret_response(StatusCode::BAD_GATEWAY, "<html>502</html>", &request(FormatHint::Audio))
            .unwrap_err();
        assert!(matches!(err, ResolveError::ProviderUnreachable(_)));
    }

    #[test]
    fn test_missing_url_is_transport_failure() {
        let err = interpret_response(StatusCode::OK, r#"{"status":"stream"}"#, &request(FormatHint::Audio))
            .unwrap_err();
        assert!(matches!(err, ResolveError::ProviderUnreachable(_)));
    }

    #[test]
    fn test_success_uses_format_label() {
        let link = interpret_response(
            StatusCode::OK,
            r#"{"status":"redirect","url":"https://cdn.example/a.mp3"}"#,
            &request(FormatHint::Audio),
        )
        .unwrap();
        assert_eq!(link.label, "MP3");
        assert_eq!(link.href, "https://cdn.example/a.mp3");
    }

    #[tokio::test]
    async fn test_convert_posts_request_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/json"))
            .and(body_partial_json(serde_json::json!({
                "url": "https://www.youtube.com/watch?v=AAAAAAAAAAA",
                "isAudioOnly": true,
                "aFormat": "mp3"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"status":"stream","url":"https://cdn.example/x"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let converter = CobaltConverter::new(format!("{}/api/json", server.uri()), reqwest::Client::new());
        let link = converter.convert(&request(FormatHint::Audio)).await.unwrap();
        assert_eq!(link.href, "https://cdn.example/x");
    }

    #[tokio::test]
    async fn test_convert_unreachable_host() {
        // Nothing listens on port 9 locally
        let converter = CobaltConverter::new("http://127.0.0.1:9/api/json", reqwest::Client::new());
        let err = converter.convert(&request(FormatHint::Video)).await.unwrap_err();
        assert!(matches!(err, ResolveError::ProviderUnreachable(_)));
    }
}
