//! Generic HTTP fetching with status classification and JSON error handling

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` and deserializes the JSON body into `T`.
///
/// Non-success statuses map to specific [`AppError`] variants (404 not found,
/// 429 rate limit, other 4xx client errors, 502/503 unavailable, other 5xx
/// server errors). Body failures are split into empty body, non-JSON body and
/// JSON of an unexpected shape. Nothing is retried.
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    serde_json::from_str::<T>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            &response_text.chars().take(200).collect::<String>()
        );

        let trimmed = response_text.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::data_fetcher::models::SeasonRulesResponse;
    use serde_json::{Value, json};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(template: ResponseTemplate) -> (MockServer, String) {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doc"))
            .respond_with(template)
            .mount(&mock_server)
            .await;
        let url = format!("{}/doc", mock_server.uri());
        (mock_server, url)
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let (_server, url) =
            serve(ResponseTemplate::new(200).set_body_json(json!({"a": 1}))).await;
        let value: Value = fetch(&create_test_http_client(), &url).await.unwrap();
        assert_eq!(value["a"], 1);
    }

    #[tokio::test]
    async fn test_fetch_status_classification() {
        let client = create_test_http_client();
        let cases = [
            (404, "ApiNotFound"),
            (429, "ApiRateLimit"),
            (400, "ApiClientError"),
            (503, "ApiServiceUnavailable"),
            (502, "ApiServiceUnavailable"),
            (500, "ApiServerError"),
        ];

        for (status, expected) in cases {
            let (_server, url) = serve(ResponseTemplate::new(status)).await;
            let err = fetch::<Value>(&client, &url).await.unwrap_err();
            let matched = match &err {
                AppError::ApiNotFound { .. } => "ApiNotFound",
                AppError::ApiRateLimit { .. } => "ApiRateLimit",
                AppError::ApiClientError { .. } => "ApiClientError",
                AppError::ApiServiceUnavailable { .. } => "ApiServiceUnavailable",
                AppError::ApiServerError { .. } => "ApiServerError",
                _ => "other",
            };
            assert_eq!(matched, expected, "status {status} gave {err:?}");
        }
    }

    #[tokio::test]
    async fn test_fetch_body_errors() {
        let client = create_test_http_client();

        let (_s1, url) = serve(ResponseTemplate::new(200).set_body_string("")).await;
        let err = fetch::<Value>(&client, &url).await.unwrap_err();
        assert!(matches!(err, AppError::ApiNoData { .. }));

        let (_s2, url) =
            serve(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;
        let err = fetch::<Value>(&client, &url).await.unwrap_err();
        assert!(matches!(err, AppError::ApiMalformedJson { .. }));

        let (_s3, url) =
            serve(ResponseTemplate::new(200).set_body_json(json!({"data": "nope"}))).await;
        let err = fetch::<SeasonRulesResponse>(&client, &url).await.unwrap_err();
        assert!(matches!(err, AppError::ApiUnexpectedStructure { .. }));
    }
}
