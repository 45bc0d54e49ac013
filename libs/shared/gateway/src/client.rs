use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use shared_config::AppConfig;
use shared_models::{ApiEnvelope, ApiResponse, AppError, Page};

pub struct BookingApiClient {
    client: Client,
    base_url: String,
    api_key: String,
    retry_attempts: u32,
}

impl BookingApiClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.booking_api_timeout_ms))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.booking_api_url.clone(),
            api_key: config.booking_api_key.clone(),
            retry_attempts: config.booking_api_retry_attempts,
        }
    }

    fn get_headers(&self, auth_token: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Ok(key) = HeaderValue::from_str(&self.api_key) {
            headers.insert("api-key", key);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = auth_token {
            if let Ok(bearer) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, bearer);
            }
        }

        headers
    }

    /// Issues the standard enveloped POST every backend operation uses.
    pub async fn post<T>(
        &self,
        endpoint: &str,
        parameters: Value,
        auth_token: Option<&str>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned,
    {
        self.post_with_page(endpoint, parameters, Page::default(), auth_token)
            .await
    }

    pub async fn post_with_page<T>(
        &self,
        endpoint: &str,
        parameters: Value,
        page: Page,
        auth_token: Option<&str>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned,
    {
        let envelope = ApiEnvelope::with_page(parameters, page);
        let body = serde_json::to_value(&envelope)
            .map_err(|e| AppError::Protocol(format!("failed to encode request: {}", e)))?;
        self.execute(reqwest::Method::POST, endpoint, Some(body), auth_token)
            .await
    }

    pub async fn get<T>(
        &self,
        endpoint: &str,
        auth_token: Option<&str>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned,
    {
        self.execute(reqwest::Method::GET, endpoint, None, auth_token)
            .await
    }

    async fn execute<T>(
        &self,
        method: reqwest::Method,
        endpoint: &str,
        body: Option<Value>,
        auth_token: Option<&str>,
    ) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let headers = self.get_headers(auth_token);

        let mut attempt = 0u32;
        loop {
            debug!("Request to {} (attempt {})", url, attempt + 1);

            let mut req = self
                .client
                .request(method.clone(), &url)
                .headers(headers.clone());
            if let Some(ref body_data) = body {
                req = req.json(body_data);
            }

            match req.send().await {
                Ok(response) => return self.decode_response(response).await,
                Err(e) => {
                    // Only transport-level failures retry; HTTP status
                    // and protocol errors surface immediately.
                    if attempt >= self.retry_attempts {
                        error!("Request to {} failed after {} attempts: {}", url, attempt + 1, e);
                        let msg = if e.is_timeout() {
                            "Превышено время ожидания ответа."
                        } else {
                            "Ошибка сети. Проверьте подключение к интернету."
                        };
                        return Err(AppError::Transport(msg.to_string()));
                    }
                    let delay = Duration::from_secs(1u64 << attempt);
                    warn!("Request to {} failed ({}), retrying in {:?}", url, e, delay);
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn decode_response<T>(&self, response: reqwest::Response) -> Result<ApiResponse<T>, AppError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        if !status.is_success() {
            error!("API error ({}): {}", status, text);
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    AppError::Auth("Не авторизован. Проверьте API ключ.".to_string())
                }
                StatusCode::NOT_FOUND => {
                    AppError::Rejected("Запрашиваемые данные не найдены.".to_string())
                }
                StatusCode::BAD_REQUEST => {
                    AppError::Rejected("Ошибка валидации данных.".to_string())
                }
                _ => AppError::Transport("Ошибка сервера. Попробуйте позже.".to_string()),
            });
        }

        decode_body(&text)
    }
}

/// Decodes a response body, recovering from the backend's habit of
/// concatenating multiple JSON objects into one payload: the first
/// well-formed object wins. If none is extractable the error is
/// protocol-class, which callers treat as transport (retryable).
fn decode_body<T>(text: &str) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    match serde_json::from_str::<T>(text) {
        Ok(value) => Ok(value),
        Err(first_err) => {
            warn!("Response was not a single JSON document ({}), recovering", first_err);
            let mut stream = serde_json::Deserializer::from_str(text).into_iter::<Value>();
            match stream.next() {
                Some(Ok(first)) => serde_json::from_value(first)
                    .map_err(|e| AppError::Protocol(format!("unexpected response shape: {}", e))),
                _ => Err(AppError::Protocol(
                    "no well-formed JSON object in response".to_string(),
                )),
            }
        }
    }
}
