//! reqwest-backed transport.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use iga_core::ports::{
    FormField, FormValue, HttpRequest, HttpResponse, HttpTransport, Method, RequestBody,
    TransportError,
};

use super::HttpConfig;

pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: HttpConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        tracing::info!(base_url = %config.base_url, timeout = ?config.timeout, "HTTP transport ready");

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create from environment configuration.
    pub fn from_env() -> Result<Self, TransportError> {
        Self::new(HttpConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

fn into_form(fields: Vec<FormField>) -> Result<Form, TransportError> {
    let mut form = Form::new();
    for field in fields {
        form = match field.value {
            FormValue::Text(text) => form.text(field.name, text),
            FormValue::File(file) => {
                let mut part = Part::bytes(file.bytes).file_name(file.file_name);
                if let Some(content_type) = file.content_type {
                    part = part
                        .mime_str(&content_type)
                        .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
                }
                form.part(field.name, part)
            }
        };
    }
    Ok(form)
}

fn map_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_builder() {
        TransportError::InvalidRequest(e.to_string())
    } else {
        TransportError::Connection(e.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, self.url(&request.path));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Multipart(fields) => builder.multipart(into_form(fields)?),
        };

        let started = Instant::now();
        let response = builder.send().await.map_err(map_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await.map_err(map_error)?.to_vec();

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "HTTP response"
        );

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iga_core::ports::FileUpload;

    #[test]
    fn test_url_joining() {
        let transport =
            ReqwestTransport::new(HttpConfig::default().with_base_url("http://api.local/api/v1/"))
                .unwrap();
        assert_eq!(transport.base_url(), "http://api.local/api/v1");
        assert_eq!(transport.url("/courses/all"), "http://api.local/api/v1/courses/all");
        assert_eq!(transport.url("courses/all"), "http://api.local/api/v1/courses/all");
    }

    #[test]
    fn test_form_rejects_bad_mime() {
        let fields = vec![FormField::file(
            "image",
            FileUpload::new("a.png", vec![1, 2, 3]).with_content_type("not a mime"),
        )];
        assert!(matches!(into_form(fields), Err(TransportError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_transport_error() {
        let transport = ReqwestTransport::new(
            HttpConfig::default()
                .with_base_url("http://127.0.0.1:9")
                .with_timeout(std::time::Duration::from_secs(2)),
        )
        .unwrap();

        let result = transport.send(HttpRequest::get("/courses/all")).await;
        assert!(result.is_err());
    }
}
