//! HTTP implementation of [`PackingApi`] on top of reqwest.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ApiError, ApiResult, PackingApi};
use crate::models::{NewPackList, PackList, PackListSummary};

/// Characters escaped in an id path segment (store ids are uuids)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// Error body returned by the server
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// REST client for the `/api/packing` resource
#[derive(Clone, Debug)]
pub struct HttpPackingApi {
    client: Client,
    base: String,
}

impl HttpPackingApi {
    /// `base` is the collection URL, e.g. `http://localhost:8080/api/packing`
    pub fn new(base: &str) -> Self {
        Self {
            client: Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/", self.base)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base, utf8_percent_encode(id, PATH_SEGMENT))
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// Map a non-success response onto the error taxonomy
async fn check(response: Response, id: Option<&str>) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|b| b.message)
        .unwrap_or(text);
    log::warn!("[API] {} {}", status, message);

    match status {
        StatusCode::NOT_FOUND => Err(ApiError::NotFound {
            id: id.unwrap_or_default().to_string(),
        }),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            Err(ApiError::Validation(message))
        }
        _ => Err(ApiError::Transport(format!("{}: {}", status, message))),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Transport(format!("malformed response: {}", e)))
}

#[async_trait(?Send)]
impl PackingApi for HttpPackingApi {
    async fn list_summaries(&self) -> ApiResult<Vec<PackListSummary>> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(transport)?;
        decode(check(response, None).await?).await
    }

    async fn fetch_by_id(&self, id: &str) -> ApiResult<PackList> {
        log::debug!("[API] GET {}", id);
        let response = self
            .client
            .get(self.item_url(id))
            .send()
            .await
            .map_err(transport)?;
        decode(check(response, Some(id)).await?).await
    }

    async fn create(&self, list: &NewPackList) -> ApiResult<PackList> {
        let response = self
            .client
            .post(&self.base)
            .json(list)
            .send()
            .await
            .map_err(transport)?;
        decode(check(response, None).await?).await
    }

    async fn replace_by_id(&self, id: &str, list: &PackList) -> ApiResult<()> {
        log::debug!("[API] PUT {} ({} items)", id, list.items.len());
        let response = self
            .client
            .put(self.item_url(id))
            .json(list)
            .send()
            .await
            .map_err(transport)?;
        check(response, Some(id)).await.map(|_| ())
    }

    async fn delete_by_id(&self, id: &str) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(transport)?;
        check(response, Some(id)).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_trim_trailing_slash() {
        let api = HttpPackingApi::new("http://localhost:8080/api/packing/");
        assert_eq!(api.collection_url(), "http://localhost:8080/api/packing/");
        assert_eq!(
            api.item_url("6f1c-aa_01"),
            "http://localhost:8080/api/packing/6f1c-aa_01"
        );
    }

    #[test]
    fn test_item_url_escapes_id() {
        let api = HttpPackingApi::new("http://localhost/api/packing");
        assert_eq!(api.item_url("a/b"), "http://localhost/api/packing/a%2Fb");
    }

    fn response(status: u16, body: &'static str) -> Response {
        Response::from(http::Response::builder().status(status).body(body).unwrap())
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let ok = check(response(204, ""), Some("abc")).await.unwrap();
        assert_eq!(ok.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_not_found_carries_requested_id() {
        let err = check(response(404, r#"{"message":"not found"}"#), Some("abc"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::NotFound { id: "abc".to_string() });
    }

    #[tokio::test]
    async fn test_bad_request_extracts_message() {
        let err = check(response(400, r#"{"message":"name is required"}"#), None)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Validation("name is required".to_string()));

        let err = check(response(422, r#"{"message":"missing field `name`"}"#), None)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Validation("missing field `name`".to_string()));
    }

    #[tokio::test]
    async fn test_server_error_is_transport() {
        let err = check(response(500, r#"{"message":"database is locked"}"#), Some("abc"))
            .await
            .unwrap_err();
        match err {
            ApiError::Transport(message) => {
                assert!(message.starts_with("500"));
                assert!(message.ends_with("database is locked"));
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_kept_verbatim() {
        let err = check(response(400, "Failed to parse the request body"), None)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Validation("Failed to parse the request body".to_string())
        );

        let err = check(response(502, "Bad Gateway"), None).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(ref m) if m.ends_with("Bad Gateway")));
    }
}
