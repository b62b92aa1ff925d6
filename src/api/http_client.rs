use super::*;

impl ApiClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder, ApiError> {
        self.request_as(method, path, &self.credentials)
    }

    /// Like [`ApiClient::request`] but with explicit credentials.
    pub(super) fn request_as(
        &self,
        method: Method,
        path: &str,
        credentials: &Credentials,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let headers = build_headers(credentials)?;
        tracing::debug!(method = method.as_str(), path, "dispatch api request");
        Ok(self.client.request(method, self.url(path)).headers(headers))
    }

    /// Sends `req` and maps any non-2xx status through `ctx`.
    pub(super) async fn send(
        &self,
        req: reqwest::RequestBuilder,
        ctx: &ErrorContext,
    ) -> Result<reqwest::Response, ApiError> {
        let resp = req.send().await.map_err(|source| ApiError::Network {
            operation: ctx.operation,
            source,
        })?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        tracing::debug!(status = status.as_u16(), operation = ctx.operation, "api request refused");
        Err(ctx.status_error(status))
    }

    pub(super) async fn send_json<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        ctx: &ErrorContext,
    ) -> Result<T, ApiError> {
        let resp = self.send(req, ctx).await?;
        decode(resp, ctx.operation).await
    }

    /// Sends a request whose response body is irrelevant (204s, flag updates).
    pub(super) async fn send_empty(
        &self,
        req: reqwest::RequestBuilder,
        ctx: &ErrorContext,
    ) -> Result<(), ApiError> {
        let _ = self.send(req, ctx).await?;
        Ok(())
    }
}

pub(super) async fn decode<T: DeserializeOwned>(
    resp: reqwest::Response,
    operation: &'static str,
) -> Result<T, ApiError> {
    let bytes = resp
        .bytes()
        .await
        .map_err(|source| ApiError::Network { operation, source })?;
    serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode { operation, source })
}
