fn apply_cors_headers(headers: &mut axum::http::HeaderMap) {
    headers.insert(
        HeaderName::from_static("access-control-allow-origin"),
        HeaderValue::from_static("*"),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-methods"),
        HeaderValue::from_static("GET,POST,OPTIONS"),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-headers"),
        HeaderValue::from_static("*"),
    );
    headers.insert(
        HeaderName::from_static("access-control-max-age"),
        HeaderValue::from_static("3600"),
    );
}

/// Only bare ASCII digits can name a survivor; signs, padding, and overflow are not found.
fn parse_survivor_id(raw: &str) -> Result<u64, HttpApiError> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(HttpApiError::survivor_not_found());
    }

    raw.parse::<u64>()
        .map_err(|_| HttpApiError::survivor_not_found())
}

/// An empty body reads as `{}`; anything else must be a JSON object of the expected shape.
fn parse_json_body<T>(body: &[u8]) -> Result<T, HttpApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice::<T>(body)
        .map_err(|err| HttpApiError::bad_request(format!("Malformed request body: {err}")))
}
