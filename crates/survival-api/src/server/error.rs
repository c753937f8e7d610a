#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug)]
struct HttpApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl HttpApiError {
    fn survivor_not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorBody::new("Survivor not found"),
        }
    }

    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody::new(message),
        }
    }
}

impl From<GameError> for HttpApiError {
    fn from(err: GameError) -> Self {
        let status = match &err {
            GameError::NotFound { .. } => StatusCode::NOT_FOUND,
            GameError::InvalidState { .. } | GameError::MissingField { .. } => {
                StatusCode::BAD_REQUEST
            }
            // Unrecognised decisions answer 200 with an error body.
            GameError::InvalidChoice { .. } => StatusCode::OK,
        };
        Self {
            status,
            body: ErrorBody::new(err.to_string()),
        }
    }
}

impl IntoResponse for HttpApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
