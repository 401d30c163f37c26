use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

/// 200-style response with a JSON body.
pub fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::to_string(value)?.into())
        .map_err(Box::new)?)
}

/// Client error with the status reason phrase as the body.
pub fn client_error(status: StatusCode) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", "*")
        .body(status.canonical_reason().unwrap_or_default().into())
        .map_err(Box::new)?)
}

/// Logs the detail and answers with a bare 500.
pub fn server_error(err: impl std::fmt::Display) -> Result<Response<Body>, Error> {
    tracing::error!("{}", err);
    client_error(StatusCode::INTERNAL_SERVER_ERROR)
}
