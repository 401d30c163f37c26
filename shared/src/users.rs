use lambda_http::{
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    Body, Error, Response,
};

use crate::responses::{client_error, json_response, server_error};
use crate::store::UserStore;
use crate::types::{User, UserRequest};
use crate::validation::{is_valid_email, now_timestamp, parse_house, DEFAULT_EMAIL};

/// HeaderMap lookups are case-insensitive, so any spelling of the name works.
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "application/json")
}

/// A `null` body is valid JSON and reads as a request with every field absent.
fn parse_request(body: &[u8]) -> Result<UserRequest, serde_json::Error> {
    serde_json::from_slice::<Option<UserRequest>>(body).map(Option::unwrap_or_default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Create (or overwrite) a user record
pub async fn create_user(
    store: &dyn UserStore,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    if !is_json(headers) {
        return client_error(StatusCode::NOT_ACCEPTABLE);
    }

    let req = match parse_request(body) {
        Ok(req) => req,
        Err(e) => {
            tracing::info!("Rejecting create body: {}", e);
            return client_error(StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    let email = req.email.unwrap_or_default();
    tracing::info!(
        "Create user email: {} house: {} updatedAt: {}",
        email,
        req.hogwarts_house.as_deref().unwrap_or(""),
        req.updated_at.as_deref().unwrap_or("")
    );

    if !is_valid_email(&email) {
        return client_error(StatusCode::BAD_REQUEST);
    }

    let updated_at = non_empty(req.updated_at).unwrap_or_else(now_timestamp);

    let hogwarts_house = match parse_house(req.hogwarts_house.as_deref()) {
        Ok(house) => house,
        Err(e) => {
            tracing::info!("Rejecting create for {}: {}", email, e);
            return client_error(StatusCode::BAD_REQUEST);
        }
    };
    tracing::info!("House found: {}", hogwarts_house);

    let user = User {
        hogwarts_house,
        email,
        updated_at,
    };

    if let Err(e) = store.put(&user).await {
        return server_error(e);
    }

    Ok(Response::builder()
        .status(StatusCode::CREATED)
        .header("Location", format!("/users?email={}", user.email))
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Empty)
        .map_err(Box::new)?)
}

/// Get a user by email, defaulting to the test address when none is given
pub async fn get_user(store: &dyn UserStore, email: Option<&str>) -> Result<Response<Body>, Error> {
    tracing::info!("Request email: {}", email.unwrap_or(""));

    let email = email.unwrap_or(DEFAULT_EMAIL);
    tracing::info!("Request email after default: {}", email);

    if !is_valid_email(email) {
        return client_error(StatusCode::BAD_REQUEST);
    }

    match store.get(email).await {
        Ok(Some(user)) => json_response(StatusCode::OK, &user),
        Ok(None) => client_error(StatusCode::NOT_FOUND),
        Err(e) => server_error(e),
    }
}

/// Set house and timestamp on a user, returning the record as stored
pub async fn update_user(
    store: &dyn UserStore,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    if !is_json(headers) {
        return client_error(StatusCode::NOT_ACCEPTABLE);
    }

    let req = match parse_request(body) {
        Ok(req) => req,
        Err(e) => {
            tracing::info!("Rejecting update body: {}", e);
            return client_error(StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    tracing::info!(
        "Update user email: {} house: {} updatedAt: {}",
        req.email.as_deref().unwrap_or(""),
        req.hogwarts_house.as_deref().unwrap_or(""),
        req.updated_at.as_deref().unwrap_or("")
    );

    // Unlike create, a bad address falls back to the test user instead of failing.
    let email = match req.email {
        Some(email) if is_valid_email(&email) => email,
        _ => DEFAULT_EMAIL.to_string(),
    };

    // lastUpdated wins over updatedAt when both are sent
    let updated_at = non_empty(req.last_updated)
        .or_else(|| non_empty(req.updated_at))
        .unwrap_or_else(now_timestamp);

    let hogwarts_house = match parse_house(req.hogwarts_house.as_deref()) {
        Ok(house) => house,
        Err(e) => {
            tracing::info!("Rejecting update for {}: {}", email, e);
            return client_error(StatusCode::BAD_REQUEST);
        }
    };
    tracing::info!("House found: {}", hogwarts_house);

    match store.update_fields(&email, hogwarts_house, &updated_at).await {
        Ok(user) => json_response(StatusCode::OK, &user),
        Err(e) => server_error(e),
    }
}
