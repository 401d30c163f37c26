use hogwarts_shared::responses::{client_error, server_error};
use hogwarts_shared::{users, AppState};
use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, RequestExt, Response,
};
use std::sync::Arc;

/// Main Lambda handler - routes on method alone and never fails outward
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    tracing::info!("Users lambda invoked - Method: {}", method);

    let store = state.store.as_ref();
    let headers = event.headers();
    let body = event.body();

    let result = match method {
        &Method::GET => {
            let params = event.query_string_parameters_ref();
            let email = params.and_then(|params| params.first("email"));
            users::get_user(store, email).await
        }
        &Method::PUT => users::update_user(store, headers, body).await,
        &Method::POST => users::create_user(store, headers, body).await,
        _ => client_error(StatusCode::METHOD_NOT_ALLOWED),
    };

    match result {
        Ok(resp) => Ok(resp),
        Err(e) => server_error(e),
    }
}
