use aws_sdk_dynamodb::Client as DynamoClient;
use hogwarts_shared::config::{load_aws_config, Config};
use hogwarts_shared::dynamo::DynamoUserStore;
use hogwarts_shared::AppState;
use lambda_http::{run, service_fn, Error, Request};
use std::sync::Arc;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_http::tracing::init_default_subscriber();

    // Initialize the DynamoDB client once at startup
    let config = Config::from_env();
    let sdk_config = load_aws_config().await;
    tracing::info!("Users lambda starting with table {}", config.table_name);

    let state = AppState::new(DynamoUserStore::new(
        DynamoClient::new(&sdk_config),
        config.table_name,
    ));

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
