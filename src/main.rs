use logrero::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    logrero::app::run().await
}
