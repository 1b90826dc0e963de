mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use mind_os::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
