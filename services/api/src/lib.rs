mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use stuttz_onboarding::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
