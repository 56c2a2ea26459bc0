mod cli;
mod infra;
mod reports;
mod routes;
mod server;

use siam_navigator::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
