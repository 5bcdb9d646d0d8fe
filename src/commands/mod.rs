/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod categories;

use tracing::debug;

use crate::cli::args::Command;
use crate::config::AppConfig;
use crate::product::ProductError;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `ProductError` on any command failure.
pub async fn dispatch(command: &Command) -> Result<(), ProductError> {
    match command {
        Command::Categories(args) => {
            let config = AppConfig::from_args(args);
            debug!(?config, "configuration");
            categories::run(&config).await
        }
    }
}
