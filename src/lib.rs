//! Spotify Playlist Validator Library
//!
//! This library validates Spotify playlist URLs on behalf of a frontend. For each
//! request it extracts the playlist id from the URL, obtains an app access token
//! through the client-credentials grant, fetches the playlist from the Spotify
//! Web API and reshapes the answer into a small normalized JSON payload.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for validation and health checks
//! - `cli` - Command-line entry points (`serve`, `validate`)
//! - `config` - Environment loading and the startup `Config` value
//! - `error` - Error types and their HTTP mapping
//! - `server` - Router construction and the HTTP listener
//! - `spotify` - Spotify Web API client (token exchange, playlist lookup)
//! - `types` - Request, response and upstream data structures
//! - `utils` - URL parsing and header helpers
//! - `validator` - The validation pipeline tying everything together
//!
//! # Example
//!
//! ```
//! use playlist_validator::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> playlist_validator::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod validator;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the process boundary (startup, server loop, CLI) where any error is
/// reported and ends the run. Inner layers return the typed errors from
/// [`error`].
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Validation server running on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal startup errors. Request handlers report failures with
/// [`warning!`] and keep serving.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Validation error: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
