//! # CLI Module
//!
//! Command-line entry points of the playlist validator.
//!
//! - [`serve`] - Runs the HTTP validation service (the default command)
//! - [`validate`] - Validates one playlist URL from the terminal, printing a
//!   table or the JSON body the service would return
//!
//! ## Usage
//!
//! ```bash
//! playlist-validator                                   # serve on $PORT (3001)
//! playlist-validator serve --port 8080
//! playlist-validator validate https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M
//! playlist-validator validate --json <URL>
//! ```

mod serve;
mod validate;

pub use serve::serve;
pub use validate::validate;
