use tabled::{Table, settings::Style};

use crate::{
    config::Config,
    error,
    error::ValidationError,
    spotify::SpotifyClient,
    success,
    types::{PlaylistSummary, ValidationResult, ValidationTableRow},
    validator, warning,
};

/// Validates a single playlist URL and prints the outcome.
///
/// With `json` set, prints the exact body the HTTP endpoint would return.
/// Exits with status 1 when the playlist is not valid.
pub async fn validate(config: Config, playlist_url: String, json: bool) {
    let client = match SpotifyClient::new(&config) {
        Ok(client) => client,
        Err(e) => error!("Failed to build HTTP client: {}", e),
    };

    let result = match validator::validate_playlist(&client, &playlist_url).await {
        Ok(summary) => {
            if !json {
                print_summary(&summary);
            }
            ValidationResult::valid(summary)
        }
        Err(e) => {
            report(&e);
            e.to_result()
        }
    };

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(body) => println!("{}", body),
            Err(e) => error!("Failed to serialize result: {}", e),
        }
    }

    if !result.is_valid() {
        std::process::exit(1);
    }
}

fn print_summary(summary: &PlaylistSummary) {
    let rows = vec![
        ValidationTableRow::new("name", summary.name.as_str()),
        ValidationTableRow::new("description", summary.description.as_str()),
        ValidationTableRow::new("tracks", summary.tracks.to_string()),
        ValidationTableRow::new("owner", summary.owner.clone().unwrap_or_default()),
        ValidationTableRow::new("image", summary.image.clone().unwrap_or_default()),
        ValidationTableRow::new(
            "external url",
            summary.external_url.clone().unwrap_or_default(),
        ),
        ValidationTableRow::new("playlist id", summary.playlist_id.as_str()),
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    success!("Playlist is valid");
    println!("{}", table);
}

fn report(e: &ValidationError) {
    match e {
        ValidationError::Internal(source) => warning!(
            "{}: {}",
            e,
            error::error_chain(source.as_ref())
        ),
        ValidationError::Inaccessible(reason) => warning!("{}: {}", e, reason),
        _ => warning!("{}", e),
    }
}
