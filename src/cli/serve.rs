use crate::{config::Config, error, server};

/// Runs the HTTP service, optionally overriding the configured host and port.
pub async fn serve(mut config: Config, host: Option<String>, port: Option<u16>) {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    if let Err(e) = server::start_api_server(config).await {
        error!("Validation server failed: {}", e);
    }
}
