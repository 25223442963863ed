pub mod dashboard;

use crate::config::Config;

/// Joins an endpoint path onto the configured base URL.
pub fn api_url(config: &Config, path: &str) -> String {
    let base_url = config.api_base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base_url, path)
    } else {
        format!("{}/{}", base_url, path)
    }
}
