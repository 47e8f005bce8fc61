//! Award store endpoints.
//!
//! The store lives behind a single base URL supplied at build time through
//! the `AWARDS_API_URL` environment variable. When the variable is unset the
//! requests use same-origin relative paths.

/// Base URL of the award store, resolved at compile time.
pub fn api_base_url() -> &'static str {
    option_env!("AWARDS_API_URL").unwrap_or("")
}

/// Collection endpoint: list (GET) and create (POST).
pub fn awards_url() -> String {
    format!("{}/api/awards", api_base_url())
}

/// Item endpoint: delete (DELETE) by store-assigned id.
pub fn award_url(id: &str) -> String {
    format!("{}/api/awards/{}", api_base_url(), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_share_the_configured_base() {
        assert_eq!(awards_url(), format!("{}/api/awards", api_base_url()));
        assert!(award_url("6543f0c2a1").ends_with("/api/awards/6543f0c2a1"));
    }
}
