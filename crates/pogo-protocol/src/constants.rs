//! Fixed protocol values.
//!
//! The frontend fingerprints clients by several envelope fields that carry
//! no meaning of their own. Every value here must match what the server
//! expects from this client generation, or requests are dropped without
//! an error status.

/// Request id sent in every envelope. Must match server expectation.
pub const REQUEST_ID: u64 = 8_145_806_132_888_207_460;

/// Status code sent in every request envelope. Must match server
/// expectation.
pub const REQUEST_STATUS_CODE: i32 = 2;

/// Envelope field 12. Must match server expectation.
pub const UNKNOWN12: i64 = 989;

/// Second field of the auth token block. Must match server expectation.
pub const AUTH_TOKEN_UNKNOWN2: i32 = 59;

/// Settings version the client claims to have. The server answers the
/// download-settings sub-request relative to this hash.
pub const DOWNLOAD_SETTINGS_HASH: &str = "05daf51635c82611d1aac95c0b051d3ec088a930";

/// Shared entry point used until the server assigns a dedicated endpoint.
pub const DEFAULT_URL: &str = "https://pgorelease.nianticlabs.com/plfe/rpc";

/// Builds the RPC URL for an endpoint fragment returned by the server.
pub fn endpoint_url(api_url: &str) -> String {
    format!("https://{api_url}/rpc")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_wraps_fragment() {
        assert_eq!(endpoint_url("abc123"), "https://abc123/rpc");
    }

    #[test]
    fn test_default_url_is_https() {
        assert!(DEFAULT_URL.starts_with("https://"));
        assert!(DEFAULT_URL.ends_with("/rpc"));
    }

    #[test]
    fn test_settings_hash_is_sha1_hex() {
        assert_eq!(DOWNLOAD_SETTINGS_HASH.len(), 40);
        assert!(DOWNLOAD_SETTINGS_HASH.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
