//! Backend location rules.
//!
//! During local development the backend runs on its own port; once deployed
//! it sits behind the same origin as the static site.

/// Backend used when the page is served from a developer machine.
pub const LOCAL_API_BASE: &str = "http://localhost:8000";

/// Resolve the API base URL from the page location parts.
pub fn resolve_api_base(protocol: &str, hostname: &str, origin: &str) -> String {
    let is_local = matches!(hostname, "localhost" | "127.0.0.1") || protocol == "file:";
    if is_local {
        LOCAL_API_BASE.to_string()
    } else {
        origin.trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localhost_uses_dev_backend() {
        assert_eq!(
            resolve_api_base("http:", "localhost", "http://localhost:8080"),
            LOCAL_API_BASE
        );
        assert_eq!(
            resolve_api_base("http:", "127.0.0.1", "http://127.0.0.1:8080"),
            LOCAL_API_BASE
        );
    }

    #[test]
    fn test_file_protocol_uses_dev_backend() {
        assert_eq!(resolve_api_base("file:", "", "null"), LOCAL_API_BASE);
    }

    #[test]
    fn test_deployed_uses_origin() {
        assert_eq!(
            resolve_api_base("https:", "justlaw.app", "https://justlaw.app/"),
            "https://justlaw.app"
        );
    }
}
