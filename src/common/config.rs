/// Application configuration constants
pub struct AppConfig;

impl AppConfig {
    // Management API
    pub const API_PORT: u16 = 8006;
    pub const API_SCHEME: &'static str = "https";
    pub const TICKET_PATH: &'static str = "/api2/json/access/ticket";
    pub const AUTH_COOKIE_NAME: &'static str = "PVEAuthCookie";
    pub const CSRF_HEADER_NAME: &'static str = "CSRFPreventionToken";

    // Credentials
    pub const DEFAULT_USERNAME: &'static str = "root";
    pub const DEFAULT_REALM: &'static str = "pam";

    // Network Configuration
    pub const MAX_CONCURRENT_CONNECTIONS: usize = 16;
    pub const CONNECTION_TIMEOUT_SECS: u64 = 30;

    // Units
    pub const BYTES_PER_TIB: u64 = 1 << 40;
}

/// Environment-specific configuration
pub struct EnvConfig;

impl EnvConfig {
    pub fn max_concurrent_connections(total_hosts: usize) -> usize {
        std::cmp::min(total_hosts, AppConfig::MAX_CONCURRENT_CONNECTIONS).max(1)
    }

    pub fn default_log_filter(verbose: bool) -> &'static str {
        if verbose {
            "thinpool_report=debug"
        } else {
            "thinpool_report=warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_concurrent_connections() {
        assert_eq!(EnvConfig::max_concurrent_connections(0), 1);
        assert_eq!(EnvConfig::max_concurrent_connections(5), 5);
        assert_eq!(
            EnvConfig::max_concurrent_connections(1000),
            AppConfig::MAX_CONCURRENT_CONNECTIONS
        );
    }

    #[test]
    fn test_bytes_per_tib() {
        assert_eq!(AppConfig::BYTES_PER_TIB, 1_099_511_627_776);
    }
}
