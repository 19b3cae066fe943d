/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Local development backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Base URL baked in at build time via `API_BASE_URL`, falling back to
    /// the local development default.
    pub fn from_env() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_local_backend() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_BASE_URL);
    }
}
