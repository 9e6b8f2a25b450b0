pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentApiConfig {
    pub base_url: String,
}

impl AgentApiConfig {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Join an endpoint path onto the base url, tolerating a trailing slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for AgentApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joining() {
        let config = AgentApiConfig::new("http://localhost:8080");
        assert_eq!(config.endpoint("/api/execute"), "http://localhost:8080/api/execute");

        let config = AgentApiConfig::new("https://agent.example.com/");
        assert_eq!(config.endpoint("api/execute"), "https://agent.example.com/api/execute");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(AgentApiConfig::default().base_url, "http://localhost:8080");
    }
}
