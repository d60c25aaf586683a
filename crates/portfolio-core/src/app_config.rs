#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Site root the catalog document is served from, e.g. `"https://jdreditora.com.br"`.
    pub site_url: String,
    /// Path of the catalog document relative to `site_url`.
    pub catalog_path: String,
    /// Origin prepended to site-relative image paths (no trailing slash).
    pub image_origin: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub page_size: usize,
}
