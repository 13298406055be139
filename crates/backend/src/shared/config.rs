use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding `upstream.base_url`
pub const UPSTREAM_URL_ENV: &str = "FEEDLINK_UPSTREAM_URL";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend (index.html + wasm bundle)
    pub static_dir: String,
    /// Request body limit for listing and CSV uploads
    pub max_upload_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            static_dir: "dist".into(),
            max_upload_mb: 20,
        }
    }
}

impl ServerConfig {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".into(),
            timeout_secs: 30,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"
max_upload_mb = 20

[upstream]
base_url = "http://127.0.0.1:8000"
timeout_secs = 30
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `FEEDLINK_UPSTREAM_URL` is applied on top of either.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_upstream_override(&mut config, std::env::var(UPSTREAM_URL_ENV).ok());
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            return Ok(config);
        } else {
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn apply_upstream_override(config: &mut Config, value: Option<String>) {
    if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        tracing::info!("Upstream URL overridden by {}: {}", UPSTREAM_URL_ENV, url);
        config.upstream.base_url = url;
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

/// Resolve the static directory.
///
/// Relative paths are tried next to the executable first, then against the
/// working directory.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Some(candidate) = exe_dir().map(|d| d.join(dir)) {
        if candidate.is_dir() {
            return candidate;
        }
    }

    dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.upstream.timeout_secs, 30);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[upstream]\nbase_url = \"http://listings:9000\"\n").unwrap();
        assert_eq!(config.upstream.base_url, "http://listings:9000");
        assert_eq!(config.upstream.timeout_secs, 30);
        assert_eq!(config.server.max_upload_mb, 20);
        assert_eq!(config.server.max_upload_bytes(), 20 * 1024 * 1024);
    }

    #[test]
    fn test_upstream_override() {
        let mut config = Config::default();
        apply_upstream_override(&mut config, Some("  ".into()));
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:8000");

        apply_upstream_override(&mut config, Some("http://10.0.0.5:8000".into()));
        assert_eq!(config.upstream.base_url, "http://10.0.0.5:8000");
    }

    #[test]
    fn test_absolute_static_dir_kept() {
        let mut config = Config::default();
        let abs = std::env::temp_dir().join("feedlink-dist");
        config.server.static_dir = abs.to_string_lossy().into_owned();
        assert_eq!(get_static_dir(&config), abs);
    }
}
