//! API utilities for frontend-backend communication

/// Port the backend listens on (see `[server] port` in config.toml)
pub const BACKEND_PORT: u16 = 3000;

fn base_from(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Base URL for API requests: the current host on the backend port,
/// e.g. `http://localhost:3000`. Empty when there is no window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from(&protocol, &hostname, BACKEND_PORT)
}

/// Full API URL for a path starting with `/api/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_location() {
        assert_eq!(base_from("http:", "localhost", 3000), "http://localhost:3000");
        assert_eq!(base_from("https:", "feedlink.example", 3000), "https://feedlink.example:3000");
    }
}
