//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum_reverse_proxy::ReverseProxy;
use tower_http::services::{ServeDir, ServeFile};

/// Frontend serving mode.
#[derive(Debug, Clone)]
pub enum FrontendMode {
    /// Proxy requests to a development server (e.g., Dioxus dx serve).
    Proxy { target: String },
    /// Serve static files from a directory.
    Static { dir: String },
    /// No frontend serving - API only.
    Disabled,
}

impl FrontendMode {
    /// Environment variables:
    /// - `SCHOLARQA_FRONTEND_MODE`: "proxy" | "static" | "disabled" (default: "disabled")
    /// - `SCHOLARQA_PROXY_TARGET`: target URL for proxy mode
    /// - `SCHOLARQA_STATIC_DIR`: directory for static mode
    pub fn from_env() -> Self {
        Self::parse(
            std::env::var("SCHOLARQA_FRONTEND_MODE").ok(),
            std::env::var("SCHOLARQA_PROXY_TARGET").ok(),
            std::env::var("SCHOLARQA_STATIC_DIR").ok(),
        )
    }

    fn parse(
        mode: Option<String>,
        proxy_target: Option<String>,
        static_dir: Option<String>,
    ) -> Self {
        match mode.unwrap_or_default().to_lowercase().as_str() {
            "proxy" => FrontendMode::Proxy {
                target: proxy_target.unwrap_or_else(|| "http://localhost:8081".to_string()),
            },
            "static" => FrontendMode::Static {
                dir: static_dir.unwrap_or_else(|| "./crates/client/dist".to_string()),
            },
            _ => FrontendMode::Disabled,
        }
    }

    /// Attach frontend serving to a finished API router. Unmatched routes
    /// fall through to the proxy or the static index.
    pub fn attach(&self, router: Router) -> Router {
        match self {
            FrontendMode::Proxy { target } => {
                tracing::info!("Frontend mode: proxy to {}", target);
                let proxy: Router = ReverseProxy::new("/", target).into();
                router.merge(proxy)
            }
            FrontendMode::Static { dir } => {
                tracing::info!("Frontend mode: static files from {}", dir);
                let path = PathBuf::from(dir);
                let index_path = path.join("index.html");
                let serve_dir = ServeDir::new(&path).fallback(ServeFile::new(index_path));
                router.fallback_service(serve_dir)
            }
            FrontendMode::Disabled => {
                tracing::info!("Frontend mode: disabled (API only)");
                router
            }
        }
    }
}

/// Full server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Base URL of the extraction-search engine.
    pub retrieval_url: String,
    /// Base URL of the QA inference service.
    pub inference_url: String,
    /// Cap on candidate passages run through extraction per ask.
    pub max_candidates: u32,
    pub frontend: FrontendMode,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: parse_bind_addr(std::env::var("SCHOLARQA_BIND").ok()),
            retrieval_url: std::env::var("SCHOLARQA_RETRIEVAL_URL")
                .unwrap_or_else(|_| "http://localhost:5001".to_string()),
            inference_url: std::env::var("SCHOLARQA_INFERENCE_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            max_candidates: parse_max_candidates(std::env::var("SCHOLARQA_MAX_CANDIDATES").ok()),
            frontend: FrontendMode::from_env(),
        }
    }
}

fn parse_bind_addr(raw: Option<String>) -> SocketAddr {
    raw.and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)))
}

fn parse_max_candidates(raw: Option<String>) -> u32 {
    raw.and_then(|s| s.parse().ok())
        .filter(|n| *n > 0)
        .unwrap_or(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontend_mode_defaults_to_disabled() {
        assert!(matches!(
            FrontendMode::parse(None, None, None),
            FrontendMode::Disabled
        ));
        assert!(matches!(
            FrontendMode::parse(Some("nonsense".to_string()), None, None),
            FrontendMode::Disabled
        ));
    }

    #[test]
    fn frontend_mode_is_case_insensitive() {
        let mode = FrontendMode::parse(Some("PROXY".to_string()), None, None);
        assert!(matches!(mode, FrontendMode::Proxy { .. }));
    }

    #[test]
    fn static_mode_honors_the_configured_dir() {
        let mode = FrontendMode::parse(
            Some("static".to_string()),
            None,
            Some("/srv/scholarqa".to_string()),
        );
        match mode {
            FrontendMode::Static { dir } => assert_eq!(dir, "/srv/scholarqa"),
            other => panic!("unexpected mode: {other:?}"),
        }
    }

    #[test]
    fn bind_addr_falls_back_on_garbage() {
        assert_eq!(
            parse_bind_addr(Some("not-an-addr".to_string())),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert_eq!(
            parse_bind_addr(Some("127.0.0.1:9000".to_string())),
            SocketAddr::from(([127, 0, 0, 1], 9000))
        );
    }

    #[test]
    fn max_candidates_rejects_zero() {
        assert_eq!(parse_max_candidates(Some("0".to_string())), 5);
        assert_eq!(parse_max_candidates(Some("12".to_string())), 12);
        assert_eq!(parse_max_candidates(None), 5);
    }
}
