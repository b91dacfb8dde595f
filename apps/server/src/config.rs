use std::{net::SocketAddr, time::Duration};

use spendwise_mailer::MailSettings;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub database_url: String,
    /// Session token signing key. Generated (and logged) when unset;
    /// set it explicitly outside of development.
    pub secret_key: Option<String>,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub mail: MailSettings,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid LISTEN_ADDR");
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "data/spendwise.db".into());
        let secret_key = std::env::var("SECRET_KEY").ok().filter(|s| !s.is_empty());
        let cors_allow = std::env::var("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "./static".into());

        let mail = MailSettings {
            server: std::env::var("MAIL_SERVER").ok().filter(|s| !s.is_empty()),
            port: std::env::var("MAIL_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(587),
            username: std::env::var("MAIL_USERNAME").ok(),
            password: std::env::var("MAIL_PASSWORD").ok(),
            use_tls: std::env::var("MAIL_USE_TLS")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(true),
            from: std::env::var("MAIL_FROM").ok(),
        };

        Self {
            listen_addr,
            database_url,
            secret_key,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            mail,
        }
    }
}
