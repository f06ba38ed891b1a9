/// Deployment profile selected by the `APP_ENV` environment variable.
///
/// Profiles differ only in which database URL and secret key variables
/// they read; behavior is identical across them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Testing,
    Production,
}

impl AppEnv {
    /// Parse `APP_ENV`, defaulting to `Development`.
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV").as_deref() {
            Ok("production") => AppEnv::Production,
            Ok("testing") => AppEnv::Testing,
            _ => AppEnv::Development,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Active deployment profile.
    pub env: AppEnv,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Store connection string for the active profile.
    pub database_url: String,
    /// Application secret for the active profile, if configured.
    pub secret_key: Option<String>,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                     |
    /// |------------------------|---------------------------------------------|
    /// | `APP_ENV`              | `development`                               |
    /// | `HOST`                 | `0.0.0.0`                                   |
    /// | `PORT`                 | `8000`                                      |
    /// | `DATABASE_URL`         | (required; `TEST_DATABASE_URL` in testing)  |
    /// | `SECRET_KEY`           | unset (`TEST_`/`PROD_` prefix per profile)  |
    /// | `CORS_ORIGINS`         | `http://localhost,http://localhost:8080`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                        |
    pub fn from_env() -> Self {
        let env = AppEnv::from_env();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = match env {
            AppEnv::Testing => std::env::var("TEST_DATABASE_URL")
                .or_else(|_| std::env::var("DATABASE_URL"))
                .expect("TEST_DATABASE_URL or DATABASE_URL must be set"),
            _ => std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
        };

        let secret_key = match env {
            AppEnv::Development => std::env::var("SECRET_KEY").ok(),
            AppEnv::Testing => std::env::var("TEST_SECRET_KEY").ok(),
            AppEnv::Production => std::env::var("PROD_SECRET_KEY").ok(),
        };

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost,http://localhost:8080".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            env,
            host,
            port,
            database_url,
            secret_key,
            cors_origins,
            request_timeout_secs,
        }
    }
}
