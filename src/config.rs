use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    /// Shared HS256 signing key. Required: the process must not serve
    /// requests without it.
    pub jwt_secret: String,
    /// Token validity window in hours.
    pub token_ttl_hours: i64,
    /// Allowed CORS origin; "*" allows any origin.
    pub cors_origin: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("POSTGRES_URI");
        let jwt_secret: String = Self::get_env("JWT_SECRET");

        EnvConfig {
            port: env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8080),
            db_url,
            jwt_secret,
            token_ttl_hours: env::var("TOKEN_TTL_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),
            cors_origin: env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string()),
        }
    }
}
