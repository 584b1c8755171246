use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub refresh_expiration_hours: i64,
    /// Whether a user may submit a quiz they already have a result for.
    pub allow_retakes: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "aula-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET")
                    .unwrap_or_else(|_| "dev_secret_key_change_in_production".to_string()),
            ),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),
            refresh_expiration_hours: env::var("REFRESH_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(168),
            allow_retakes: env::var("ALLOW_RETAKES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let jwt_secret = self.jwt_secret.expose_secret();

        if jwt_secret == "dev_secret_key_change_in_production" {
            panic!(
                "FATAL: JWT_SECRET is using default value! Set JWT_SECRET environment variable to a secure random string."
            );
        }

        if jwt_secret.len() < 32 {
            panic!(
                "FATAL: JWT_SECRET is too short ({}). Must be at least 32 characters for security.",
                jwt_secret.len()
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "aula-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:5173".to_string(),
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 1,
            refresh_expiration_hours: 168,
            allow_retakes: true,
        }
    }
}
