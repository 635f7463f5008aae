use crate::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub sqlx_logging: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let sqlx_logging = match std::env::var("SQLX_LOGGING") {
            Ok(value) => value
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidEnvValue {
                    var: "SQLX_LOGGING".to_string(),
                    reason: format!("expected true or false, got {value:?}"),
                })?,
            Err(_) => false,
        };

        Ok(Self {
            database_url,
            sqlx_logging,
        })
    }
}
