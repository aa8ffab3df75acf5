use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub port: u16,
    pub admin_email: String,
    pub admin_password: String,
    pub admin_full_name: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| {
                warn!("JWT_SECRET not set, using empty value");
                String::new()
            }),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(|| {
                    warn!("PORT not set or invalid, using default 5000");
                    5000
                }),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| {
                warn!("ADMIN_EMAIL not set, using default");
                "admin@clinic.local".to_string()
            }),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
                warn!("ADMIN_PASSWORD not set, using empty value");
                String::new()
            }),
            admin_full_name: env::var("ADMIN_FULL_NAME")
                .unwrap_or_else(|_| "Admin User".to_string()),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.jwt_secret.is_empty() && !self.admin_password.is_empty()
    }
}
