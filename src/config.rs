use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub admin_token: String,
    pub studio_name: String,
}

pub const DEFAULT_ADMIN_TOKEN: &str = "changeme";

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| DEFAULT_ADMIN_TOKEN.to_string()),
            studio_name: env::var("STUDIO_NAME").unwrap_or_else(|_| "Photo Studio".to_string()),
        }
    }
}
