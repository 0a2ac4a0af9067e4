use std::env;

// Runtime/server settings, all read from the environment.

pub fn http_port() -> u16 {
    env::var("CUSTOMER_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3004)
}

pub fn database_url() -> Option<String> {
    env::var("DATABASE_URL").ok()
}
