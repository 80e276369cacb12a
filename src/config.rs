use std::env;

use axum::http::HeaderValue;

/// Highest seat number handed out when booked seats are generated.
pub const DEFAULT_MAX_SEAT_NUMBER: i32 = 60;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub cors_origin: HeaderValue,
    pub max_seat_number: i32,
    pub seed_flights: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let max_seat_number: i32 = env::var("MAX_SEAT_NUMBER")
            .unwrap_or_else(|_| DEFAULT_MAX_SEAT_NUMBER.to_string())
            .parse()
            .expect("MAX_SEAT_NUMBER must be a number");
        assert!(max_seat_number >= 1, "MAX_SEAT_NUMBER must be at least 1");

        Self {
            database_url: env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set"),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string())
                .parse()
                .expect("CORS_ORIGIN must be a valid header value"),
            max_seat_number,
            seed_flights: env::var("SEED_FLIGHTS")
                .map(|v| parse_flag(&v).expect("SEED_FLIGHTS must be true or false"))
                .unwrap_or(true),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
