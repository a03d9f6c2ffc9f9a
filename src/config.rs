use std::{env, net::SocketAddr, path::PathBuf};

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub seed_sample_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        let seed_sample_data = match env::var("SEED_SAMPLE_DATA") {
            Ok(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::Config(format!("invalid SEED_SAMPLE_DATA: {raw:?}"))
            })?,
            Err(_) => true,
        };

        Ok(Self {
            listen_addr,
            static_dir,
            seed_sample_data,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("static"),
            seed_sample_data: true,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn flags() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
