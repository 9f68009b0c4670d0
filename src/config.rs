use std::env;

/// Configuração carregada das variáveis de ambiente (`.env` opcional via dotenv)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub booking: BookingSettings,
}

/// Knobs of the booking engine itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingSettings {
    /// When false, receipt lookups answer with the fixed London -> France
    /// route instead of the route given at purchase time.
    pub echo_purchase_route: bool,
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 50051;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("⚠️  Invalid PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]);

        let echo_purchase_route = match lookup("RECEIPT_ECHO_PURCHASE_ROUTE") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                log::warn!("⚠️  Invalid RECEIPT_ECHO_PURCHASE_ROUTE {:?}, using false", raw);
                false
            }),
            None => false,
        };

        Config {
            host,
            port,
            cors_allowed_origins,
            booking: BookingSettings { echo_purchase_route },
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
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
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.bind_address(), "0.0.0.0:50051");
        assert_eq!(config.cors_allowed_origins, vec!["http://localhost:3000"]);
        assert!(!config.booking.echo_purchase_route);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("RECEIPT_ECHO_PURCHASE_ROUTE", "TRUE"),
        ]);
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.cors_allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert!(config.booking.echo_purchase_route);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("PORT", "not-a-port"),
            ("CORS_ALLOWED_ORIGINS", " , "),
            ("RECEIPT_ECHO_PURCHASE_ROUTE", "maybe"),
        ]);
        assert_eq!(config.port, 50051);
        assert_eq!(config.cors_allowed_origins, vec!["http://localhost:3000"]);
        assert!(!config.booking.echo_purchase_route);
    }
}
