use std::{env, path::PathBuf};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MODEL_FILE: &str = "model.json";

/// Where the service listens and which model it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub listen_addr: String,
    pub model_path: PathBuf,
}

impl Default for ServiceConfig {
    /// Listens on `127.0.0.1:5000` and expects the model next to the crate.
    fn default() -> Self {
        Self {
            listen_addr: format!("{DEFAULT_HOST}:{DEFAULT_PORT}"),
            model_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(MODEL_FILE),
        }
    }
}

impl ServiceConfig {
    /// Applies the optional `HOST`, `PORT` and `MODEL_PATH` overrides to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());

        Self {
            listen_addr: format!("{host}:{port}"),
            model_path: lookup("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServiceConfig::from_lookup(lookup(&[]));

        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.listen_addr, "127.0.0.1:5000");
        assert!(config.model_path.ends_with("model.json"));
    }

    #[test]
    fn overrides() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("MODEL_PATH", "/models/loan.json"),
        ]));

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.model_path, PathBuf::from("/models/loan.json"));
    }
}
