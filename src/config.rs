use std::path::PathBuf;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "hangman_duel=info,tower_http=warn";

/// Runtime settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Port the HTTP server listens on (`PORT`, default 8000)
    pub port: u16,
    /// Word bank store file (`HANGMAN_STORE`)
    pub store_path: PathBuf,
    /// Fixed seed for word selection (`HANGMAN_SEED`)
    pub seed: Option<u64>,
    /// `ENVIRONMENT=development` or `dev`
    pub development: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            store_path: PathBuf::from("hangman-store.json"),
            seed: None,
            development: false,
        }
    }
}

impl Config {
    /// Load `.env` into the process environment if present
    ///
    /// Existing variables take precedence over the file.
    pub fn load_dotenv() -> Option<PathBuf> {
        dotenvy::dotenv().ok()
    }

    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup
    ///
    /// Unparseable values fall back to the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let store_path = lookup("HANGMAN_STORE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.store_path);

        let seed = lookup("HANGMAN_SEED").and_then(|raw| match raw.parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                tracing::warn!("Invalid HANGMAN_SEED {:?}, using a random seed", raw);
                None
            }
        });

        let development = matches!(
            lookup("ENVIRONMENT").as_deref(),
            Some("development") | Some("dev")
        );

        Self {
            port,
            store_path,
            seed,
            development,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
