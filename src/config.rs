use std::ffi::OsString;
use std::time::Duration;

use clap::{Args, Parser};

use crate::constants::{DEFAULT_APP_NAME, DEFAULT_TIMEOUT_MS};

#[derive(Debug, Clone, Parser)]
#[command(name = "cognitive-twin-db")]
pub struct Config {
    #[command(flatten)]
    pub database: DatabaseSettings,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Reads `.env` if present, then the process environment. Command line
    /// arguments are ignored so library callers are not tied to `argv`.
    pub fn load() -> Result<Self, clap::Error> {
        Self::load_from([env!("CARGO_PKG_NAME")])
    }

    /// Like [`Config::load`], with flags from `args` taking precedence over
    /// the environment.
    pub fn load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        dotenvy::dotenv().ok();
        Self::try_parse_from(args)
    }
}

#[derive(Debug, Clone, Args)]
pub struct DatabaseSettings {
    #[clap(long, env)]
    pub mongodb_uri: Option<String>,

    #[clap(long, env)]
    pub mongodb_db_name: Option<String>,

    #[clap(long, env, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub mongodb_connect_timeout_ms: u64,

    #[clap(long, env, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub mongodb_server_selection_timeout_ms: u64,

    #[clap(long, env, default_value = DEFAULT_APP_NAME)]
    pub mongodb_app_name: String,
}

impl DatabaseSettings {
    pub fn new(mongodb_uri: impl Into<String>) -> Self {
        Self {
            mongodb_uri: Some(mongodb_uri.into()),
            ..Self::default()
        }
    }

    /// The connection string, treating an empty value as unset. Values are
    /// otherwise used as given.
    pub fn uri(&self) -> Option<&str> {
        non_empty(self.mongodb_uri.as_deref())
    }

    pub fn db_name_override(&self) -> Option<&str> {
        non_empty(self.mongodb_db_name.as_deref())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.mongodb_connect_timeout_ms)
    }

    pub fn server_selection_timeout(&self) -> Duration {
        Duration::from_millis(self.mongodb_server_selection_timeout_ms)
    }

    /// Upper bound for a whole connection attempt.
    pub fn connect_budget(&self) -> Duration {
        self.connect_timeout() + self.server_selection_timeout()
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            mongodb_uri: None,
            mongodb_db_name: None,
            mongodb_connect_timeout_ms: DEFAULT_TIMEOUT_MS,
            mongodb_server_selection_timeout_ms: DEFAULT_TIMEOUT_MS,
            mongodb_app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_database_settings() {
        let config = Config::try_parse_from([
            "cognitive-twin-db",
            "--mongodb-uri",
            "mongodb://localhost:27017/twin",
            "--mongodb-db-name",
            "override",
            "--mongodb-server-selection-timeout-ms",
            "250",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.database.uri(), Some("mongodb://localhost:27017/twin"));
        assert_eq!(config.database.db_name_override(), Some("override"));
        assert_eq!(
            config.database.server_selection_timeout(),
            Duration::from_millis(250)
        );
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn timeouts_default_to_ten_seconds() {
        let settings = DatabaseSettings::new("mongodb://localhost");

        assert_eq!(settings.connect_timeout(), Duration::from_secs(10));
        assert_eq!(settings.server_selection_timeout(), Duration::from_secs(10));
        assert_eq!(settings.connect_budget(), Duration::from_secs(20));
        assert_eq!(settings.mongodb_app_name, "cognitive-twin");
    }

    #[test]
    fn empty_values_count_as_unset() {
        let settings = DatabaseSettings {
            mongodb_uri: Some(String::new()),
            mongodb_db_name: Some(String::new()),
            ..DatabaseSettings::default()
        };

        assert_eq!(settings.uri(), None);
        assert_eq!(settings.db_name_override(), None);
    }

    #[test]
    fn name_override_is_used_verbatim() {
        let settings = DatabaseSettings {
            mongodb_db_name: Some(" mydb ".to_string()),
            ..DatabaseSettings::new("mongodb://localhost")
        };

        assert_eq!(settings.db_name_override(), Some(" mydb "));
    }

    #[test]
    fn load_from_reads_flags() {
        let config =
            Config::load_from(["cognitive-twin-db", "--mongodb-uri", "mongodb://db:27017"]).unwrap();

        assert_eq!(config.database.uri(), Some("mongodb://db:27017"));
    }
}
