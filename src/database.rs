use mongodb::bson::doc;
use mongodb::error::ErrorKind;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tokio::sync::OnceCell;
use url::Url;

use crate::config::{Config, DatabaseSettings};
use crate::constants::FALLBACK_DATABASE_NAME;
use crate::errors::Error;
use crate::models::{Record, SimRun, Venture, VentureModel};

struct Connection {
    client: Client,
    database: Database,
}

/// Owns the MongoDB connection for the process.
///
/// Build one at startup and share it by reference. [`connect`] opens the
/// connection on first use; every other accessor only reads what `connect`
/// left behind and fails with [`Error::Uninitialized`] before that.
///
/// [`connect`]: DatabaseContext::connect
pub struct DatabaseContext {
    settings: DatabaseSettings,
    connection: OnceCell<Connection>,
}

impl DatabaseContext {
    pub fn new(settings: DatabaseSettings) -> Self {
        Self {
            settings,
            connection: OnceCell::new(),
        }
    }

    pub fn from_env() -> Result<Self, Error> {
        let config = Config::load()?;
        Ok(Self::new(config.database))
    }

    pub fn settings(&self) -> &DatabaseSettings {
        &self.settings
    }

    /// Opens the connection once and returns the database handle.
    ///
    /// Concurrent first calls share a single attempt. A failed attempt
    /// leaves the context unconnected.
    pub async fn connect(&self) -> Result<&Database, Error> {
        let connection = self
            .connection
            .get_or_try_init(|| open(&self.settings))
            .await?;

        Ok(&connection.database)
    }

    pub fn is_connected(&self) -> bool {
        self.connection.initialized()
    }

    pub fn database(&self) -> Result<&Database, Error> {
        self.connection
            .get()
            .map(|connection| &connection.database)
            .ok_or(Error::Uninitialized)
    }

    pub fn client(&self) -> Result<&Client, Error> {
        self.connection
            .get()
            .map(|connection| &connection.client)
            .ok_or(Error::Uninitialized)
    }

    pub fn database_name(&self) -> Result<&str, Error> {
        self.database().map(Database::name)
    }

    pub fn collection<T: Record>(&self) -> Result<Collection<T>, Error> {
        Ok(self.database()?.collection::<T>(T::COLLECTION_NAME))
    }

    pub fn ventures(&self) -> Result<Collection<Venture>, Error> {
        self.collection::<Venture>()
    }

    pub fn venture_models(&self) -> Result<Collection<VentureModel>, Error> {
        self.collection::<VentureModel>()
    }

    pub fn sim_runs(&self) -> Result<Collection<SimRun>, Error> {
        self.collection::<SimRun>()
    }
}

async fn open(settings: &DatabaseSettings) -> Result<Connection, Error> {
    let uri = settings
        .uri()
        .ok_or_else(|| Error::missing_config("MONGODB_URI"))?;

    let budget = settings.connect_budget();
    let connection = tokio::time::timeout(budget, establish(settings, uri))
        .await
        .map_err(|_| Error::connection_timeout(budget, "connection attempt did not complete"))??;

    tracing::info!(
        "[db] connected, database: \"{}\"",
        connection.database.name()
    );

    Ok(connection)
}

async fn establish(settings: &DatabaseSettings, uri: &str) -> Result<Connection, Error> {
    let mut options = ClientOptions::parse(uri).await?;
    options.connect_timeout = Some(settings.connect_timeout());
    options.server_selection_timeout = Some(settings.server_selection_timeout());
    options.app_name = Some(settings.mongodb_app_name.clone());

    let client = Client::with_options(options)?;

    // The driver connects lazily; a ping forces server selection now.
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|err| {
            if matches!(*err.kind, ErrorKind::ServerSelection { .. }) {
                Error::connection_timeout(settings.server_selection_timeout(), &err.to_string())
            } else {
                Error::Mongo(err)
            }
        })?;

    let name = resolve_database_name(settings.db_name_override(), uri);
    let database = client.database(&name);

    Ok(Connection { client, database })
}

/// Picks the database name: the explicit override, else the URI path, else
/// [`FALLBACK_DATABASE_NAME`]. Never fails.
pub fn resolve_database_name(db_name_override: Option<&str>, uri: &str) -> String {
    if let Some(name) = db_name_override.filter(|name| !name.is_empty()) {
        return name.to_string();
    }

    match Url::parse(uri) {
        Ok(url) => {
            let path = url.path().trim_start_matches('/');
            let name = path.split('?').next().unwrap_or_default();
            if name.is_empty() {
                FALLBACK_DATABASE_NAME.to_string()
            } else {
                name.to_string()
            }
        }
        Err(_) => FALLBACK_DATABASE_NAME.to_string(),
    }
}
