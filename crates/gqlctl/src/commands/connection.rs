use gqlink::catalog::Catalog;
use gqlink::client::Client;
use gqlink::config::ClientConfig;
use gqlink::session::Session;
use gqlink::storage::CredentialPair;
use gqlink::storage::CredentialStore;
use gqlink::storage::CredentialStoreError;
use gqlink::storage::FileCredentialStore;
use gqlink::storage::MemoryCredentialStore;
use gqlink::transport::HttpTransport;

pub(crate) type CliSession = Session<CliCredentialStore, HttpTransport>;

/// Where the CLI keeps credentials between invocations.
#[derive(Debug)]
pub(crate) enum CliCredentialStore {
    File(FileCredentialStore),
    Memory(MemoryCredentialStore),
}
impl CredentialStore for CliCredentialStore {
    async fn read(&self) -> Result<Option<CredentialPair>, CredentialStoreError> {
        match self {
            Self::File(store) => store.read().await,
            Self::Memory(store) => store.read().await,
        }
    }

    async fn write(&self, credentials: CredentialPair) -> Result<(), CredentialStoreError> {
        match self {
            Self::File(store) => store.write(credentials).await,
            Self::Memory(store) => store.write(credentials).await,
        }
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        match self {
            Self::File(store) => store.clear().await,
            Self::Memory(store) => store.clear().await,
        }
    }
}

/// Assemble a session from the process environment.
pub(crate) fn connect() -> anyhow::Result<CliSession> {
    let config = ClientConfig::from_env()?;
    log::debug!("Using GraphQL endpoint {}.", config.endpoint);

    let store = match &config.credentials_path {
        Some(path) => {
            log::debug!("Using stored credentials at {path:?}.");
            CliCredentialStore::File(FileCredentialStore::new(path))
        },
        None => {
            log::warn!(
                "`{}` is not set; credentials will not outlive this command.",
                gqlink::config::CREDENTIALS_PATH_ENV_VAR,
            );
            CliCredentialStore::Memory(MemoryCredentialStore::new())
        },
    };

    let client = Client::from_config(&config, store)?;
    Ok(Session::new(client, load_catalog()?))
}

pub(crate) fn load_catalog() -> anyhow::Result<Catalog> {
    Catalog::build().map_err(|errors| {
        anyhow::anyhow!("The operation catalog is malformed: {errors:?}")
    })
}
