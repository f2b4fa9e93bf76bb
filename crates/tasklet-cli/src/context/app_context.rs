use std::path::PathBuf;

use anyhow::{Context, anyhow};
use tasklet_config::{StorageBackend, TaskletConfig};
use tasklet_store::{FileStore, KeyValueStore, MemoryStore, PersistenceGateway, TaskStore};

/// Task store over whichever medium the configuration selected.
pub type Store = TaskStore<Box<dyn KeyValueStore>>;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub store: Store,
}

impl AppContext {
    /// Open the configured storage medium and hydrate the task store from it.
    ///
    /// `data_dir` (from `--data-dir`) takes precedence over `storage.dir` and
    /// implies the file backend.
    pub fn init(config: &TaskletConfig, data_dir: Option<&str>) -> anyhow::Result<Self> {
        let medium = open_medium(config, data_dir)?;
        let filter = config.general.filter()?;
        let store = TaskStore::open(PersistenceGateway::new(medium)).with_filter(filter);

        tracing::debug!(
            tasks = store.tasks().len(),
            theme = %store.theme(),
            filter = %filter,
            "task store ready"
        );

        Ok(Self { store })
    }
}

fn open_medium(
    config: &TaskletConfig,
    data_dir: Option<&str>,
) -> anyhow::Result<Box<dyn KeyValueStore>> {
    if let Some(dir) = data_dir {
        return open_file_medium(PathBuf::from(dir));
    }

    match config.storage.backend()? {
        StorageBackend::Memory => {
            tracing::debug!("using in-memory storage; nothing will survive this process");
            Ok(Box::new(MemoryStore::new()))
        }
        StorageBackend::File => {
            let dir = config.storage.resolved_dir().ok_or_else(|| {
                anyhow!("no data directory available; set storage.dir or pass --data-dir")
            })?;
            open_file_medium(dir)
        }
    }
}

fn open_file_medium(dir: PathBuf) -> anyhow::Result<Box<dyn KeyValueStore>> {
    let store = FileStore::open(&dir)
        .with_context(|| format!("failed to open data directory {}", dir.display()))?;
    Ok(Box::new(store))
}
