use thiserror::Error;
use tracing::info;

use racketlab_core::config::{ConfigError, LoadOptions, RacketLabConfig};
use racketlab_core::Catalog;
use racketlab_store::{
    JsonSlotRepository, PlanProgress, SessionState, SessionStateRepository, SessionStore,
};

/// The assembled application: the read-only catalog plus the session store.
/// There is deliberately no ambient singleton; the embedding host owns this
/// value and passes it wherever it is needed.
pub struct RacketLab<R: SessionStateRepository> {
    pub(crate) catalog: Catalog,
    pub(crate) store: SessionStore<R>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Install the global tracing subscriber from the logging config. Call once,
/// before `bootstrap`.
pub fn init_logging(config: &RacketLabConfig) {
    use racketlab_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

/// Load configuration and assemble the application with the on-disk slot.
pub fn bootstrap(options: LoadOptions) -> Result<RacketLab<JsonSlotRepository>, BootstrapError> {
    let config = RacketLabConfig::load(options)?;
    Ok(bootstrap_with_config(config))
}

pub fn bootstrap_with_config(config: RacketLabConfig) -> RacketLab<JsonSlotRepository> {
    info!(
        event_name = "system.bootstrap.start",
        storage_root = %config.storage.root_dir.display(),
        "assembling racketlab"
    );

    let repository = JsonSlotRepository::new(&config.storage.root_dir);
    let store = SessionStore::open(repository);

    info!(event_name = "system.bootstrap.session_loaded", "session state ready");

    RacketLab { catalog: Catalog::builtin(), store }
}

impl<R: SessionStateRepository> RacketLab<R> {
    /// Assemble from explicit parts: custom catalogs and in-memory slots for
    /// tests or hosts with their own storage.
    pub fn with_store(catalog: Catalog, store: SessionStore<R>) -> Self {
        Self { catalog, store }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current session state, for rendering.
    pub fn state(&self) -> &SessionState {
        self.store.state()
    }

    pub fn training_progress(&self) -> Option<PlanProgress> {
        self.store.training_progress()
    }
}

#[cfg(test)]
mod tests {
    use racketlab_core::config::{ConfigOverrides, LoadOptions};
    use tempfile::TempDir;

    use super::bootstrap;

    #[test]
    fn bootstrap_wires_the_builtin_catalog_and_an_empty_session() {
        let dir = TempDir::new().expect("temp dir");
        let app = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                storage_root: Some(dir.path().to_path_buf()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        })
        .expect("bootstrap succeeds");

        assert!(!app.catalog().combos().is_empty());
        assert!(app.state().favorites.is_empty());
        assert_eq!(app.training_progress(), None);
    }

    #[test]
    fn bootstrap_fails_fast_on_invalid_configuration() {
        let result = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                log_level: Some("shouting".to_string()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        });

        assert!(result.is_err());
        let message = result.err().expect("error").to_string();
        assert!(message.contains("logging.level"));
    }
}
