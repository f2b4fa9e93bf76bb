//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files, working directory and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use tasklet_config::{ConfigError, StorageBackend, TaskletConfig};
use tasklet_core::enums::Filter;

fn base() -> Figment {
    Figment::from(Serialized::defaults(TaskletConfig::default()))
}

#[test]
fn loads_storage_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
dir = "/var/lib/tasklet"
backend = "memory"
"#,
        )?;

        let config: TaskletConfig = base().merge(Toml::file("config.toml")).extract()?;

        assert_eq!(config.storage.dir, "/var/lib/tasklet");
        assert_eq!(config.storage.backend().unwrap(), StorageBackend::Memory);
        Ok(())
    });
}

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_filter = "active"
default_format = "json"
"#,
        )?;

        let config: TaskletConfig = base().merge(Toml::file("config.toml")).extract()?;

        assert_eq!(config.general.filter().unwrap(), Filter::Active);
        assert_eq!(config.general.default_format, "json");
        // Untouched section keeps its defaults.
        assert_eq!(config.storage.backend, "file");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tasklet")?;
        jail.create_file(
            ".tasklet/config.toml",
            r#"
[storage]
dir = "project-data"
"#,
        )?;

        let config = TaskletConfig::load().expect("config loads");
        assert_eq!(config.storage.dir, "project-data");
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("TASKLET_STORAGE__DIR", "/from/env");

        jail.create_file(
            "config.toml",
            r#"
[storage]
dir = "/from/toml"
backend = "memory"
"#,
        )?;

        let config: TaskletConfig = base()
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("TASKLET_").split("__"))
            .extract()?;

        // Env should win over TOML
        assert_eq!(config.storage.dir, "/from/env");
        // TOML value not overridden by env should remain
        assert_eq!(config.storage.backend, "memory");
        Ok(())
    });
}

#[test]
fn env_var_overrides_default_through_load() {
    Jail::expect_with(|jail| {
        jail.set_env("TASKLET_GENERAL__DEFAULT_FILTER", "completed");

        let config = TaskletConfig::load().expect("config loads");
        assert_eq!(config.general.filter().unwrap(), Filter::Completed);
        Ok(())
    });
}

/// Typo'd env var keys are silently ignored by figment.
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("TASKLET_STORAGE__DIRR", "/typo");

        let config = TaskletConfig::load().expect("config loads");
        assert!(config.storage.dir.is_empty());
        Ok(())
    });
}

#[test]
fn load_rejects_unknown_backend() {
    Jail::expect_with(|jail| {
        jail.set_env("TASKLET_STORAGE__BACKEND", "sqlite");

        let err = TaskletConfig::load().expect_err("backend should be rejected");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "storage.backend"));
        Ok(())
    });
}

#[test]
fn load_rejects_unknown_filter() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tasklet")?;
        jail.create_file(
            ".tasklet/config.toml",
            r#"
[general]
default_filter = "someday"
"#,
        )?;

        let err = TaskletConfig::load().expect_err("filter should be rejected");
        assert!(err.to_string().contains("someday"));
        Ok(())
    });
}
