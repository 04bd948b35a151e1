pub mod model;
pub mod seed;

use anyhow::{ensure, Context, Result};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("family-portal")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

/// Reads the config at `path`, falling back to defaults when it is absent.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    validate(&config).with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(&config_path(), config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

/// Seed lists are addressed by id (deletion, parent links), so ids must be
/// unique within each list.
fn validate(config: &AppConfig) -> Result<()> {
    let seed = &config.seed;
    ensure_unique("news", seed.news.iter().map(|n| n.id))?;
    ensure_unique("event", seed.events.iter().map(|e| e.id))?;
    ensure_unique("family member", seed.family.iter().map(|m| m.id))?;
    Ok(())
}

fn ensure_unique<T>(kind: &str, ids: impl IntoIterator<Item = T>) -> Result<()>
where
    T: Eq + Hash + Display + Copy,
{
    let mut seen = HashSet::new();
    for id in ids {
        ensure!(seen.insert(id), "duplicate {} id {}", kind, id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg.seed.news.len(), 2);
        assert_eq!(cfg.portal.title, "Семейный Портал");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[portal]
title = "Портал Ивановых"

[[seed.news]]
id = 7
title = "Переезд"
content = "Мы переехали"
date = "2026-06-01"
author = "Иван"

[[seed.family]]
id = 1
name = "Иван"
generation = 1
"#
        )
        .unwrap();

        let cfg = load_config_from(file.path()).unwrap();
        assert_eq!(cfg.portal.title, "Портал Ивановых");
        assert_eq!(cfg.portal.subtitle, "Наша история, наши ценности");
        assert_eq!(cfg.seed.news.len(), 1);
        assert_eq!(cfg.seed.news[0].id, 7);
        assert!(cfg.seed.family[0].parents.is_empty());
        assert_eq!(cfg.seed.events.len(), 4);
        assert_eq!(cfg.seed.contacts.len(), 4);
        assert_eq!(cfg.ui.home_news_count, 2);
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[seed.events]]
id = 1
title = "x"
date = "15.01.2026"
type = "birthday"
"#
        )
        .unwrap();

        let err = load_config_from(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_duplicate_news_ids_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[seed.news]]
id = 1
title = "Первая"
content = "a"
date = "2026-01-15"
author = "Мария"

[[seed.news]]
id = 1
title = "Вторая"
content = "b"
date = "2026-01-10"
author = "Елена"
"#
        )
        .unwrap();

        let err = load_config_from(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config file"));
        assert!(format!("{:#}", err).contains("duplicate news id 1"));
    }

    #[test]
    fn test_duplicate_family_ids_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[seed.family]]
id = 4
name = "Иван"
generation = 1

[[seed.family]]
id = 4
name = "Пётр"
generation = 2
"#
        )
        .unwrap();

        let err = load_config_from(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate family member id 4"));
    }

    #[test]
    fn test_default_seed_ids_are_unique() {
        assert!(validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.portal.title = "Портал Ивановых".to_string();
        cfg.behavior.bell_on_rejected_draft = true;

        save_config_to(&path, &cfg).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.portal.title, "Портал Ивановых");
        assert!(loaded.behavior.bell_on_rejected_draft);
        assert_eq!(loaded.seed.family, cfg.seed.family);
        assert_eq!(loaded.seed.events, cfg.seed.events);
        assert_eq!(loaded.seed.news.len(), 2);
    }
}
