//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default, so a missing or partial file still yields the
//! stock portal with its built-in seed data.

use serde::{Deserialize, Serialize};

use super::seed;
use crate::portal::model::{CalendarEvent, Contact, FamilyMember, GalleryItem, NewsItem};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub portal: PortalConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Header and footer texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    #[serde(default = "default_footer")]
    pub footer: String,
    #[serde(default = "default_footer_note")]
    pub footer_note: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            footer: default_footer(),
            footer_note: default_footer_note(),
        }
    }
}

/// Rendering cadence and home-page card sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_home_news_count")]
    pub home_news_count: usize,
    #[serde(default = "default_home_event_count")]
    pub home_event_count: usize,
    /// How long a status-bar message stays visible.
    #[serde(default = "default_status_timeout_secs")]
    pub status_timeout_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            home_news_count: default_home_news_count(),
            home_event_count: default_home_event_count(),
            status_timeout_secs: default_status_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Ring the terminal bell when the composer refuses an incomplete draft.
    #[serde(default)]
    pub bell_on_rejected_draft: bool,
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

/// Data the portal starts with. News added at runtime is not written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "seed::default_news")]
    pub news: Vec<NewsItem>,
    #[serde(default = "seed::default_events")]
    pub events: Vec<CalendarEvent>,
    #[serde(default = "seed::default_family")]
    pub family: Vec<FamilyMember>,
    #[serde(default = "seed::default_contacts")]
    pub contacts: Vec<Contact>,
    #[serde(default = "seed::default_gallery")]
    pub gallery: Vec<GalleryItem>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            news: seed::default_news(),
            events: seed::default_events(),
            family: seed::default_family(),
            contacts: seed::default_contacts(),
            gallery: seed::default_gallery(),
        }
    }
}

fn default_title() -> String {
    "Семейный Портал".to_string()
}
fn default_subtitle() -> String {
    "Наша история, наши ценности".to_string()
}
fn default_footer() -> String {
    "© 2026 Семейный портал. Все права защищены.".to_string()
}
fn default_footer_note() -> String {
    "Сделано с любовью для нашей семьи".to_string()
}
fn default_tick_rate_ms() -> u64 {
    50
}
fn default_home_news_count() -> usize {
    2
}
fn default_home_event_count() -> usize {
    3
}
fn default_status_timeout_secs() -> u64 {
    4
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/family-portal/logs".to_string()
}
