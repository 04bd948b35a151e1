//! Portal data model.
//!
//! Every entity derives `Serialize`/`Deserialize` so seed data can be
//! supplied through the TOML configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type NewsId = u64;
pub type EventId = u32;
pub type MemberId = u32;

/// A published family news post. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub author: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Birthday,
    Anniversary,
    Other,
}

impl EventKind {
    pub fn glyph(self) -> &'static str {
        match self {
            EventKind::Birthday => "🎂",
            EventKind::Anniversary => "♥",
            EventKind::Other => "📅",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: MemberId,
    pub name: String,
    /// 1 for the eldest generation, counting up towards the youngest.
    pub generation: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<MemberId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
}

/// Placeholder card shown in the gallery section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub caption: String,
    pub year: i32,
}
