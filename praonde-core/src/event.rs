//! Event data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseBuzzError;

/// Stable identifier of an event within a seed.
pub type EventId = u32;

/// Kind of outing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Festa,
    Bar,
    Show,
    Cultural,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Festa,
        Category::Bar,
        Category::Show,
        Category::Cultural,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Festa => "Festa",
            Category::Bar => "Bar",
            Category::Show => "Show",
            Category::Cultural => "Cultural",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How busy a place is right now. Also the scale a vibe report is given on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Buzz {
    Bombando,
    Medio,
    Fraco,
}

impl Buzz {
    /// Vibe buttons in display order.
    pub const VIBE_CHOICES: [Buzz; 3] = [Buzz::Fraco, Buzz::Medio, Buzz::Bombando];

    /// Status tag shown on cards.
    pub fn as_str(&self) -> &'static str {
        match self {
            Buzz::Bombando => "bombando",
            Buzz::Medio => "medio",
            Buzz::Fraco => "fraco",
        }
    }

    /// Label of the matching vibe button.
    pub fn button_label(&self) -> &'static str {
        match self {
            Buzz::Bombando => "Bombando",
            Buzz::Medio => "Médio",
            Buzz::Fraco => "Fraco",
        }
    }
}

impl fmt::Display for Buzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Buzz {
    type Err = ParseBuzzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bombando" => Ok(Buzz::Bombando),
            "medio" | "médio" => Ok(Buzz::Medio),
            "fraco" => Ok(Buzz::Fraco),
            _ => Err(ParseBuzzError(s.to_string())),
        }
    }
}

/// Outbound ticket purchase URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketLink(pub String);

impl TicketLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single event card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    /// Image URL. Never fetched here, only displayed.
    pub image: String,
    pub category: Category,
    pub music_style: String,
    /// Human-readable distance such as "5 km".
    pub distance: String,
    pub status: Buzz,
    pub description: String,
    pub address: String,
    #[serde(default)]
    pub featured: bool,
    /// Live crowd label, e.g. "Em tempo real".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket: Option<TicketLink>,
}

/// An event as it was when the user liked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub super_liked: bool,
}

impl LikedEvent {
    pub fn new(event: Event, super_liked: bool) -> Self {
        Self { event, super_liked }
    }

    pub fn id(&self) -> EventId {
        self.event.id
    }
}
