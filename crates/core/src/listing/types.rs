use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ParseVariantError;
use crate::calendar::Scheduled;
use crate::serde::{
    deserialize_lenient_count, deserialize_lenient_enum, deserialize_null_default,
    deserialize_optional_datetime, deserialize_optional_string,
};

/// Topic an event or hackathon is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Tech,
    AiMl,
    Web3,
    Design,
    Business,
    Community,
    Education,
    Gaming,
    Health,
    Sustainability,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Tech,
        Category::AiMl,
        Category::Web3,
        Category::Design,
        Category::Business,
        Category::Community,
        Category::Education,
        Category::Gaming,
        Category::Health,
        Category::Sustainability,
    ];

    /// Returns the slug used on the wire and in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tech => "tech",
            Category::AiMl => "ai-ml",
            Category::Web3 => "web3",
            Category::Design => "design",
            Category::Business => "business",
            Category::Community => "community",
            Category::Education => "education",
            Category::Gaming => "gaming",
            Category::Health => "health",
            Category::Sustainability => "sustainability",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == needle)
            .ok_or_else(|| ParseVariantError::new("category", s))
    }
}

/// Lifecycle stage of a hackathon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HackathonStatus {
    Draft,
    RegistrationOpen,
    RegistrationClosed,
    Hacking,
    Submission,
    Judging,
    Completed,
}

impl HackathonStatus {
    pub const ALL: [HackathonStatus; 7] = [
        HackathonStatus::Draft,
        HackathonStatus::RegistrationOpen,
        HackathonStatus::RegistrationClosed,
        HackathonStatus::Hacking,
        HackathonStatus::Submission,
        HackathonStatus::Judging,
        HackathonStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HackathonStatus::Draft => "draft",
            HackathonStatus::RegistrationOpen => "registration-open",
            HackathonStatus::RegistrationClosed => "registration-closed",
            HackathonStatus::Hacking => "hacking",
            HackathonStatus::Submission => "submission",
            HackathonStatus::Judging => "judging",
            HackathonStatus::Completed => "completed",
        }
    }

    /// Returns true while teams can still sign up.
    pub fn accepts_registrations(&self) -> bool {
        matches!(self, HackathonStatus::RegistrationOpen)
    }
}

impl fmt::Display for HackathonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HackathonStatus {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == needle)
            .ok_or_else(|| ParseVariantError::new("status", s))
    }
}

/// Whether a listed item is a plain event or a hackathon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[default]
    Event,
    Hackathon,
}

/// Fields matched by free-text search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Organizer,
}

impl ItemKind {
    /// Returns the fields free-text search looks at for this kind of item.
    pub fn searchable_fields(&self) -> &'static [SearchField] {
        match self {
            ItemKind::Event => &[SearchField::Title],
            ItemKind::Hackathon => &[SearchField::Title, SearchField::Organizer],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Event => "event",
            ItemKind::Hackathon => "hackathon",
        }
    }
}

/// A ticket tier on sale for an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub name: String,
    pub price: f64,
}

impl Ticket {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Creates a zero-priced ticket.
    pub fn free(name: impl Into<String>) -> Self {
        Self::new(name, 0.0)
    }
}

/// An event or hackathon as seen by the listing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub kind: ItemKind,
    /// Display name. Hackathon payloads call this `name`.
    #[serde(alias = "name")]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub organizer: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_enum",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub tags: Vec<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub tickets: Vec<Ticket>,
    /// Registration or participant count, supplied by whoever fetched the item.
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub popularity_score: Option<u64>,
    /// Lifecycle stage. Only hackathons carry one.
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_enum",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<HackathonStatus>,
}

impl Item {
    fn blank(kind: ItemKind, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            organizer: None,
            category: None,
            tags: Vec::new(),
            start_date: None,
            created_at: None,
            tickets: Vec::new(),
            popularity_score: None,
            status: None,
        }
    }

    /// Creates a new event starting at the given instant.
    pub fn event(title: impl Into<String>, start_date: DateTime<Utc>) -> Self {
        Self {
            start_date: Some(start_date),
            ..Self::blank(ItemKind::Event, title)
        }
    }

    /// Creates a new hackathon run by `organizer`.
    pub fn hackathon(
        title: impl Into<String>,
        organizer: impl Into<String>,
        start_date: DateTime<Utc>,
    ) -> Self {
        Self {
            organizer: Some(organizer.into()),
            start_date: Some(start_date),
            ..Self::blank(ItemKind::Hackathon, title)
        }
    }

    /// Sets a specific ID for this item (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_ticket(mut self, ticket: Ticket) -> Self {
        self.tickets.push(ticket);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_popularity(mut self, score: u64) -> Self {
        self.popularity_score = Some(score);
        self
    }

    pub fn with_status(mut self, status: HackathonStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Clears the start date, for records that have not been scheduled yet.
    pub fn unscheduled(mut self) -> Self {
        self.start_date = None;
        self
    }

    /// Returns the cheapest ticket price, or None when nothing is on sale.
    pub fn price(&self) -> Option<f64> {
        self.tickets
            .iter()
            .map(|ticket| ticket.price)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// An item is free when it has no tickets or every ticket costs nothing.
    /// A mix of free and priced tiers counts as paid.
    pub fn is_free(&self) -> bool {
        self.tickets.iter().all(|ticket| ticket.price == 0.0)
    }

    /// Returns the text of one searchable field, if the item has it.
    pub fn field_text(&self, field: SearchField) -> Option<&str> {
        match field {
            SearchField::Title => Some(self.title.as_str()),
            SearchField::Organizer => self.organizer.as_deref(),
        }
    }

    /// Iterates the searchable field values for this item's kind.
    pub fn searchable_text(&self) -> impl Iterator<Item = &str> {
        self.kind
            .searchable_fields()
            .iter()
            .filter_map(|field| self.field_text(*field))
    }
}

impl Scheduled for Item {
    fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }
}
