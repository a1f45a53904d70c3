use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recurring practice in a Rule of Life.
///
/// Practices are permanent records: once committed they keep their `id`
/// and `created_at` for life, and updates replace the whole record rather
/// than patching fields. The collection preserves insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Practice {
    pub id: Uuid,
    /// User-facing label. Non-empty for any committed practice.
    pub name: String,
    pub category: Category,
    pub frequency: Frequency,
    /// Free-text schedule hint (e.g. "Morning, 7:00 AM"). No format enforced.
    pub time: Option<String>,
    /// Free-text duration hint (e.g. "15 minutes"). No format enforced.
    pub duration: Option<String>,
    /// Additional details, scripture references, intentions.
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The kind of spiritual discipline a practice belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Prayer,
    Scripture,
    Community,
    Rest,
    Service,
}

impl Category {
    /// All categories in canonical order. The first one is the default
    /// for a fresh draft.
    pub const ALL: [Category; 5] = [
        Self::Prayer,
        Self::Scripture,
        Self::Community,
        Self::Rest,
        Self::Service,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prayer => "prayer",
            Self::Scripture => "scripture",
            Self::Community => "community",
            Self::Rest => "rest",
            Self::Service => "service",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "prayer" => Some(Self::Prayer),
            "scripture" => Some(Self::Scripture),
            "community" => Some(Self::Community),
            "rest" => Some(Self::Rest),
            "service" => Some(Self::Service),
            _ => None,
        }
    }
}

/// How often a practice recurs.
///
/// Declaration order is the canonical display order, so the derived `Ord`
/// drives the frequency grouping: daily, weekly, monthly, seasonal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Seasonal,
}

impl Frequency {
    /// All frequencies in display order.
    pub const ALL: [Frequency; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Seasonal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Seasonal => "seasonal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "seasonal" => Some(Self::Seasonal),
            _ => None,
        }
    }
}

/// Validated full-record payload for creating or replacing a practice.
///
/// `id` and `created_at` are absent on purpose: the store assigns them on
/// create and preserves the stored values on update, regardless of what a
/// caller might try to supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeInput {
    pub name: String,
    pub category: Category,
    pub frequency: Frequency,
    pub time: Option<String>,
    pub duration: Option<String>,
    pub notes: Option<String>,
}
