//! Record types persisted by the store.
//!
//! Field names on disk are camelCase (`createdAt`, `userName`, ...) and
//! timestamps are ISO-8601 with millisecond precision, so a collection
//! written here reads the same as one written by any other client of the
//! same storage keys.

use chrono::{DateTime, SubsecRound, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub type RecordId = i64;

/// Current time, truncated to what survives a round trip through storage.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Logical storage slots. The physical key name is derived by
/// [`crate::store::StorageKeys`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Events,
    Tasks,
    Notes,
    Preferences,
}

impl StoreKey {
    pub const ALL: [StoreKey; 4] = [
        StoreKey::Events,
        StoreKey::Tasks,
        StoreKey::Notes,
        StoreKey::Preferences,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StoreKey::Events => "events",
            StoreKey::Tasks => "tasks",
            StoreKey::Notes => "notes",
            StoreKey::Preferences => "preferences",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A member of one of the three record collections.
///
/// The store only needs to know how to build a record from a patch, how to
/// merge a patch into an existing record, and where the identity and
/// timestamps live. `id` and `created_at` are never reachable through a
/// patch.
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Patch;

    const KEY: StoreKey;
    const KIND: &'static str;

    fn create(id: RecordId, created_at: DateTime<Utc>, patch: Self::Patch) -> Self;
    fn apply(&mut self, patch: Self::Patch);
    fn id(&self) -> RecordId;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> Option<DateTime<Utc>>;
    fn touch(&mut self, at: DateTime<Utc>);
}

// --- Events ---

/// Category tag of an event. Tags this client does not know about are kept
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    #[default]
    Reminder,
    Course,
    Other(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Reminder => "reminder",
            EventKind::Course => "course",
            EventKind::Other(tag) => tag,
        }
    }
}

impl From<String> for EventKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "reminder" => EventKind::Reminder,
            "course" => EventKind::Course,
            _ => EventKind::Other(tag),
        }
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for EventKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(EventKind::from(s.to_string()))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    /// Free-form schedule, e.g. `"10h"` or `"2024-05-01 09:30"`.
    #[serde(default)]
    pub time: String,
    #[serde(rename = "type", default)]
    pub kind: EventKind,
    #[serde(with = "iso")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub time: Option<String>,
    pub kind: Option<EventKind>,
}

impl EventPatch {
    pub fn new(title: impl Into<String>, time: impl Into<String>, kind: EventKind) -> Self {
        Self {
            title: Some(title.into()),
            time: Some(time.into()),
            kind: Some(kind),
        }
    }
}

impl Record for Event {
    type Patch = EventPatch;

    const KEY: StoreKey = StoreKey::Events;
    const KIND: &'static str = "Event";

    fn create(id: RecordId, created_at: DateTime<Utc>, patch: EventPatch) -> Self {
        Self {
            id,
            title: patch.title.unwrap_or_default(),
            time: patch.time.unwrap_or_default(),
            kind: patch.kind.unwrap_or_default(),
            created_at,
            updated_at: None,
        }
    }

    fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}

// --- Tasks ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(with = "iso")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            completed: None,
        }
    }
}

impl Record for Task {
    type Patch = TaskPatch;

    const KEY: StoreKey = StoreKey::Tasks;
    const KIND: &'static str = "Task";

    fn create(id: RecordId, created_at: DateTime<Utc>, patch: TaskPatch) -> Self {
        Self {
            id,
            text: patch.text.unwrap_or_default(),
            completed: patch.completed.unwrap_or(false),
            created_at,
            updated_at: None,
        }
    }

    fn apply(&mut self, patch: TaskPatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}

// --- Notes ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(with = "iso")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "iso::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

impl Record for Note {
    type Patch = NotePatch;

    const KEY: StoreKey = StoreKey::Notes;
    const KIND: &'static str = "Note";

    fn create(id: RecordId, created_at: DateTime<Utc>, patch: NotePatch) -> Self {
        Self {
            id,
            title: patch.title.unwrap_or_default(),
            content: patch.content.unwrap_or_default(),
            created_at,
            updated_at: None,
        }
    }

    fn apply(&mut self, patch: NotePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}

// --- Preferences ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

const DEFAULT_USER_NAME: &str = "Jimitry";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub user_name: String,
    pub theme: Theme,
    pub notifications: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            theme: Theme::default(),
            notifications: true,
        }
    }
}

impl Preferences {
    /// Resolves a stored preferences document against `defaults`.
    ///
    /// Each field is taken from `stored` only when present and well-typed;
    /// anything else (missing, `null`, wrong type, not an object at all)
    /// falls back to the corresponding default. Runs on every read, so
    /// fields added later still resolve for documents written earlier.
    pub fn merged_over(defaults: &Preferences, stored: &Value) -> Preferences {
        let mut prefs = defaults.clone();
        let Some(fields) = stored.as_object() else {
            return prefs;
        };

        if let Some(name) = fields.get("userName").and_then(Value::as_str) {
            prefs.user_name = name.to_string();
        }
        if let Some(theme) = fields
            .get("theme")
            .and_then(|v| serde_json::from_value::<Theme>(v.clone()).ok())
        {
            prefs.theme = theme;
        }
        if let Some(notifications) = fields.get("notifications").and_then(Value::as_bool) {
            prefs.notifications = notifications;
        }
        prefs
    }

    pub fn apply(&mut self, patch: PreferencesPatch) {
        if let Some(user_name) = patch.user_name {
            self.user_name = user_name;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = notifications;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub user_name: Option<String>,
    pub theme: Option<Theme>,
    pub notifications: Option<bool>,
}

impl PreferencesPatch {
    pub fn is_empty(&self) -> bool {
        self.user_name.is_none() && self.theme.is_none() && self.notifications.is_none()
    }
}

/// ISO-8601 timestamps with millisecond precision (`2024-05-01T09:30:00.000Z`).
pub(crate) mod iso {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn format(at: &DateTime<Utc>) -> String {
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn parse<E: de::Error>(raw: &str) -> Result<DateTime<Utc>, E> {
        DateTime::parse_from_rfc3339(raw)
            .map(|at| at.with_timezone(&Utc))
            .map_err(E::custom)
    }

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(at))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            at: &Option<DateTime<Utc>>,
            s: S,
        ) -> Result<S::Ok, S::Error> {
            match at {
                Some(at) => super::serialize(at, s),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            d: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            let raw: Option<String> = Option::deserialize(d)?;
            raw.map(|raw| parse(&raw)).transpose()
        }
    }
}
