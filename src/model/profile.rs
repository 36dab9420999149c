use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};

pub const TABLE_NAME: &str = "public.profiles";

/// Identifier of a stored profile.
///
/// The document store hands out opaque strings, the local store numeric
/// timestamps. Both are compared through their textual form so a path or
/// query parameter can address either.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileId {
    Numeric(i64),
    Opaque(String),
}

impl ProfileId {
    /// Surrounding whitespace in `key` is ignored for both variants.
    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim();
        match self {
            ProfileId::Numeric(val) => key.parse::<i64>().is_ok_and(|k| k == *val),
            ProfileId::Opaque(val) => val == key,
        }
    }

    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            ProfileId::Numeric(val) => Some(*val),
            ProfileId::Opaque(_) => None,
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileId::Numeric(val) => write!(f, "{val}"),
            ProfileId::Opaque(val) => f.write_str(val),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
}

/// Caller-supplied fields of a profile. Stored verbatim as the record body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub name: String,
    pub title: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub interests: Vec<String>,
    pub bio: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

impl ProfileInput {
    /// Case-insensitive substring match over name, title, location and
    /// every interest.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.title.to_lowercase().contains(&term)
            || self.location.to_lowercase().contains(&term)
            || self
                .interests
                .iter()
                .any(|interest| interest.to_lowercase().contains(&term))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    #[serde(flatten)]
    pub data: ProfileInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial update. Only the fields that are `Some` overwrite the record.
/// A blank `education` clears it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<Experience>>,
}

impl ProfilePatch {
    /// JSON object to merge into a stored document. A blank `education`
    /// becomes `null` so the merge drops it.
    pub fn merge_document(&self) -> serde_json::Result<serde_json::Value> {
        let mut value = serde_json::to_value(self)?;
        if self.education.as_deref().is_some_and(|x| x.trim().is_empty()) {
            value["education"] = serde_json::Value::Null;
        }
        Ok(value)
    }

    pub fn apply(self, target: &mut ProfileInput) {
        if let Some(val) = self.name {
            target.name = val;
        }
        if let Some(val) = self.title {
            target.title = val;
        }
        if let Some(val) = self.location {
            target.location = val;
        }
        if let Some(val) = self.coordinates {
            target.coordinates = val;
        }
        if let Some(val) = self.description {
            target.description = val;
        }
        if let Some(val) = self.email {
            target.email = val;
        }
        if let Some(val) = self.phone {
            target.phone = val;
        }
        if let Some(val) = self.interests {
            target.interests = val;
        }
        if let Some(val) = self.bio {
            target.bio = val;
        }
        if let Some(val) = self.image {
            target.image = val;
        }
        if let Some(val) = self.education {
            target.education = Some(val).filter(|x| !x.trim().is_empty());
        }
        if let Some(val) = self.languages {
            target.languages = val;
        }
        if let Some(val) = self.skills {
            target.skills = val;
        }
        if let Some(val) = self.experience {
            target.experience = val;
        }
    }
}

/// One row of the `profiles` document table.
#[derive(Clone, Debug, FromRow)]
pub struct ProfileRow {
    pub id: String,
    pub document: Json<ProfileInput>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: ProfileId::Opaque(row.id),
            data: row.document.0,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}
