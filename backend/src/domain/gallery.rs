//! Gallery images referenced by URL.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record_id::define_record_id;

define_record_id!(
    /// Gallery item identifier.
    GalleryItemId
);

/// Fixed gallery categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Temple,
    Activity,
    Ceremony,
    Landscape,
    Other,
}

impl GalleryCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Temple => "temple",
            Self::Activity => "activity",
            Self::Ceremony => "ceremony",
            Self::Landscape => "landscape",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gallery category '{0}'")]
pub struct UnknownGalleryCategory(pub String);

impl FromStr for GalleryCategory {
    type Err = UnknownGalleryCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "temple" => Ok(Self::Temple),
            "activity" => Ok(Self::Activity),
            "ceremony" => Ok(Self::Ceremony),
            "landscape" => Ok(Self::Landscape),
            "other" => Ok(Self::Other),
            other => Err(UnknownGalleryCategory(other.to_owned())),
        }
    }
}

/// Stored gallery item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: GalleryItemId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: GalleryCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw create payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GallerySubmission {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("temple", GalleryCategory::Temple)]
    #[case(" ceremony ", GalleryCategory::Ceremony)]
    #[case("other", GalleryCategory::Other)]
    fn categories_parse(#[case] raw: &str, #[case] expected: GalleryCategory) {
        assert_eq!(raw.parse::<GalleryCategory>(), Ok(expected));
    }

    #[rstest]
    #[case("Temple")]
    #[case("portrait")]
    fn unknown_categories_are_rejected(#[case] raw: &str) {
        assert!(raw.parse::<GalleryCategory>().is_err());
    }
}
