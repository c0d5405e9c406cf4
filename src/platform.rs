// src/platform.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Reddit,
}

pub const ALL_PLATFORMS: [Platform; 2] = [Platform::Youtube, Platform::Reddit];

const YOUTUBE_COLUMNS: &[&str] = &[
    "video_id",
    "author_name",
    "comment",
    "published_at",
    "likes",
    "reply_count",
];

const REDDIT_COLUMNS: &[&str] = &["Post URL", "Comment"];

impl Platform {
    /// Wire name, as the services expect it.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Reddit => "reddit",
        }
    }

    /// Human label for pickers and notices.
    pub fn label(self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Reddit => "Reddit",
        }
    }

    pub fn preview_columns(self) -> &'static [&'static str] {
        match self {
            Platform::Youtube => YOUTUBE_COLUMNS,
            Platform::Reddit => REDDIT_COLUMNS,
        }
    }
}

/// Columns for the current selection. No selection renders no columns.
pub fn preview_columns(selected: Option<Platform>) -> &'static [&'static str] {
    selected.map(Platform::preview_columns).unwrap_or(&[])
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlatform(pub String);

impl fmt::Display for UnknownPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown platform: {}", self.0)
    }
}

impl std::error::Error for UnknownPlatform {}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "youtube" => Ok(Platform::Youtube),
            "reddit" => Ok(Platform::Reddit),
            other => Err(UnknownPlatform(s!(other))),
        }
    }
}
