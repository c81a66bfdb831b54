//! Engagement edge vocabulary: target kinds and toggle results.
//!
//! Like and dislike edges point at one of three target kinds. Subscriptions
//! always target a user (channel) and carry no kind.

use serde::Serialize;

use crate::error::CoreError;

/// What a like/dislike edge points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Video,
    Comment,
    Tweet,
}

impl TargetKind {
    /// The kind as the lowercase string stored in the `target_kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Comment => "comment",
            Self::Tweet => "tweet",
        }
    }

    /// Parse a kind from a path segment. Accepts singular form only.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "video" => Ok(Self::Video),
            "comment" => Ok(Self::Comment),
            "tweet" => Ok(Self::Tweet),
            other => Err(CoreError::Validation(format!(
                "Invalid target kind '{other}'. Expected one of: video, comment, tweet"
            ))),
        }
    }
}

/// Resulting state of a toggle call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleState {
    /// The edge was created by this call.
    On,
    /// The edge was deleted by this call.
    Off,
}

impl ToggleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}
