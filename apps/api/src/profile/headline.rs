//! Top of the profile card: name, tagline, optional photo and the two intro videos.
//! Each part is present only when its profile field is set.

use serde::Serialize;

use crate::models::profile::ProfileRecord;

pub const NAME_FIELD: &str = "name";
pub const TAGLINE_FIELD: &str = "tagline";
pub const PHOTO_FIELD: &str = "photo_url";
/// Short clip (about a minute).
pub const SHORTS_VIDEO_FIELD: &str = "shorts_video_url";
/// Two-to-three minute career introduction.
pub const CAREER_VIDEO_FIELD: &str = "career_video_url";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VideoLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shorts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career: Option<String>,
}

impl VideoLinks {
    pub fn is_empty(&self) -> bool {
        self.shorts.is_none() && self.career.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CardHeadline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "VideoLinks::is_empty")]
    pub videos: VideoLinks,
}

pub fn card_headline(profile: &ProfileRecord) -> CardHeadline {
    let field = |key: &str| profile.lookup(key).map(str::to_string);
    CardHeadline {
        name: field(NAME_FIELD),
        tagline: field(TAGLINE_FIELD),
        photo_url: field(PHOTO_FIELD),
        videos: VideoLinks {
            shorts: field(SHORTS_VIDEO_FIELD),
            career: field(CAREER_VIDEO_FIELD),
        },
    }
}
