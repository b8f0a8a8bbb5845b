//! Contact links shown on the profile card. Only fields that are actually set produce a link.

use serde::{Deserialize, Serialize};

use crate::models::profile::ProfileRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Phone,
    Email,
    KakaoChannel,
    Instagram,
    Reservation,
    Map,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: String,
    pub url: String,
}

/// (profile field, kind, button label). Order is the order buttons are shown in.
const CONTACT_FIELDS: &[(&str, ContactKind, &str)] = &[
    ("phone", ContactKind::Phone, "전화하기"),
    ("email", ContactKind::Email, "이메일"),
    ("kakao_channel_url", ContactKind::KakaoChannel, "카카오톡 채널"),
    ("instagram_url", ContactKind::Instagram, "인스타그램"),
    ("reservation_url", ContactKind::Reservation, "예약하기"),
    ("naver_maps_url", ContactKind::Map, "위치(네이버지도)"),
];

pub fn contact_links(profile: &ProfileRecord) -> Vec<ContactLink> {
    CONTACT_FIELDS
        .iter()
        .filter_map(|&(field, kind, label)| {
            let value = profile.lookup(field)?;
            let url = match kind {
                ContactKind::Phone => format!("tel:{}", value.split_whitespace().collect::<String>()),
                ContactKind::Email => format!("mailto:{value}"),
                _ => value.to_string(),
            };
            Some(ContactLink {
                kind,
                label: label.to_string(),
                url,
            })
        })
        .collect()
}
