use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::profile::CareerEntry;
use crate::profile::contact::{contact_links, ContactLink};
use crate::profile::headline::{card_headline, CardHeadline};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileField {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileCardResponse {
    #[serde(flatten)]
    pub headline: CardHeadline,
    pub fields: Vec<ProfileField>,
    /// Details already decoded for display.
    pub careers: Vec<CareerEntry>,
    pub contacts: Vec<ContactLink>,
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<ProfileCardResponse>, AppError> {
    let records = state.records.get().await?;

    Ok(Json(ProfileCardResponse {
        headline: card_headline(&records.profile),
        fields: records
            .profile
            .iter()
            .map(|(key, value)| ProfileField {
                key: key.to_string(),
                value: value.to_string(),
            })
            .collect(),
        careers: records.careers.iter().map(CareerEntry::for_display).collect(),
        contacts: contact_links(&records.profile),
    }))
}
