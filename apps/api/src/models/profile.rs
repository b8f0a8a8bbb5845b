use serde::{Deserialize, Serialize};

/// Value returned for any profile or career field that the source does not carry.
pub const UNKNOWN: &str = "unknown";

/// Normalizes a profile field name: trimmed, lower-cased, inner whitespace runs become `_`.
pub fn normalize_key(raw: &str) -> String {
    raw.split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Decodes literal `\n` escape sequences (as stored in the source table) into line breaks.
pub fn decode_escaped_newlines(text: &str) -> String {
    text.replace("\\r\\n", "\n").replace("\\n", "\n")
}

/// One row of the profile table as it arrives from the record source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRow {
    pub field: String,
    #[serde(default)]
    pub value: String,
}

/// Ordered field → value mapping describing the kiosk's subject.
///
/// Keys are normalized on insert and unique: a later duplicate replaces the earlier value
/// in place, so mapping order is the order in which each key was first seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    fields: Vec<(String, String)>,
}

impl ProfileRecord {
    pub fn from_rows(rows: impl IntoIterator<Item = ProfileRow>) -> Self {
        let mut record = Self::default();
        for row in rows {
            record.insert(&row.field, row.value);
        }
        record
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let key = normalize_key(key);
        if key.is_empty() {
            return;
        }
        let value = value.into().trim().to_string();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Looks up a field, degrading to [`UNKNOWN`] when it is missing or blank.
    pub fn get(&self, key: &str) -> &str {
        self.lookup(key).unwrap_or(UNKNOWN)
    }

    /// Like [`ProfileRecord::get`] but distinguishes absence.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let key = normalize_key(key);
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty() && *v != UNKNOWN)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn unknown() -> String {
    UNKNOWN.to_string()
}

/// A single career row. `detail` is kept exactly as stored; use [`CareerEntry::decoded_detail`]
/// for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerEntry {
    #[serde(default = "unknown")]
    pub period: String,
    #[serde(default = "unknown")]
    pub organization: String,
    #[serde(default = "unknown")]
    pub role: String,
    #[serde(default)]
    pub detail: String,
}

impl CareerEntry {
    pub fn decoded_detail(&self) -> String {
        decode_escaped_newlines(&self.detail)
    }

    /// Copy of the entry with `detail` decoded, as handed to the view layer.
    pub fn for_display(&self) -> CareerEntry {
        CareerEntry {
            detail: self.decoded_detail(),
            ..self.clone()
        }
    }
}

/// Personality-type row keyed by a 4-letter code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MbtiRecord {
    pub code: String,
    #[serde(default = "unknown")]
    pub nickname: String,
    #[serde(default = "unknown")]
    pub traits: String,
    #[serde(default = "unknown")]
    pub strengths: String,
    #[serde(default = "unknown")]
    pub weaknesses: String,
    #[serde(default = "unknown")]
    pub fit_domains: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MbtiTable {
    rows: Vec<MbtiRecord>,
}

impl MbtiTable {
    pub fn new(rows: Vec<MbtiRecord>) -> Self {
        Self { rows }
    }

    /// Exact, case-insensitive code lookup.
    pub fn lookup(&self, code: &str) -> Option<&MbtiRecord> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.rows
            .iter()
            .find(|row| row.code.trim().eq_ignore_ascii_case(code))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(field: &str, value: &str) -> ProfileRow {
        ProfileRow {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_normalize_key_lowercases_and_joins_whitespace() {
        assert_eq!(normalize_key("  Birth   Date "), "birth_date");
        assert_eq!(normalize_key("MBTI"), "mbti");
    }

    #[test]
    fn test_profile_preserves_first_seen_order_and_replaces_duplicates() {
        let profile = ProfileRecord::from_rows(vec![
            row("Name", "백XX"),
            row("City", "서울"),
            row(" name ", "백민"),
        ]);
        let keys: Vec<_> = profile.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "city"]);
        assert_eq!(profile.get("name"), "백민");
    }

    #[test]
    fn test_missing_or_blank_field_degrades_to_unknown() {
        let profile = ProfileRecord::from_rows(vec![row("email", "  ")]);
        assert_eq!(profile.get("email"), UNKNOWN);
        assert_eq!(profile.get("phone"), UNKNOWN);
        assert!(profile.lookup("email").is_none());
    }

    #[test]
    fn test_decode_escaped_newlines() {
        let entry = CareerEntry {
            period: "2018 ~ 2022".to_string(),
            organization: "삼성전자".to_string(),
            role: "RPA 개발".to_string(),
            detail: "첫 줄\\n둘째 줄".to_string(),
        };
        assert_eq!(entry.decoded_detail(), "첫 줄\n둘째 줄");
        assert_eq!(entry.for_display().detail, "첫 줄\n둘째 줄");
    }

    #[test]
    fn test_career_entry_missing_columns_default_to_unknown() {
        let entry: CareerEntry = serde_json::from_str(r#"{"organization": "삼성전자"}"#).unwrap();
        assert_eq!(entry.period, UNKNOWN);
        assert_eq!(entry.role, UNKNOWN);
        assert_eq!(entry.detail, "");
    }

    #[test]
    fn test_mbti_lookup_is_case_insensitive_and_exact() {
        let table = MbtiTable::new(vec![MbtiRecord {
            code: "INTJ".to_string(),
            nickname: "전략가".to_string(),
            traits: "분석적".to_string(),
            strengths: "계획".to_string(),
            weaknesses: "완고함".to_string(),
            fit_domains: "자동화".to_string(),
        }]);
        assert_eq!(table.lookup("intj").map(|r| r.nickname.as_str()), Some("전략가"));
        assert!(table.lookup("INT").is_none());
        assert!(table.lookup("INTJX").is_none());
        assert!(table.lookup("").is_none());
    }
}
