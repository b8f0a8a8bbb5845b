use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::profile::{CareerEntry, MbtiRecord, MbtiTable, ProfileRecord, ProfileRow};
use crate::records::{RecordError, RecordSource, Records};

pub const PROFILE_FILE: &str = "profile.json";
pub const CAREERS_FILE: &str = "careers.json";
pub const MBTI_FILE: &str = "mbti.json";

/// Reads the three tables as JSON row arrays from a directory.
/// `mbti.json` is optional; a missing file yields an empty table.
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl RecordSource for JsonDirSource {
    async fn load(&self) -> Result<Records, RecordError> {
        let profile_rows: Vec<ProfileRow> = read_rows(&self.dir.join(PROFILE_FILE)).await?;
        let careers: Vec<CareerEntry> = read_rows(&self.dir.join(CAREERS_FILE)).await?;

        let mbti_path = self.dir.join(MBTI_FILE);
        let mbti_rows: Vec<MbtiRecord> = if tokio::fs::try_exists(&mbti_path).await.unwrap_or(false) {
            read_rows(&mbti_path).await?
        } else {
            debug!("No MBTI table at {}", mbti_path.display());
            Vec::new()
        };

        Ok(Records {
            profile: ProfileRecord::from_rows(profile_rows),
            careers,
            mbti: MbtiTable::new(mbti_rows),
        })
    }
}

async fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, RecordError> {
    let display = path.display().to_string();
    let bytes = tokio::fs::read(path).await.map_err(|source| RecordError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| RecordError::Parse {
        path: display,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    #[tokio::test]
    async fn test_loads_all_three_tables() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            PROFILE_FILE,
            r#"[{"field": "Name", "value": "백XX"}, {"field": "MBTI", "value": "INTJ"}]"#,
        );
        write(
            dir.path(),
            CAREERS_FILE,
            r#"[{"period": "2018 ~ 2022", "organization": "삼성전자", "role": "RPA", "detail": "a\\nb"}]"#,
        );
        write(dir.path(), MBTI_FILE, r#"[{"code": "INTJ", "nickname": "전략가"}]"#);

        let records = JsonDirSource::new(dir.path()).load().await.unwrap();
        assert_eq!(records.profile.get("name"), "백XX");
        assert_eq!(records.careers.len(), 1);
        assert_eq!(records.careers[0].detail, "a\\nb");
        assert_eq!(records.careers[0].decoded_detail(), "a\nb");
        assert_eq!(
            records.mbti.lookup("intj").map(|r| r.traits.as_str()),
            Some("unknown")
        );
    }

    #[tokio::test]
    async fn test_missing_mbti_table_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), PROFILE_FILE, "[]");
        write(dir.path(), CAREERS_FILE, "[]");

        let records = JsonDirSource::new(dir.path()).load().await.unwrap();
        assert!(records.mbti.is_empty());
    }

    #[tokio::test]
    async fn test_missing_profile_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonDirSource::new(dir.path()).load().await.unwrap_err();
        assert!(matches!(err, RecordError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_table_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), PROFILE_FILE, "{not json");
        let err = JsonDirSource::new(dir.path()).load().await.unwrap_err();
        assert!(matches!(err, RecordError::Parse { .. }));
    }
}
