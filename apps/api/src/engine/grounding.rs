//! Grounding Context Builder — flattens the profile and career tables into the bounded
//! text block that every profile answer is constrained to.

use crate::models::profile::{CareerEntry, ProfileRecord};

/// Per-entry character budget for the career summary.
pub const CAREER_ENTRY_CHAR_BUDGET: usize = 300;
pub const ELLIPSIS: char = '…';

pub const PROFILE_SECTION_LABEL: &str = "[프로필]";
pub const CAREER_SECTION_LABEL: &str = "[경력 요약]";

/// Builds the grounding context. Pure and deterministic for identical inputs.
pub fn build_grounding_context(profile: &ProfileRecord, careers: &[CareerEntry]) -> String {
    let mut out = String::new();

    out.push_str(PROFILE_SECTION_LABEL);
    out.push('\n');
    for (key, value) in profile.iter() {
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(CAREER_SECTION_LABEL);
    out.push('\n');
    for entry in careers {
        out.push_str("- ");
        out.push_str(&summarize_career(entry));
        out.push('\n');
    }

    out
}

/// One career line: `period | organization | role | detail`, detail decoded, then truncated.
pub fn summarize_career(entry: &CareerEntry) -> String {
    let detail = entry.decoded_detail();
    let mut line = format!("{} | {} | {}", entry.period, entry.organization, entry.role);
    if !detail.trim().is_empty() {
        line.push_str(" | ");
        line.push_str(detail.trim());
    }
    truncate_chars(&line, CAREER_ENTRY_CHAR_BUDGET)
}

/// Truncates to `budget` chars (not bytes), appending the ellipsis marker when cut.
pub fn truncate_chars(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((cut, _)) => {
            let mut truncated = text[..cut].to_string();
            truncated.push(ELLIPSIS);
            truncated
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::ProfileRow;

    fn profile() -> ProfileRecord {
        ProfileRecord::from_rows(vec![
            ProfileRow {
                field: "Name".to_string(),
                value: "백XX".to_string(),
            },
            ProfileRow {
                field: "Job".to_string(),
                value: "자동화개발자".to_string(),
            },
        ])
    }

    fn career(detail: &str) -> CareerEntry {
        CareerEntry {
            period: "2018 ~ 2022".to_string(),
            organization: "삼성전자".to_string(),
            role: "RPA 개발·운영".to_string(),
            detail: detail.to_string(),
        }
    }

    #[test]
    fn test_context_has_both_labeled_sections_in_order() {
        let ctx = build_grounding_context(&profile(), &[career("")]);
        let profile_at = ctx.find(PROFILE_SECTION_LABEL).unwrap();
        let career_at = ctx.find(CAREER_SECTION_LABEL).unwrap();
        assert!(profile_at < career_at);
        assert!(ctx.contains("name: 백XX\njob: 자동화개발자\n"));
        assert!(ctx.contains("- 2018 ~ 2022 | 삼성전자 | RPA 개발·운영\n"));
    }

    #[test]
    fn test_context_is_deterministic() {
        let careers = vec![career("a\\nb"), career("c")];
        assert_eq!(
            build_grounding_context(&profile(), &careers),
            build_grounding_context(&profile(), &careers)
        );
    }

    #[test]
    fn test_escaped_newlines_are_decoded() {
        let line = summarize_career(&career("교육 기획\\n현업 강의"));
        assert!(line.ends_with("교육 기획\n현업 강의"));
        assert!(!line.contains("\\n"));
    }

    #[test]
    fn test_long_entry_truncated_to_budget_with_ellipsis() {
        let line = summarize_career(&career(&"가".repeat(500)));
        assert_eq!(line.chars().count(), CAREER_ENTRY_CHAR_BUDGET + 1);
        assert!(line.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_short_entry_untouched() {
        assert_eq!(truncate_chars("짧다", 300), "짧다");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abcd", 3), "abc…");
    }

    #[test]
    fn test_empty_inputs_still_produce_labels() {
        let ctx = build_grounding_context(&ProfileRecord::default(), &[]);
        assert!(ctx.contains(PROFILE_SECTION_LABEL));
        assert!(ctx.contains(CAREER_SECTION_LABEL));
    }
}
