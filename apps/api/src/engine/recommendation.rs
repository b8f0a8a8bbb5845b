//! Structured-Recommendation Parser — recovers fixed-arity place records from generated text.
//!
//! The generator is asked for `1. name | category | description | highlight | address`, but
//! nothing guarantees it complies. Parsing is therefore a total function: every non-empty
//! line becomes exactly one record, missing fields are padded with [`FIELD_PLACEHOLDER`] and
//! surplus fields are dropped. It never fails and never skips a non-empty line.

use serde::{Deserialize, Serialize};

use crate::models::place::{MapLinks, PlaceRecommendation};

pub const FIELD_COUNT: usize = 5;
pub const FIELD_PLACEHOLDER: &str = "정보 없음";
pub const NO_RESULTS_NOTICE: &str = "추천 결과를 찾지 못했습니다. 다른 지역으로 다시 시도해 주세요.";

pub const DEFAULT_PLACE_COUNT: u32 = 5;
pub const MAX_PLACE_COUNT: u32 = 10;

const NAVER_SEARCH_URL: &str = "https://map.naver.com/p/search/";
const KAKAO_SEARCH_URL: &str = "https://map.kakao.com/?q=";
const GOOGLE_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceKind {
    Restaurant,
    Travel,
}

impl PlaceKind {
    pub fn prompt_label(self) -> &'static str {
        match self {
            PlaceKind::Restaurant => "restaurants (맛집)",
            PlaceKind::Travel => "travel spots (여행지)",
        }
    }
}

/// A validated recommendation request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceQuery {
    pub location: String,
    pub kind: PlaceKind,
    pub count: u32,
}

impl PlaceQuery {
    /// Returns `None` for a blank location. `count` defaults to 5 and is clamped to 1..=10.
    pub fn new(location: &str, kind: PlaceKind, count: Option<u32>) -> Option<Self> {
        let location = location.trim();
        if location.is_empty() {
            return None;
        }
        Some(Self {
            location: location.to_string(),
            kind,
            count: count
                .unwrap_or(DEFAULT_PLACE_COUNT)
                .clamp(1, MAX_PLACE_COUNT),
        })
    }
}

/// Parses every non-empty line of `raw` into a record, preserving line order.
pub fn parse_recommendations(raw: &str) -> Vec<PlaceRecommendation> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

/// Parses a single line. Total: any input yields a five-field record.
pub fn parse_line(line: &str) -> PlaceRecommendation {
    let fields = split_fields(line);
    let [name, category, description, highlight, address] = fields;
    let map_links = map_links(&name);
    PlaceRecommendation {
        name,
        category,
        description,
        highlight,
        address,
        map_links,
    }
}

/// Steps 1–4: strip the list prefix, normalize separators, split, then pad or truncate.
pub fn split_fields(line: &str) -> [String; FIELD_COUNT] {
    let normalized = normalize_separators(strip_list_prefix(line.trim()));

    let mut pieces = normalized
        .split('|')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string);

    std::array::from_fn(|_| {
        pieces
            .next()
            .unwrap_or_else(|| FIELD_PLACEHOLDER.to_string())
    })
}

/// Strips a leading `1.` / `12)` numbering, or a markdown bullet, plus following whitespace.
fn strip_list_prefix(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return rest.trim_start();
    }

    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return line;
    }
    let rest = &line[digits..];
    match rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

/// Rewrites dash-style separators to `|`. A hyphen inside a token (`123-4`) is kept.
fn normalize_separators(line: &str) -> String {
    line.replace(['–', '—', '｜'], "|").replace(" - ", " | ")
}

/// Map-search links derived from the place name alone. No network access.
pub fn map_links(name: &str) -> MapLinks {
    let query = urlencoding::encode(name);
    MapLinks {
        naver: format!("{NAVER_SEARCH_URL}{query}"),
        kakao: format!("{KAKAO_SEARCH_URL}{query}"),
        google: format!("{GOOGLE_SEARCH_URL}{query}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(place: &PlaceRecommendation) -> [&str; 5] {
        [
            place.name.as_str(),
            place.category.as_str(),
            place.description.as_str(),
            place.highlight.as_str(),
            place.address.as_str(),
        ]
    }

    #[test]
    fn test_en_dash_line_with_numeric_prefix() {
        let places = parse_recommendations(
            "1. 백민식당 – 한식 – 김치찌개가 맛있는 현지식당 – 김치찌개 – 서울 송파구 문정동 123-4",
        );
        assert_eq!(places.len(), 1);
        assert_eq!(
            fields(&places[0]),
            [
                "백민식당",
                "한식",
                "김치찌개가 맛있는 현지식당",
                "김치찌개",
                "서울 송파구 문정동 123-4"
            ]
        );
    }

    #[test]
    fn test_well_formed_pipe_lines_keep_order_and_values() {
        let raw = "1. 가게A | 카페 | 조용한 카페 | 라떼 | 서울 중구 1\n\
                   2. 가게B | 분식 | 떡볶이 전문 | 떡볶이 | 서울 중구 2";
        let places = parse_recommendations(raw);
        assert_eq!(
            fields(&places[0]),
            ["가게A", "카페", "조용한 카페", "라떼", "서울 중구 1"]
        );
        assert_eq!(
            fields(&places[1]),
            ["가게B", "분식", "떡볶이 전문", "떡볶이", "서울 중구 2"]
        );
    }

    #[test]
    fn test_short_lines_pad_with_placeholder() {
        for (line, present) in [
            ("가게A", 1),
            ("가게A | 카페", 2),
            ("가게A | 카페 | 설명", 3),
            ("가게A | 카페 | 설명 | 라떼", 4),
        ] {
            let place = parse_line(line);
            let got = fields(&place);
            assert_eq!(got.len(), 5);
            for value in &got[present..] {
                assert_eq!(*value, FIELD_PLACEHOLDER);
            }
            assert_eq!(got[0], "가게A");
        }
    }

    #[test]
    fn test_extra_fields_are_dropped() {
        let place = parse_line("a | b | c | d | e | f | g");
        assert_eq!(fields(&place), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_empty_output_yields_no_records() {
        assert!(parse_recommendations("").is_empty());
        assert!(parse_recommendations("\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_empty_pieces_are_dropped_before_padding() {
        let place = parse_line("|| 가게A ||| 카페 |");
        assert_eq!(place.name, "가게A");
        assert_eq!(place.category, "카페");
        assert_eq!(place.description, FIELD_PLACEHOLDER);
    }

    #[test]
    fn test_spaced_hyphen_is_separator_but_inner_hyphen_is_kept() {
        let place = parse_line("2) 카페 - 디저트 - 케이크 맛집 - 치즈케이크 - 부산 해운대구 9-1");
        assert_eq!(place.name, "카페");
        assert_eq!(place.address, "부산 해운대구 9-1");
    }

    #[test]
    fn test_markdown_bullet_is_stripped() {
        let place = parse_line("- 가게A | 카페 | 설명 | 라떼 | 주소");
        assert_eq!(place.name, "가게A");
    }

    #[test]
    fn test_number_without_dot_is_kept() {
        assert_eq!(parse_line("63빌딩 | 전망대").name, "63빌딩");
    }

    #[test]
    fn test_prose_line_is_kept_as_partial_record() {
        let places = parse_recommendations("추천 목록입니다:\n1. 가게A | 카페 | 설명 | 라떼 | 주소");
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name, "추천 목록입니다:");
        assert_eq!(places[0].address, FIELD_PLACEHOLDER);
    }

    #[test]
    fn test_adversarial_input_never_panics() {
        for line in ["|", "1.", "1.|||", "–––", "9999999999999999999999. x", "\u{0}", "ä|ö"] {
            let place = parse_line(line);
            assert!(!place.name.is_empty());
        }
    }

    #[test]
    fn test_map_links_are_encoded_from_name() {
        let links = map_links("백민 식당");
        let encoded = "%EB%B0%B1%EB%AF%BC%20%EC%8B%9D%EB%8B%B9";
        assert_eq!(links.naver, format!("https://map.naver.com/p/search/{encoded}"));
        assert_eq!(links.kakao, format!("https://map.kakao.com/?q={encoded}"));
        assert_eq!(
            links.google,
            format!("https://www.google.com/maps/search/?api=1&query={encoded}")
        );
    }

    #[test]
    fn test_place_query_validation() {
        assert!(PlaceQuery::new("   ", PlaceKind::Travel, None).is_none());
        let query = PlaceQuery::new(" 제주 ", PlaceKind::Travel, None).unwrap();
        assert_eq!(query.location, "제주");
        assert_eq!(query.count, DEFAULT_PLACE_COUNT);
        assert_eq!(
            PlaceQuery::new("제주", PlaceKind::Travel, Some(0)).unwrap().count,
            1
        );
        assert_eq!(
            PlaceQuery::new("제주", PlaceKind::Travel, Some(50)).unwrap().count,
            MAX_PLACE_COUNT
        );
    }
}
