//! 레코드 필터
//!
//! 적용 순서는 내수구분 → 중분류 → 시즌. 내수구분 필터가 가장 싸기
//! 때문에 먼저 적용한다.

use cost_core::season::cmp_season_asc;
use cost_core::{CostRecord, DomesticType};

/// 내수구분 필터. 선택이 비어 있으면 빈 결과
pub fn filter_by_domestic<'a>(
    records: impl IntoIterator<Item = &'a CostRecord>,
    types: &[DomesticType],
) -> Vec<&'a CostRecord> {
    if types.is_empty() {
        return Vec::new();
    }
    records
        .into_iter()
        .filter(|r| types.contains(&r.domestic_type))
        .collect()
}

/// 중분류 필터
pub fn filter_by_category<'a>(
    records: impl IntoIterator<Item = &'a CostRecord>,
    category: &str,
) -> Vec<&'a CostRecord> {
    records
        .into_iter()
        .filter(|r| r.category == category)
        .collect()
}

/// 시즌 필터
pub fn filter_by_season<'a>(
    records: impl IntoIterator<Item = &'a CostRecord>,
    season: &str,
) -> Vec<&'a CostRecord> {
    records
        .into_iter()
        .filter(|r| r.season == season)
        .collect()
}

/// 레코드에 존재하는 시즌 목록 (토큰 오름차순)
pub fn available_seasons<'a>(records: impl IntoIterator<Item = &'a CostRecord>) -> Vec<String> {
    let mut seasons = distinct(records.into_iter().map(|r| r.season.as_str()));
    seasons.sort_by(|a, b| cmp_season_asc(a, b));
    seasons
}

/// 레코드에 존재하는 중분류 목록 (등장 순서 유지, 빈 값 제외)
pub fn available_categories<'a>(records: impl IntoIterator<Item = &'a CostRecord>) -> Vec<String> {
    distinct(
        records
            .into_iter()
            .map(|r| r.category.as_str())
            .filter(|c| !c.is_empty()),
    )
}

/// 첫 등장 순서를 유지하는 중복 제거
pub(crate) fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
