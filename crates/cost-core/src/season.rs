//! 시즌 토큰 파싱과 정렬

use std::cmp::Ordering;

/// 시즌 라벨에서 추출한 숫자 정렬 키 (예: "25S" → 25)
///
/// 숫자가 전혀 없는 라벨은 `None`이 되며, 최신순 정렬에서 항상 숫자
/// 토큰 뒤에 온다 (가장 오래된 시즌 취급). 동률은 라벨 문자열 비교로
/// 깨뜨려 정렬을 결정적으로 만든다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonToken(Option<u64>);

impl SeasonToken {
    /// 라벨에서 숫자 외 문자를 제거하고 파싱
    pub fn parse(label: &str) -> Self {
        let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();
        SeasonToken(digits.parse().ok())
    }

    /// 숫자 토큰 값
    pub fn value(&self) -> Option<u64> {
        self.0
    }
}

/// 시즌 라벨 오름차순 비교 (과거 → 최신, 숫자 없는 라벨이 가장 앞)
pub fn cmp_season_asc(a: &str, b: &str) -> Ordering {
    let ta = SeasonToken::parse(a).value();
    let tb = SeasonToken::parse(b).value();
    match (ta, tb) {
        (Some(na), Some(nb)) => na.cmp(&nb).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

/// 시즌 라벨 내림차순 비교 (최신 → 과거, 숫자 없는 라벨이 가장 뒤)
pub fn cmp_season_desc(a: &str, b: &str) -> Ordering {
    cmp_season_asc(b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token() {
        assert_eq!(SeasonToken::parse("25S").value(), Some(25));
        assert_eq!(SeasonToken::parse("24F").value(), Some(24));
        assert_eq!(SeasonToken::parse("27N").value(), Some(27));
        assert_eq!(SeasonToken::parse("미정").value(), None);
        assert_eq!(SeasonToken::parse("").value(), None);
    }

    #[test]
    fn test_desc_sort_puts_non_numeric_last() {
        let mut seasons = vec!["23S", "미정", "25S", "24F"];
        seasons.sort_by(|a, b| cmp_season_desc(a, b));
        assert_eq!(seasons, vec!["25S", "24F", "23S", "미정"]);
    }

    #[test]
    fn test_asc_sort_is_deterministic_on_ties() {
        // 같은 숫자 토큰은 라벨 문자열로 순서 고정
        let mut seasons = vec!["25S", "25F"];
        seasons.sort_by(|a, b| cmp_season_asc(a, b));
        assert_eq!(seasons, vec!["25F", "25S"]);
    }
}
