//! 레벨 간 비교 기능

use crate::hierarchy::{ItemNode, StyleNode};
use crate::summary::{SeasonDetail, UnitPriceBreakdown};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 비교 대상 레벨
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareLevel {
    /// 시즌 행
    Season,
    /// 아이템 행
    Item,
    /// 스타일 행
    Style,
}

/// 비교용 평탄화 행 (레벨 태그 포함)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareItem {
    /// 비교 집합 내 식별자
    pub id: String,
    /// 레벨 태그
    pub level: CompareLevel,
    /// 표시 라벨
    pub label: String,
    /// 발주수량 합계
    pub order_qty: Decimal,
    /// 평균 TAG (KRW)
    pub avg_tag: Decimal,
    /// 평균 원가 (USD)
    pub avg_cost_usd: Decimal,
    /// 평균 원가 (KRW)
    pub avg_cost_krw: Decimal,
    /// 평균 적용환율
    pub exchange_rate: Decimal,
    /// 단가 구성 내역
    pub breakdown: UnitPriceBreakdown,
}

impl CompareItem {
    /// 시즌별 상세 행에서 생성
    pub fn from_season_detail(category: &str, detail: &SeasonDetail) -> Self {
        Self {
            id: format!("season:{}:{}", category, detail.season),
            level: CompareLevel::Season,
            label: detail.season.clone(),
            order_qty: detail.order_qty,
            avg_tag: detail.avg_tag,
            avg_cost_usd: detail.avg_cost_usd,
            avg_cost_krw: detail.avg_cost_krw,
            exchange_rate: detail.exchange_rate,
            breakdown: detail.breakdown.clone(),
        }
    }

    /// 계층 구조의 아이템 노드에서 생성
    pub fn from_item(season: &str, item: &ItemNode) -> Self {
        Self {
            id: format!("item:{}:{}", season, item.item_name),
            level: CompareLevel::Item,
            label: item.item_name.clone(),
            order_qty: item.order_qty,
            avg_tag: item.avg_tag,
            avg_cost_usd: item.avg_cost_usd,
            avg_cost_krw: item.avg_cost_krw,
            exchange_rate: item.exchange_rate,
            breakdown: item.breakdown.clone(),
        }
    }

    /// 계층 구조의 스타일 노드에서 생성
    pub fn from_style(season: &str, style: &StyleNode) -> Self {
        Self {
            id: format!("style:{}:{}", season, style.style),
            level: CompareLevel::Style,
            label: style.style.clone(),
            order_qty: style.order_qty,
            avg_tag: style.avg_tag,
            avg_cost_usd: style.avg_cost_usd,
            avg_cost_krw: style.avg_cost_krw,
            exchange_rate: style.exchange_rate,
            breakdown: style.breakdown.clone(),
        }
    }
}

/// 동일 레벨만 담는 비교 집합
///
/// 불변식: 모든 원소의 `level`이 같다. 레벨이 다른 항목의 추가는
/// 기존 집합에 아무 영향 없이 거부된다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompareSet {
    items: Vec<CompareItem>,
}

impl CompareSet {
    /// 빈 집합 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 집합의 레벨 (비어 있으면 None)
    pub fn level(&self) -> Option<CompareLevel> {
        self.items.first().map(|i| i.level)
    }

    /// 항목 추가. 레벨 불일치 또는 중복 id는 no-op이며 false 반환
    pub fn add(&mut self, item: CompareItem) -> bool {
        if let Some(level) = self.level() {
            if level != item.level {
                return false;
            }
        }
        if self.items.iter().any(|i| i.id == item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// id로 항목 제거
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// 항목 목록
    pub fn items(&self) -> &[CompareItem] {
        &self.items
    }

    /// 집합이 비어 있는지 여부
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 항목 수
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, level: CompareLevel) -> CompareItem {
        CompareItem {
            id: id.to_string(),
            level,
            label: id.to_string(),
            order_qty: Decimal::from(10),
            avg_tag: Decimal::from(1000),
            avg_cost_usd: Decimal::from(5),
            avg_cost_krw: Decimal::from(6500),
            exchange_rate: Decimal::from(1300),
            breakdown: UnitPriceBreakdown::default(),
        }
    }

    #[test]
    fn test_rejects_mixed_levels() {
        let mut set = CompareSet::new();
        assert!(set.add(item("a", CompareLevel::Item)));
        assert!(set.add(item("b", CompareLevel::Item)));

        // 레벨이 다르면 no-op
        assert!(!set.add(item("c", CompareLevel::Style)));
        assert_eq!(set.len(), 2);
        assert_eq!(set.level(), Some(CompareLevel::Item));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let mut set = CompareSet::new();
        assert!(set.add(item("a", CompareLevel::Season)));
        assert!(!set.add(item("a", CompareLevel::Season)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_resets_level_when_empty() {
        let mut set = CompareSet::new();
        set.add(item("a", CompareLevel::Style));
        assert!(set.remove("a"));
        assert!(set.is_empty());
        assert_eq!(set.level(), None);

        // 비워진 뒤에는 다른 레벨도 다시 허용
        assert!(set.add(item("b", CompareLevel::Season)));
    }
}
