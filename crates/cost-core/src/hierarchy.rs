//! 계층 구조 모델 (시즌 → 아이템 → 스타일)
//!
//! 소유 관계는 엄격한 트리 형태이며 역참조가 없다. 시즌은 최신순,
//! 아이템/스타일은 발주수량 내림차순으로 정렬된 상태로 생성된다.

use crate::summary::UnitPriceBreakdown;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 스타일 노드 (말단)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleNode {
    /// 스타일 코드
    pub style: String,
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

/// 아이템 노드 (스타일 목록 소유)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemNode {
    /// 아이템명
    pub item_name: String,
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
    /// 소속 스타일 (발주수량 내림차순)
    pub styles: Vec<StyleNode>,
}

/// 시즌 노드 (아이템 목록 소유)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonHierarchy {
    /// 시즌
    pub season: String,
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
    /// 소속 아이템 (발주수량 내림차순)
    pub items: Vec<ItemNode>,
}
