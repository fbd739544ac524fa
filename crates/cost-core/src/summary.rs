//! 가중평균 요약 모델
//!
//! 모든 요약은 필터 변경 시마다 원본 레코드에서 새로 계산되며 제자리
//! 수정하지 않는다. 수량이 0인 그룹의 파생 값은 전부 0이다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 단가 구성 내역 (수량 가중평균, USD)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitPriceBreakdown {
    /// 원부자재단가
    pub material: Decimal,
    /// 아트웍단가
    pub artwork: Decimal,
    /// 공임단가
    pub labor: Decimal,
    /// 기타경비단가
    pub other: Decimal,
}

/// 중분류 요약 (특정 시즌)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// 중분류
    pub category: String,
    /// 발주수량 합계
    pub order_qty: Decimal,
    /// 평균 TAG (KRW)
    pub avg_tag: Decimal,
    /// 평균 원가 (USD)
    pub avg_cost_usd: Decimal,
    /// 평균 원가 (KRW)
    pub avg_cost_krw: Decimal,
    /// 원가율 (%)
    pub cost_rate: Decimal,
    /// 평균 적용환율
    pub exchange_rate: Decimal,
}

/// 특정 중분류의 시즌별 상세 행
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonDetail {
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
    /// 단가 구성 내역
    pub breakdown: UnitPriceBreakdown,
}

/// 시즌 전체 요약 (모든 중분류 합산)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
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
    /// 원가율 (%)
    pub cost_rate: Decimal,
    /// 평균 적용환율
    pub exchange_rate: Decimal,
    /// 단가 구성 내역
    pub breakdown: UnitPriceBreakdown,
}

/// 추이 그래프용 포인트 (중분류 × 시즌)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// 시즌
    pub season: String,
    /// 중분류
    pub category: String,
    /// 평균 적용환율
    pub exchange_rate: Decimal,
    /// 평균 TAG (KRW)
    pub avg_tag: Decimal,
    /// 평균 원가 (USD)
    pub avg_cost_usd: Decimal,
    /// 원가율 (%)
    pub cost_rate: Decimal,
    /// 단가 구성 내역
    pub breakdown: UnitPriceBreakdown,
}

/// 아이템별/스타일별 상세 행 (키는 아이템명 또는 스타일 코드)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    /// 그룹 키 (아이템명 또는 스타일)
    pub key: String,
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
