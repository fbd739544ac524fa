//! 시뮬레이터 상태와 전체 재계산

use cost_core::rounding::{round_krw, round_markup, round_pct, round_usd};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::SimulatorCategory;

/// 중분류 편집 명령
///
/// 문자열 필드명 대신 태그된 variant로 편집을 표현한다. 모든 편집은
/// 단일 reducer를 거치며 적용 직후 전체 상태가 재계산된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CategoryEdit {
    /// 목표 TAG 변경 (KRW)
    SetTargetTag(Decimal),
    /// 원부자재 단가 변경 (USD)
    SetMaterial(Decimal),
    /// 공임 단가 변경 (USD)
    SetLabor(Decimal),
    /// 아트웍 단가 변경 (USD)
    SetArtwork(Decimal),
    /// 기타 단가 변경 (USD)
    SetOther(Decimal),
    /// 발주수량 변경
    SetQuantity(Decimal),
    /// 잠금 상태 변경
    SetLocked(bool),
    /// 조정 우선순위 변경
    SetPriority(u8),
}

/// 시뮬레이터 전체 상태 (what-if 스냅샷)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorState {
    /// 대상 시즌 (예: "27S")
    pub season: String,
    /// 예상 환율 (KRW/USD)
    pub exchange_rate: Decimal,
    /// 중분류 목록
    pub categories: Vec<SimulatorCategory>,
    /// 전체 발주수량
    pub total_quantity: Decimal,
    /// 전체 TAG 금액 (KRW)
    pub total_tag_amount: Decimal,
    /// 전체 원가 금액 (KRW)
    pub total_cost_krw: Decimal,
    /// 전체 markup (TAG금액 가중)
    pub overall_markup: Decimal,
    /// 전체 원가율 (%)
    pub overall_cost_rate: Decimal,
    /// 목표 markup
    pub target_markup: Decimal,
    /// 목표 대비 gap (전체 markup − 목표)
    pub markup_gap: Decimal,
}

/// 중분류 파생 블록 재계산 (순수 함수, 입력 불변)
///
/// 총원가 USD = 4개 단가 합, 총원가 KRW = USD × 환율,
/// 원가율 = KRW원가/목표TAG×100 (TAG 0이면 0),
/// markup = 목표TAG/KRW원가 (원가 0이면 0).
/// 같은 환율로 두 번 적용해도 결과가 같다 (멱등).
pub fn update_category_calculations(
    category: &SimulatorCategory,
    exchange_rate: Decimal,
) -> SimulatorCategory {
    let total_cost_usd = category.material + category.labor + category.artwork + category.other;
    let total_cost_krw = total_cost_usd * exchange_rate;
    let cost_rate = if category.target_tag > Decimal::ZERO {
        total_cost_krw / category.target_tag * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let markup = if total_cost_krw > Decimal::ZERO {
        category.target_tag / total_cost_krw
    } else {
        Decimal::ZERO
    };

    let mut updated = category.clone();
    updated.total_cost_usd = round_usd(total_cost_usd);
    updated.total_cost_krw = round_krw(total_cost_krw);
    updated.cost_rate = round_pct(cost_rate);
    updated.markup = round_markup(markup);
    updated
}

/// 전체 상태 재계산 (순수 함수)
///
/// 모든 중분류를 재계산한 뒤 시즌 전체 KPI를 집계한다.
pub fn calculate_simulator_state(
    categories: &[SimulatorCategory],
    exchange_rate: Decimal,
    season: &str,
    target_markup: Decimal,
) -> SimulatorState {
    let updated: Vec<SimulatorCategory> = categories
        .iter()
        .map(|c| update_category_calculations(c, exchange_rate))
        .collect();

    let total_quantity: Decimal = updated.iter().map(|c| c.quantity).sum();
    let total_tag_amount: Decimal = updated.iter().map(|c| c.target_tag * c.quantity).sum();
    let total_cost_krw: Decimal = updated.iter().map(|c| c.total_cost_krw * c.quantity).sum();

    let overall_markup = if total_cost_krw > Decimal::ZERO {
        total_tag_amount / total_cost_krw
    } else {
        Decimal::ZERO
    };
    let overall_cost_rate = if total_tag_amount > Decimal::ZERO {
        total_cost_krw / total_tag_amount * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let markup_gap = overall_markup - target_markup;

    SimulatorState {
        season: season.to_string(),
        exchange_rate,
        categories: updated,
        total_quantity,
        total_tag_amount: round_krw(total_tag_amount),
        total_cost_krw: round_krw(total_cost_krw),
        overall_markup: round_markup(overall_markup),
        overall_cost_rate: round_pct(overall_cost_rate),
        target_markup,
        markup_gap: round_markup(markup_gap),
    }
}
