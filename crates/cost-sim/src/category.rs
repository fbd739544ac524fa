//! 시뮬레이터 중분류 모델

use cost_core::rounding::{round_krw, round_usd};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 중분류별 조정 가능 범위와 우선순위
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryConstraints {
    /// 목표 TAG 하한 (KRW)
    pub target_tag_min: Decimal,
    /// 목표 TAG 상한 (KRW)
    pub target_tag_max: Decimal,
    /// 원부자재 하한 (USD)
    pub material_min: Decimal,
    /// 원부자재 상한 (USD)
    pub material_max: Decimal,
    /// 공임 하한 (USD)
    pub labor_min: Decimal,
    /// 공임 상한 (USD)
    pub labor_max: Decimal,
    /// 아트웍 하한 (USD)
    pub artwork_min: Decimal,
    /// 아트웍 상한 (USD)
    pub artwork_max: Decimal,
    /// 기타 하한 (USD)
    pub other_min: Decimal,
    /// 기타 상한 (USD)
    pub other_max: Decimal,
    /// 조정 우선순위 (낮을수록 먼저 조정)
    pub priority: u8,
}

impl CategoryConstraints {
    /// 초기값 기반 기본 범위
    ///
    /// 목표 TAG [90%, 120%], 원부자재 [70%, 130%], 공임 [80%, 120%],
    /// 아트웍 [50%, 150%], 기타 [80%, 120%], 우선순위 5
    pub fn defaults_for(
        target_tag: Decimal,
        material: Decimal,
        labor: Decimal,
        artwork: Decimal,
        other: Decimal,
    ) -> Self {
        let pct = |v: Decimal, num: i64| v * Decimal::new(num, 1);
        Self {
            target_tag_min: round_krw(pct(target_tag, 9)),
            target_tag_max: round_krw(pct(target_tag, 12)),
            material_min: round_usd(pct(material, 7)),
            material_max: round_usd(pct(material, 13)),
            labor_min: round_usd(pct(labor, 8)),
            labor_max: round_usd(pct(labor, 12)),
            artwork_min: round_usd(pct(artwork, 5)),
            artwork_max: round_usd(pct(artwork, 15)),
            other_min: round_usd(pct(other, 8)),
            other_max: round_usd(pct(other, 12)),
            priority: 5,
        }
    }
}

/// 시뮬레이터 중분류 (편집 가능한 파라미터 + 파생 블록)
///
/// 입력 필드나 전역 환율이 바뀔 때마다 파생 블록은 전부 재계산되며
/// 직접 수정하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorCategory {
    /// 식별자 (편집 명령 주소)
    pub id: Uuid,
    /// 중분류
    pub category: String,
    /// 목표 TAG (KRW, 편집 가능)
    pub target_tag: Decimal,
    /// 원부자재 단가 (USD, 편집 가능)
    pub material: Decimal,
    /// 공임 단가 (USD, 편집 가능)
    pub labor: Decimal,
    /// 아트웍 단가 (USD, 편집 가능)
    pub artwork: Decimal,
    /// 기타 단가 (USD, 편집 가능)
    pub other: Decimal,
    /// 발주수량 (편집 가능)
    pub quantity: Decimal,
    /// 총원가 (USD, 파생)
    pub total_cost_usd: Decimal,
    /// 총원가 (KRW, 파생)
    pub total_cost_krw: Decimal,
    /// 원가율 (%, 파생)
    pub cost_rate: Decimal,
    /// markup (파생)
    pub markup: Decimal,
    /// 조정 가능 범위
    pub constraints: CategoryConstraints,
    /// 자동 조정 제외 여부
    pub locked: bool,
}

impl SimulatorCategory {
    /// 초기값으로 생성 (파생 블록 0, 기본 제약, 잠금 해제)
    pub fn new(
        category: impl Into<String>,
        target_tag: Decimal,
        material: Decimal,
        labor: Decimal,
        artwork: Decimal,
        other: Decimal,
        quantity: Decimal,
    ) -> Self {
        let constraints =
            CategoryConstraints::defaults_for(target_tag, material, labor, artwork, other);
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            target_tag,
            material,
            labor,
            artwork,
            other,
            quantity,
            total_cost_usd: Decimal::ZERO,
            total_cost_krw: Decimal::ZERO,
            cost_rate: Decimal::ZERO,
            markup: Decimal::ZERO,
            constraints,
            locked: false,
        }
    }

    /// 빌더: 우선순위 설정
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.constraints.priority = priority;
        self
    }

    /// 빌더: 잠금 설정
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }
}
