//! 가이드라인 엔진
//!
//! markup gap을 소수의 실행 가능한 파라미터 조정 제안으로 번역하고
//! 환율 노출 리스크를 정량화한다. 추천은 greedy 단일 패스 휴리스틱이며
//! 전역 최적해를 보장하지 않는다.

use cost_core::rounding::{round_krw, round_markup, round_pct, round_usd};
use cost_core::SimConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::SimulatorCategory;
use crate::state::{calculate_simulator_state, SimulatorState};

/// 현재 상태 분류 (±dead-band 기준)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkupStatus {
    /// 여유 (gap > dead-band)
    Surplus,
    /// 부족 (gap < −dead-band)
    Deficit,
    /// 적정
    Optimal,
}

/// 조정 대상 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjustField {
    /// 목표 TAG
    TargetTag,
    /// 원부자재
    Material,
    /// 공임
    Labor,
    /// 아트웍
    Artwork,
    /// 기타
    Other,
}

impl AdjustField {
    /// 한글 표기 (설명문/CSV용)
    pub fn korean(&self) -> &'static str {
        match self {
            AdjustField::TargetTag => "목표TAG",
            AdjustField::Material => "원부자재",
            AdjustField::Labor => "공임",
            AdjustField::Artwork => "아트웍",
            AdjustField::Other => "기타",
        }
    }
}

/// 조정 추천 항목 (독립 제안, 상호 배타 아님, 적용되지 않음)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentSuggestion {
    /// 대상 중분류
    pub category: String,
    /// 조정 항목
    pub field: AdjustField,
    /// 현재값
    pub current: Decimal,
    /// 제안값
    pub proposed: Decimal,
    /// 조정량 (절대)
    pub delta: Decimal,
    /// 조정률 (%)
    pub delta_pct: Decimal,
    /// 영향도 (전체 markup gap 해소 기여, % 단위)
    pub impact: Decimal,
    /// 설명
    pub rationale: String,
}

/// 환율 민감도 행
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSensitivity {
    /// 환율 오프셋 (KRW/USD)
    pub offset: Decimal,
    /// 적용 환율
    pub rate: Decimal,
    /// 해당 환율의 전체 markup
    pub markup: Decimal,
    /// 해당 환율의 전체 원가율 (%)
    pub cost_rate: Decimal,
    /// 현재 markup 대비 변화량
    pub markup_delta: Decimal,
}

/// 가이드라인 결과 (파생 값, 저장하지 않음)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidelineResult {
    /// 현재 상태
    pub status: MarkupStatus,
    /// markup gap
    pub gap: Decimal,
    /// 영향도 내림차순 추천 목록 (상한 적용)
    pub suggestions: Vec<AdjustmentSuggestion>,
    /// 환율 민감도 테이블
    pub sensitivity: Vec<RateSensitivity>,
}

/// 가이드라인 엔진
pub struct GuidanceEngine;

impl GuidanceEngine {
    /// 가이드라인 생성 (상태 분류 + 추천 + 환율 민감도)
    pub fn generate(state: &SimulatorState, config: &SimConfig) -> GuidelineResult {
        let gap = state.markup_gap;
        let status = if gap > config.dead_band {
            MarkupStatus::Surplus
        } else if gap < -config.dead_band {
            MarkupStatus::Deficit
        } else {
            MarkupStatus::Optimal
        };

        let suggestions = Self::adjustment_suggestions(state, config);
        let sensitivity = Self::rate_sensitivity(state, config);
        tracing::debug!(?status, %gap, suggestions = suggestions.len(), "가이드라인 생성");

        GuidelineResult {
            status,
            gap,
            suggestions,
            sensitivity,
        }
    }

    /// 조정 추천 생성 (greedy 단일 패스)
    ///
    /// 부족 상태에서는 중분류마다 원부자재 절감 / 공임 절감 / TAG 인상의
    /// 독립 후보를 최대 3건 만들고, 여유 상태에서는 수치 변경 없는 참고용
    /// 항목만 낸다. 전체를 영향도 절댓값 내림차순으로 정렬해 상한까지
    /// 자른다.
    pub fn adjustment_suggestions(
        state: &SimulatorState,
        config: &SimConfig,
    ) -> Vec<AdjustmentSuggestion> {
        let mut suggestions = Vec::new();
        let gap = state.markup_gap;

        if gap.abs() < config.dead_band {
            return suggestions;
        }

        // 잠금 해제된 중분류를 우선순위 오름차순으로
        let mut adjustable: Vec<&SimulatorCategory> =
            state.categories.iter().filter(|c| !c.locked).collect();
        adjustable.sort_by_key(|c| c.constraints.priority);

        if gap < Decimal::ZERO {
            for category in adjustable {
                suggestions.extend(Self::deficit_candidates(category, state));
            }
        } else {
            for category in adjustable {
                if let Some(s) = Self::surplus_advisory(category, state.target_markup) {
                    suggestions.push(s);
                }
            }
        }

        suggestions.sort_by(|a, b| b.impact.abs().cmp(&a.impact.abs()));
        suggestions.truncate(config.suggestion_cap);
        suggestions
    }

    /// 부족 상태의 후보 3종 (원부자재 절감, 공임 절감, TAG 인상)
    fn deficit_candidates(
        category: &SimulatorCategory,
        state: &SimulatorState,
    ) -> Vec<AdjustmentSuggestion> {
        let mut candidates = Vec::new();
        let ten_pct = Decimal::new(1, 1);
        let five_pct = Decimal::new(5, 2);

        // 이 중분류의 TAG 금액 비중
        let weight = if state.total_tag_amount.is_zero() {
            Decimal::ZERO
        } else {
            category.target_tag * category.quantity / state.total_tag_amount
        };

        // 1. 원부자재 감소: 하한까지 거리와 현재값 10% 중 작은 쪽
        if category.material > category.constraints.material_min {
            let max_reduction = category.material - category.constraints.material_min;
            let reduction = max_reduction.min(category.material * ten_pct);
            if reduction > Decimal::new(1, 2) {
                candidates.push(Self::cost_cut(
                    category,
                    state,
                    AdjustField::Material,
                    category.material,
                    reduction,
                    weight,
                ));
            }
        }

        // 2. 공임 감소: 같은 규칙
        if category.labor > category.constraints.labor_min {
            let max_reduction = category.labor - category.constraints.labor_min;
            let reduction = max_reduction.min(category.labor * ten_pct);
            if reduction > Decimal::new(1, 2) {
                candidates.push(Self::cost_cut(
                    category,
                    state,
                    AdjustField::Labor,
                    category.labor,
                    reduction,
                    weight,
                ));
            }
        }

        // 3. TAG 인상: 상한까지 거리와 현재값 5% 중 작은 쪽, ₩100 초과만
        if category.target_tag < category.constraints.target_tag_max {
            let max_increase = category.constraints.target_tag_max - category.target_tag;
            let increase = max_increase.min(category.target_tag * five_pct);
            if increase > Decimal::ONE_HUNDRED {
                let impact = if state.total_tag_amount.is_zero() {
                    Decimal::ZERO
                } else {
                    round_usd(weight * increase / state.total_tag_amount * Decimal::ONE_HUNDRED)
                };
                let rounded_increase = round_krw(increase);
                candidates.push(AdjustmentSuggestion {
                    category: category.category.clone(),
                    field: AdjustField::TargetTag,
                    current: category.target_tag,
                    proposed: round_krw(category.target_tag + increase),
                    delta: rounded_increase,
                    delta_pct: round_pct(
                        increase / category.target_tag * Decimal::ONE_HUNDRED,
                    ),
                    impact,
                    rationale: format!("목표 TAG ₩{} 인상", rounded_increase),
                });
            }
        }

        candidates
    }

    /// 원가측(USD 단가) 절감 후보 공통 생성
    fn cost_cut(
        category: &SimulatorCategory,
        state: &SimulatorState,
        field: AdjustField,
        current: Decimal,
        reduction: Decimal,
        weight: Decimal,
    ) -> AdjustmentSuggestion {
        let impact = if state.total_cost_krw.is_zero() {
            Decimal::ZERO
        } else {
            round_usd(
                weight * reduction * state.exchange_rate / state.total_cost_krw
                    * Decimal::ONE_HUNDRED,
            )
        };
        let rounded_reduction = round_usd(reduction);

        AdjustmentSuggestion {
            category: category.category.clone(),
            field,
            current,
            proposed: round_usd(current - reduction),
            delta: -rounded_reduction,
            delta_pct: round_pct(-reduction / current * Decimal::ONE_HUNDRED),
            impact,
            rationale: format!("{} 단가 ${} 절감", field.korean(), rounded_reduction),
        }
    }

    /// 여유 상태의 참고용 항목 (수치 변경 없음)
    fn surplus_advisory(
        category: &SimulatorCategory,
        target_markup: Decimal,
    ) -> Option<AdjustmentSuggestion> {
        let available_margin = category.markup - target_markup;
        if available_margin <= Decimal::new(1, 1) {
            return None;
        }

        let margin_pct = round_pct(available_margin * Decimal::ONE_HUNDRED / target_markup);
        Some(AdjustmentSuggestion {
            category: category.category.clone(),
            field: AdjustField::Material,
            current: category.material,
            proposed: category.material,
            delta: Decimal::ZERO,
            delta_pct: Decimal::ZERO,
            impact: Decimal::ZERO,
            rationale: format!("여유 마진 {}% - 품질 개선 가능", margin_pct),
        })
    }

    /// 환율 민감도 분석
    ///
    /// 설정된 오프셋마다 전체 상태를 재계산해 markup 변화를 본다
    pub fn rate_sensitivity(state: &SimulatorState, config: &SimConfig) -> Vec<RateSensitivity> {
        config
            .sensitivity_offsets
            .iter()
            .map(|&offset| {
                let rate = state.exchange_rate + offset;
                let shifted = calculate_simulator_state(
                    &state.categories,
                    rate,
                    &state.season,
                    state.target_markup,
                );
                RateSensitivity {
                    offset,
                    rate,
                    markup: shifted.overall_markup,
                    cost_rate: shifted.overall_cost_rate,
                    markup_delta: round_markup(shifted.overall_markup - state.overall_markup),
                }
            })
            .collect()
    }
}
