//! 시뮬레이터 (편집 가능한 what-if 모델 소유)

use cost_calc::WeightedStats;
use cost_core::rounding::{round_krw, round_usd};
use cost_core::{CostRecord, SimConfig};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::category::SimulatorCategory;
use crate::state::{calculate_simulator_state, CategoryEdit, SimulatorState};

/// 원가 시뮬레이터
///
/// 현재 상태와 초기 중분류(리셋용)를 소유한다. 모든 변이는 동기적으로
/// 전체 재계산을 거친 새 상태를 만든다.
pub struct Simulator {
    state: SimulatorState,
    baseline: Vec<SimulatorCategory>,
    config: SimConfig,
}

impl Simulator {
    /// 최신 시즌 레코드에서 시뮬레이터 초기화
    ///
    /// 중분류별로 수량 가중평균한 TAG/단가를 초기값으로 쓰고 기본
    /// 제약조건을 붙인다. 수량 합이 0인 중분류는 제외한다.
    pub fn from_records(
        records: &[CostRecord],
        latest_season: &str,
        target_season: &str,
        exchange_rate: Decimal,
        config: SimConfig,
    ) -> Self {
        let categories = build_categories(records, latest_season);
        tracing::info!(
            latest_season,
            target_season,
            categories = categories.len(),
            "시뮬레이터 초기화"
        );

        let state = calculate_simulator_state(
            &categories,
            exchange_rate,
            target_season,
            config.target_markup,
        );
        Self {
            state,
            baseline: categories,
            config,
        }
    }

    /// 중분류 목록으로 직접 초기화 (테스트/수동 구성용)
    pub fn from_categories(
        categories: Vec<SimulatorCategory>,
        target_season: &str,
        exchange_rate: Decimal,
        config: SimConfig,
    ) -> Self {
        let state = calculate_simulator_state(
            &categories,
            exchange_rate,
            target_season,
            config.target_markup,
        );
        Self {
            state,
            baseline: categories,
            config,
        }
    }

    /// 현재 상태
    pub fn state(&self) -> &SimulatorState {
        &self.state
    }

    /// 설정
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// 편집 명령 적용. 알 수 없는 id는 no-op이며 false 반환
    pub fn apply(&mut self, category_id: Uuid, edit: CategoryEdit) -> bool {
        let Some(category) = self
            .state
            .categories
            .iter_mut()
            .find(|c| c.id == category_id)
        else {
            tracing::warn!(%category_id, "존재하지 않는 중분류 편집 무시");
            return false;
        };

        match edit {
            CategoryEdit::SetTargetTag(v) => category.target_tag = v,
            CategoryEdit::SetMaterial(v) => category.material = v,
            CategoryEdit::SetLabor(v) => category.labor = v,
            CategoryEdit::SetArtwork(v) => category.artwork = v,
            CategoryEdit::SetOther(v) => category.other = v,
            CategoryEdit::SetQuantity(v) => category.quantity = v,
            CategoryEdit::SetLocked(v) => category.locked = v,
            CategoryEdit::SetPriority(v) => category.constraints.priority = v,
        }

        self.recalculate();
        true
    }

    /// 예상 환율 변경
    pub fn set_exchange_rate(&mut self, exchange_rate: Decimal) {
        self.state.exchange_rate = exchange_rate;
        self.recalculate();
    }

    /// 초기 중분류로 리셋 (환율과 대상 시즌은 유지)
    pub fn reset(&mut self) {
        self.state.categories = self.baseline.clone();
        self.recalculate();
    }

    /// 시나리오 스냅샷 적재 (적재 직후 재계산)
    pub fn load_state(&mut self, state: SimulatorState) {
        self.state = calculate_simulator_state(
            &state.categories,
            state.exchange_rate,
            &state.season,
            state.target_markup,
        );
    }

    fn recalculate(&mut self) {
        self.state = calculate_simulator_state(
            &self.state.categories,
            self.state.exchange_rate,
            &self.state.season,
            self.state.target_markup,
        );
    }
}

/// 최신 시즌 레코드를 중분류별로 집계해 시뮬레이터 중분류 생성
fn build_categories(records: &[CostRecord], latest_season: &str) -> Vec<SimulatorCategory> {
    let latest: Vec<&CostRecord> = records
        .iter()
        .filter(|r| r.season == latest_season)
        .collect();

    // 등장 순서 유지 그룹화
    let mut names: Vec<&str> = Vec::new();
    for r in &latest {
        if !names.contains(&r.category.as_str()) {
            names.push(r.category.as_str());
        }
    }

    names
        .into_iter()
        .filter_map(|name| {
            let stats =
                WeightedStats::collect(latest.iter().copied().filter(|r| r.category == name));
            if stats.is_empty() {
                return None;
            }

            Some(SimulatorCategory::new(
                name,
                round_krw(stats.tag),
                round_usd(stats.material),
                round_usd(stats.labor),
                round_usd(stats.artwork),
                round_usd(stats.other),
                stats.total_qty,
            ))
        })
        .collect()
}
