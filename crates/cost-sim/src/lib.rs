//! # Cost Simulator
//!
//! 차기 시즌 원가 what-if 시뮬레이션과 조정 가이드라인
//!
//! 중분류별 편집 가능한 원가 파라미터를 보유하고, 모든 편집/환율 변경
//! 직후 전체 상태를 동기적으로 재계산한다 (부분 갱신 경로 없음).
//! 파생 값이 낡은 채로 노출되는 일이 없도록 하는 대신, 편집마다
//! O(중분류 수) 재계산 비용을 치른다. 중분류는 8개 내외라 충분히 싸다.

pub mod category;
pub mod guideline;
pub mod simulator;
pub mod state;

// 주요 타입 re-export
pub use category::{CategoryConstraints, SimulatorCategory};
pub use guideline::{
    AdjustField, AdjustmentSuggestion, GuidanceEngine, GuidelineResult, MarkupStatus,
    RateSensitivity,
};
pub use simulator::Simulator;
pub use state::{calculate_simulator_state, update_category_calculations, CategoryEdit, SimulatorState};
