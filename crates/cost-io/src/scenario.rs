//! 시나리오 모델 (시뮬레이터 상태 스냅샷 + 메타데이터)

use chrono::{DateTime, Utc};
use cost_sim::SimulatorState;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 저장 가능한 시나리오
///
/// 시뮬레이터 상태 전체를 그대로 담는다. 가이드라인 결과 같은 파생 값은
/// 저장하지 않고 적재 후 재계산한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// 식별자
    pub id: Uuid,
    /// 시나리오 이름
    pub name: String,
    /// 설명 (선택)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 생성 시각
    pub created_at: DateTime<Utc>,
    /// 마지막 수정 시각
    pub updated_at: DateTime<Utc>,
    /// 시뮬레이터 상태 스냅샷
    pub state: SimulatorState,
}

impl Scenario {
    /// 새 시나리오 생성 (생성/수정 시각은 현재)
    pub fn new(name: impl Into<String>, state: SimulatorState) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            created_at: now,
            updated_at: now,
            state,
        }
    }

    /// 빌더: 설명 설정
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 시나리오 복제 (새 id와 시각, 출처 설명 자동 기입)
    pub fn duplicate(&self, new_name: impl Into<String>) -> Self {
        Scenario::new(new_name, self.state.clone())
            .with_description(format!("{}에서 복제됨", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cost_sim::calculate_simulator_state;
    use rust_decimal::Decimal;

    fn state() -> SimulatorState {
        calculate_simulator_state(&[], Decimal::from(1400), "27S", Decimal::new(45, 1))
    }

    #[test]
    fn test_duplicate_copies_state_with_new_identity() {
        let original = Scenario::new("기본안", state());
        let copy = original.duplicate("수정안");

        assert_ne!(copy.id, original.id);
        assert_eq!(copy.name, "수정안");
        assert_eq!(copy.description.as_deref(), Some("기본안에서 복제됨"));
        assert_eq!(copy.state, original.state);
    }

    #[test]
    fn test_serde_round_trip_camel_case() {
        let scenario = Scenario::new("기본안", state()).with_description("설명");
        let json = serde_json::to_string(&scenario).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));

        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scenario);
    }
}
