//! 시나리오 저장소 (단일 JSON 파일)
//!
//! 시나리오 전체를 하나의 JSON 파일로 관리하고 변이 때마다 파일을 통째로
//! 다시 쓴다. 시나리오는 수십 건 규모라 부분 쓰기가 필요 없고, 마지막
//! 쓰기가 이긴다.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::Result;
use crate::scenario::Scenario;

/// 파일 기반 시나리오 저장소
pub struct ScenarioStore {
    path: PathBuf,
    scenarios: Vec<Scenario>,
}

impl ScenarioStore {
    /// 저장소 열기 (파일이 없으면 빈 저장소)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let scenarios = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            Vec::new()
        };
        tracing::info!(path = %path.display(), scenarios = scenarios.len(), "시나리오 저장소 열기");
        Ok(Self { path, scenarios })
    }

    /// 시나리오 저장 (같은 id가 있으면 교체하고 수정 시각 갱신)
    pub fn save(&mut self, scenario: Scenario) -> Result<()> {
        let mut scenario = scenario;
        match self.scenarios.iter_mut().find(|s| s.id == scenario.id) {
            Some(existing) => {
                scenario.updated_at = chrono::Utc::now();
                *existing = scenario;
            }
            None => self.scenarios.push(scenario),
        }
        self.persist()
    }

    /// 전체 시나리오 (저장 순서)
    pub fn load_all(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// id로 조회
    pub fn get(&self, id: Uuid) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// 시나리오 삭제. 없는 id면 false
    pub fn delete(&mut self, id: Uuid) -> Result<bool> {
        let before = self.scenarios.len();
        self.scenarios.retain(|s| s.id != id);
        if self.scenarios.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.scenarios)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cost_sim::calculate_simulator_state;
    use rust_decimal::Decimal;

    fn scenario(name: &str) -> Scenario {
        let state =
            calculate_simulator_state(&[], Decimal::from(1400), "27S", Decimal::new(45, 1));
        Scenario::new(name, state)
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScenarioStore::open(dir.path().join("scenarios.json")).unwrap();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenarios.json");

        let mut store = ScenarioStore::open(&path).unwrap();
        let saved = scenario("기본안");
        let id = saved.id;
        store.save(saved).unwrap();
        store.save(scenario("수정안")).unwrap();

        let reopened = ScenarioStore::open(&path).unwrap();
        assert_eq!(reopened.load_all().len(), 2);
        assert_eq!(reopened.get(id).map(|s| s.name.as_str()), Some("기본안"));
    }

    #[test]
    fn test_save_same_id_upserts_and_touches() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ScenarioStore::open(dir.path().join("s.json")).unwrap();

        let original = scenario("기본안");
        let id = original.id;
        let created_at = original.created_at;
        store.save(original.clone()).unwrap();

        let mut renamed = original;
        renamed.name = "기본안 v2".to_string();
        store.save(renamed).unwrap();

        assert_eq!(store.load_all().len(), 1);
        let stored = store.get(id).unwrap();
        assert_eq!(stored.name, "기본안 v2");
        assert_eq!(stored.created_at, created_at);
        assert!(stored.updated_at >= created_at);
    }

    #[test]
    fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.json");
        let mut store = ScenarioStore::open(&path).unwrap();

        let saved = scenario("기본안");
        let id = saved.id;
        store.save(saved).unwrap();

        assert!(store.delete(id).unwrap());
        assert!(!store.delete(id).unwrap());
        assert!(ScenarioStore::open(&path).unwrap().load_all().is_empty());
    }
}
