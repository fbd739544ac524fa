//! # Cost IO
//!
//! 원가 CSV 로드와 시나리오 저장/내보내기
//!
//! 분석 파이프라인의 입출력 경계. 로더는 숫자 결측을 0으로 흡수해
//! 레코드를 항상 완전한 형태로 돌려주고, 시나리오 저장소는 단일 JSON
//! 파일을 통째로 다시 쓰는 단순한 모델을 쓴다.

pub mod error;
pub mod export;
pub mod loader;
pub mod scenario;
pub mod store;

// 주요 타입 re-export
pub use error::{DataError, Result};
pub use export::{export_scenario_to_csv, export_scenario_to_json, import_scenario_from_json};
pub use loader::{load_records, load_records_from_reader};
pub use scenario::Scenario;
pub use store::ScenarioStore;
