//! # Cost Calculation Engine
//!
//! 수량 가중평균 집계 엔진
//!
//! 임의의 레코드 부분집합에 대해 중분류/시즌/아이템/스타일 단위의
//! 가중평균 요약을 계산한다. 모든 연산은 순수 함수이며 입력 순서와
//! 무관하게 결정적인 결과를 낸다. 수량 합계가 0인 그룹의 파생 값은
//! 전부 0으로 정의한다 (empty-group 정책).

pub mod aggregator;
pub mod filter;
pub mod hierarchy;
pub mod weighted;

// 주요 타입 re-export
pub use aggregator::Aggregator;
pub use weighted::WeightedStats;
