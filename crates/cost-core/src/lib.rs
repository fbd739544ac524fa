//! # Cost Core
//!
//! 원가 분석 엔진의 핵심 데이터 모델과 타입 정의

pub mod compare;
pub mod config;
pub mod hierarchy;
pub mod record;
pub mod rounding;
pub mod season;
pub mod summary;

// 주요 타입 re-export
pub use compare::{CompareItem, CompareLevel, CompareSet};
pub use config::SimConfig;
pub use hierarchy::{ItemNode, SeasonHierarchy, StyleNode};
pub use record::{CostComponents, CostRecord, DomesticType};
pub use season::SeasonToken;
pub use summary::{
    CategorySummary, ItemDetail, SeasonDetail, SeasonSummary, TrendPoint, UnitPriceBreakdown,
};
