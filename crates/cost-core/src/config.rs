//! 시뮬레이션 설정

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 시뮬레이터/가이드라인 설정
///
/// 전역 가변 상수 대신 호출 시점에 전달하는 명시적 설정 구조체.
/// 기본값: 목표 markup 4.5 (원가율 약 22.2%), dead-band ±0.05,
/// 환율 민감도 오프셋 ±50/±100원, 추천 항목 상한 10개.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// 목표 markup (TAG ÷ 총원가 KRW)
    pub target_markup: Decimal,
    /// 목표 대비 허용 오차 (markup 단위)
    pub dead_band: Decimal,
    /// 환율 민감도 분석 오프셋 (KRW/USD)
    pub sensitivity_offsets: Vec<Decimal>,
    /// 조정 추천 목록 상한
    pub suggestion_cap: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            target_markup: Decimal::new(45, 1),
            dead_band: Decimal::new(5, 2),
            sensitivity_offsets: vec![
                Decimal::from(-100),
                Decimal::from(-50),
                Decimal::from(50),
                Decimal::from(100),
            ],
            suggestion_cap: 10,
        }
    }
}
