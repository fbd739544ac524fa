//! 반올림 규칙
//!
//! 모든 금액/비율 반올림은 사사오입(round-half-up, 0에서 멀어지는 방향)으로
//! 통일한다. KRW 금액과 수량은 정수, USD 단가와 환율은 소수 2자리,
//! 원가율은 소수 1자리, markup은 소수 2자리.

use rust_decimal::{Decimal, RoundingStrategy};

/// KRW 금액/수량: 정수 반올림
pub fn round_krw(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// USD 단가/환율: 소수 2자리
pub fn round_usd(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// 원가율(%): 소수 1자리
pub fn round_pct(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// markup 배율: 소수 2자리
pub fn round_markup(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
