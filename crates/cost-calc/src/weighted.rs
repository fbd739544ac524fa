//! 수량 가중평균 누산기

use cost_core::rounding::round_usd;
use cost_core::summary::UnitPriceBreakdown;
use cost_core::CostRecord;
use rust_decimal::Decimal;

/// 레코드 부분집합의 수량 가중평균 통계
///
/// 각 항목 f에 대해 Σ(f × 수량) / Σ수량. 수량 합이 0이면 모든 평균은
/// 0이다 (NaN/오류 없음). 값은 반올림 전 원시 가중평균이며, 반올림은
/// 요약 생성 시점에 적용한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedStats {
    /// 수량 합계
    pub total_qty: Decimal,
    /// 가중 TAG (KRW)
    pub tag: Decimal,
    /// 가중 총원가 (USD)
    pub cost_usd: Decimal,
    /// 가중 총원가 (KRW)
    pub cost_krw: Decimal,
    /// 가중 적용환율
    pub exchange_rate: Decimal,
    /// 가중 원부자재단가 (USD)
    pub material: Decimal,
    /// 가중 아트웍단가 (USD)
    pub artwork: Decimal,
    /// 가중 공임단가 (USD)
    pub labor: Decimal,
    /// 가중 기타경비단가 (USD)
    pub other: Decimal,
}

impl WeightedStats {
    /// 한 번의 순회로 전체 통계 수집
    pub fn collect<'a>(records: impl IntoIterator<Item = &'a CostRecord>) -> Self {
        let mut total_qty = Decimal::ZERO;
        let mut tag = Decimal::ZERO;
        let mut cost_usd = Decimal::ZERO;
        let mut cost_krw = Decimal::ZERO;
        let mut exchange_rate = Decimal::ZERO;
        let mut material = Decimal::ZERO;
        let mut artwork = Decimal::ZERO;
        let mut labor = Decimal::ZERO;
        let mut other = Decimal::ZERO;

        for r in records {
            let qty = r.quantity;
            total_qty += qty;
            tag += r.tag_price * qty;
            cost_usd += r.total_cost_usd() * qty;
            cost_krw += r.total_cost_krw() * qty;
            exchange_rate += r.exchange_rate * qty;
            material += r.material_cost_usd() * qty;
            artwork += r.artwork_cost_usd() * qty;
            labor += r.labor_cost_usd() * qty;
            other += r.other_cost_usd() * qty;
        }

        if total_qty.is_zero() {
            return WeightedStats::default();
        }

        WeightedStats {
            total_qty,
            tag: tag / total_qty,
            cost_usd: cost_usd / total_qty,
            cost_krw: cost_krw / total_qty,
            exchange_rate: exchange_rate / total_qty,
            material: material / total_qty,
            artwork: artwork / total_qty,
            labor: labor / total_qty,
            other: other / total_qty,
        }
    }

    /// 수량 합계가 0인지 여부
    pub fn is_empty(&self) -> bool {
        self.total_qty.is_zero()
    }

    /// 원가율 (%) = 가중원가KRW ÷ 가중TAG × 100, TAG가 0이면 0
    pub fn cost_rate(&self) -> Decimal {
        if self.tag.is_zero() {
            Decimal::ZERO
        } else {
            self.cost_krw / self.tag * Decimal::ONE_HUNDRED
        }
    }

    /// 반올림 적용된 단가 구성 내역
    pub fn breakdown(&self) -> UnitPriceBreakdown {
        UnitPriceBreakdown {
            material: round_usd(self.material),
            artwork: round_usd(self.artwork),
            labor: round_usd(self.labor),
            other: round_usd(self.other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cost_core::{CostComponents, DomesticType};

    fn record(tag: i64, qty: i64, labor_usd: i64) -> CostRecord {
        CostRecord::new(
            "25S",
            "ST-001",
            "Outer",
            "자켓",
            Decimal::from(tag),
            Decimal::from(qty),
            DomesticType::Domestic,
            Decimal::from(1300),
            CostComponents {
                labor: Decimal::from(labor_usd),
                ..CostComponents::default()
            },
        )
    }

    #[test]
    fn test_weighted_average() {
        // (1000×10 + 2000×30) / 40 = 1750
        let records = vec![record(1000, 10, 2), record(2000, 30, 6)];
        let stats = WeightedStats::collect(&records);

        assert_eq!(stats.total_qty, Decimal::from(40));
        assert_eq!(stats.tag, Decimal::from(1750));
        // 공임: (2×10 + 6×30) / 40 = 5
        assert_eq!(stats.labor, Decimal::from(5));
    }

    #[test]
    fn test_zero_quantity_group_is_all_zero() {
        let records = vec![record(1000, 0, 2)];
        let stats = WeightedStats::collect(&records);

        assert!(stats.is_empty());
        assert_eq!(stats.tag, Decimal::ZERO);
        assert_eq!(stats.cost_krw, Decimal::ZERO);
        assert_eq!(stats.cost_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_order_independence() {
        let a = vec![record(1000, 10, 2), record(2000, 30, 6), record(500, 5, 1)];
        let mut b = a.clone();
        b.reverse();

        assert_eq!(WeightedStats::collect(&a), WeightedStats::collect(&b));
    }
}
