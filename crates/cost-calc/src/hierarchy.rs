//! 계층 구조 롤업 (시즌 → 아이템 → 스타일)

use cost_core::rounding::{round_krw, round_usd};
use cost_core::{CostRecord, DomesticType, ItemNode, SeasonHierarchy, StyleNode};
use cost_core::season::cmp_season_desc;

use crate::filter::{distinct, filter_by_category, filter_by_domestic};
use crate::weighted::WeightedStats;

impl crate::Aggregator {
    /// 3단계 계층 데이터 계산
    ///
    /// 각 레벨의 평균은 자기 하위 레코드에서 직접 가중평균한다.
    /// 자식 요약을 재집계하면 자식 집합 크기 차이로 가중치가 왜곡되므로
    /// 허용하지 않는다. 시즌은 최신순, 아이템/스타일은 발주수량
    /// 내림차순이며 빈 키(아이템명/스타일 없음)는 제외한다.
    pub fn hierarchy_data(
        records: &[CostRecord],
        category: &str,
        domestic: &[DomesticType],
    ) -> Vec<SeasonHierarchy> {
        let filtered = filter_by_domestic(records, domestic);
        let filtered = filter_by_category(filtered, category);

        let mut seasons = distinct(filtered.iter().map(|r| r.season.as_str()));
        seasons.sort_by(|a, b| cmp_season_desc(a, b));
        tracing::debug!(
            category,
            records = filtered.len(),
            seasons = seasons.len(),
            "계층 데이터 계산"
        );

        seasons
            .into_iter()
            .map(|season| {
                let season_records: Vec<&CostRecord> = filtered
                    .iter()
                    .copied()
                    .filter(|r| r.season == season)
                    .collect();
                let stats = WeightedStats::collect(season_records.iter().copied());

                let items = Self::item_nodes(&season_records);

                SeasonHierarchy {
                    season,
                    order_qty: stats.total_qty,
                    avg_tag: round_krw(stats.tag),
                    avg_cost_usd: round_usd(stats.cost_usd),
                    avg_cost_krw: round_krw(stats.cost_krw),
                    exchange_rate: round_usd(stats.exchange_rate),
                    items,
                }
            })
            .collect()
    }

    fn item_nodes(season_records: &[&CostRecord]) -> Vec<ItemNode> {
        let items = distinct(
            season_records
                .iter()
                .map(|r| r.item_name.as_str())
                .filter(|i| !i.is_empty()),
        );

        let mut nodes: Vec<ItemNode> = items
            .into_iter()
            .map(|item_name| {
                let item_records: Vec<&CostRecord> = season_records
                    .iter()
                    .copied()
                    .filter(|r| r.item_name == item_name)
                    .collect();
                let stats = WeightedStats::collect(item_records.iter().copied());

                let styles = Self::style_nodes(&item_records);

                ItemNode {
                    item_name,
                    order_qty: stats.total_qty,
                    avg_tag: round_krw(stats.tag),
                    avg_cost_usd: round_usd(stats.cost_usd),
                    avg_cost_krw: round_krw(stats.cost_krw),
                    exchange_rate: round_usd(stats.exchange_rate),
                    breakdown: stats.breakdown(),
                    styles,
                }
            })
            .collect();

        nodes.sort_by(|a, b| b.order_qty.cmp(&a.order_qty));
        nodes
    }

    fn style_nodes(item_records: &[&CostRecord]) -> Vec<StyleNode> {
        let styles = distinct(
            item_records
                .iter()
                .map(|r| r.style.as_str())
                .filter(|s| !s.is_empty()),
        );

        let mut nodes: Vec<StyleNode> = styles
            .into_iter()
            .map(|style| {
                let stats = WeightedStats::collect(
                    item_records.iter().copied().filter(|r| r.style == style),
                );

                StyleNode {
                    style,
                    order_qty: stats.total_qty,
                    avg_tag: round_krw(stats.tag),
                    avg_cost_usd: round_usd(stats.cost_usd),
                    avg_cost_krw: round_krw(stats.cost_krw),
                    exchange_rate: round_usd(stats.exchange_rate),
                    breakdown: stats.breakdown(),
                }
            })
            .collect();

        nodes.sort_by(|a, b| b.order_qty.cmp(&a.order_qty));
        nodes
    }
}
