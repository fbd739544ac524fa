//! 집계 연산
//!
//! 필터링된 레코드 집합을 중분류/시즌 단위의 가중평균 요약으로 변환한다.
//! 해당 구간에 데이터가 없으면 `None`/빈 목록을 반환한다 (오류 아님).

use cost_core::rounding::{round_krw, round_pct, round_usd};
use cost_core::season::{cmp_season_asc, cmp_season_desc};
use cost_core::{CategorySummary, CostRecord, DomesticType, SeasonDetail, SeasonSummary, TrendPoint};
use cost_core::summary::ItemDetail;

use crate::filter::{distinct, filter_by_category, filter_by_domestic, filter_by_season};
use crate::weighted::WeightedStats;

/// 가중평균 집계기
pub struct Aggregator;

impl Aggregator {
    /// 중분류 요약 (특정 시즌)
    ///
    /// 필터 결과가 비었거나 수량 합이 0이면 `None`
    pub fn category_summary(
        records: &[CostRecord],
        category: &str,
        season: &str,
        domestic: &[DomesticType],
    ) -> Option<CategorySummary> {
        let filtered = filter_by_domestic(records, domestic);
        let filtered = filter_by_category(filtered, category);
        let filtered = filter_by_season(filtered, season);

        let stats = WeightedStats::collect(filtered);
        if stats.is_empty() {
            return None;
        }

        Some(CategorySummary {
            category: category.to_string(),
            order_qty: stats.total_qty,
            avg_tag: round_krw(stats.tag),
            avg_cost_usd: round_usd(stats.cost_usd),
            avg_cost_krw: round_krw(stats.cost_krw),
            cost_rate: round_pct(stats.cost_rate()),
            exchange_rate: round_usd(stats.exchange_rate),
        })
    }

    /// 특정 중분류의 시즌별 상세 (최신순)
    ///
    /// 수량 합이 0인 시즌도 0으로 채운 행으로 포함한다
    pub fn season_details(
        records: &[CostRecord],
        category: &str,
        domestic: &[DomesticType],
    ) -> Vec<SeasonDetail> {
        let filtered = filter_by_domestic(records, domestic);
        let filtered = filter_by_category(filtered, category);

        let mut seasons = distinct(filtered.iter().map(|r| r.season.as_str()));
        seasons.sort_by(|a, b| cmp_season_desc(a, b));
        tracing::debug!(category, seasons = seasons.len(), "시즌별 상세 계산");

        seasons
            .into_iter()
            .map(|season| {
                let stats =
                    WeightedStats::collect(filtered.iter().copied().filter(|r| r.season == season));
                SeasonDetail {
                    season,
                    order_qty: stats.total_qty,
                    avg_tag: round_krw(stats.tag),
                    avg_cost_usd: round_usd(stats.cost_usd),
                    avg_cost_krw: round_krw(stats.cost_krw),
                    exchange_rate: round_usd(stats.exchange_rate),
                    breakdown: stats.breakdown(),
                }
            })
            .collect()
    }

    /// 모든 중분류 요약 (특정 시즌, 데이터 없는 중분류는 제외)
    pub fn all_category_summaries(
        records: &[CostRecord],
        season: &str,
        domestic: &[DomesticType],
    ) -> Vec<CategorySummary> {
        let categories = distinct(
            records
                .iter()
                .map(|r| r.category.as_str())
                .filter(|c| !c.is_empty()),
        );

        categories
            .into_iter()
            .filter_map(|category| Self::category_summary(records, &category, season, domestic))
            .collect()
    }

    /// 시즌 전체 요약 (모든 중분류 합산)
    pub fn season_summary(
        records: &[CostRecord],
        season: &str,
        domestic: &[DomesticType],
    ) -> Option<SeasonSummary> {
        let filtered = filter_by_domestic(records, domestic);
        let filtered = filter_by_season(filtered, season);

        let stats = WeightedStats::collect(filtered);
        if stats.is_empty() {
            return None;
        }

        Some(SeasonSummary {
            season: season.to_string(),
            order_qty: stats.total_qty,
            avg_tag: round_krw(stats.tag),
            avg_cost_usd: round_usd(stats.cost_usd),
            avg_cost_krw: round_krw(stats.cost_krw),
            cost_rate: round_pct(stats.cost_rate()),
            exchange_rate: round_usd(stats.exchange_rate),
            breakdown: stats.breakdown(),
        })
    }

    /// 최근 N개 시즌의 전체 포트폴리오 요약 (최신순)
    ///
    /// 카드 뷰는 count=4, 전체 추이 뷰는 큰 count로 호출한다
    pub fn recent_season_summaries(
        records: &[CostRecord],
        domestic: &[DomesticType],
        count: usize,
    ) -> Vec<SeasonSummary> {
        let mut seasons = distinct(records.iter().map(|r| r.season.as_str()));
        seasons.sort_by(|a, b| cmp_season_desc(a, b));
        seasons.truncate(count);

        seasons
            .into_iter()
            .filter_map(|season| Self::season_summary(records, &season, domestic))
            .collect()
    }

    /// 추이 그래프용 데이터 (중분류별 × 시즌 오름차순)
    ///
    /// 수량 합이 0인 시즌은 건너뛴다
    pub fn trend_data(
        records: &[CostRecord],
        categories: &[String],
        domestic: &[DomesticType],
    ) -> Vec<TrendPoint> {
        let filtered = filter_by_domestic(records, domestic);
        let mut result = Vec::new();

        for category in categories {
            let category_records = filter_by_category(filtered.iter().copied(), category);
            let mut seasons = distinct(category_records.iter().map(|r| r.season.as_str()));
            seasons.sort_by(|a, b| cmp_season_asc(a, b));

            for season in seasons {
                let stats = WeightedStats::collect(
                    category_records
                        .iter()
                        .copied()
                        .filter(|r| r.season == season),
                );
                if stats.is_empty() {
                    continue;
                }

                result.push(TrendPoint {
                    season,
                    category: category.clone(),
                    exchange_rate: round_usd(stats.exchange_rate),
                    avg_tag: round_krw(stats.tag),
                    avg_cost_usd: round_usd(stats.cost_usd),
                    cost_rate: round_pct(stats.cost_rate()),
                    breakdown: stats.breakdown(),
                });
            }
        }

        result
    }

    /// 아이템별 상세 (발주수량 내림차순)
    pub fn item_details(
        records: &[CostRecord],
        category: &str,
        domestic: &[DomesticType],
    ) -> Vec<ItemDetail> {
        Self::keyed_details(records, category, domestic, |r| r.item_name.as_str())
    }

    /// 스타일별 상세 (발주수량 내림차순)
    pub fn style_details(
        records: &[CostRecord],
        category: &str,
        domestic: &[DomesticType],
    ) -> Vec<ItemDetail> {
        Self::keyed_details(records, category, domestic, |r| r.style.as_str())
    }

    fn keyed_details(
        records: &[CostRecord],
        category: &str,
        domestic: &[DomesticType],
        key_fn: impl Fn(&CostRecord) -> &str,
    ) -> Vec<ItemDetail> {
        let filtered = filter_by_domestic(records, domestic);
        let filtered = filter_by_category(filtered, category);

        let keys = distinct(
            filtered
                .iter()
                .map(|r| key_fn(r))
                .filter(|k| !k.is_empty()),
        );

        let mut details: Vec<ItemDetail> = keys
            .into_iter()
            .map(|key| {
                let stats = WeightedStats::collect(
                    filtered.iter().copied().filter(|r| key_fn(r) == key),
                );
                ItemDetail {
                    key,
                    order_qty: stats.total_qty,
                    avg_tag: round_krw(stats.tag),
                    avg_cost_usd: round_usd(stats.cost_usd),
                    avg_cost_krw: round_krw(stats.cost_krw),
                    exchange_rate: round_usd(stats.exchange_rate),
                    breakdown: stats.breakdown(),
                }
            })
            .collect();

        details.sort_by(|a, b| b.order_qty.cmp(&a.order_qty));
        details
    }
}
