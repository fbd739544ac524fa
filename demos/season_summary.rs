//! # 시즌 요약 예제
//!
//! 이 예제는 집계 엔진의 기본 흐름을 보여준다:
//! - 원가 레코드 구성 (실제로는 CSV에서 로드)
//! - 내수구분 필터
//! - 중분류 요약과 시즌별 상세
//! - 계층 구조 (시즌 → 아이템 → 스타일)

use anyhow::Result;
use cost_calc::Aggregator;
use cost_core::{CostComponents, CostRecord, DomesticType};
use rust_decimal::Decimal;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("📊 ===== 시즌 요약 예제 =====");
    println!();

    // ========== 1. 원가 레코드 구성 ==========
    println!("📋 단계 1: 원가 레코드 구성");
    let records = sample_records();
    println!("   ✓ 레코드 수: {}", records.len());

    let seasons = cost_calc::filter::available_seasons(&records);
    let categories = cost_calc::filter::available_categories(&records);
    println!("   ✓ 시즌: {:?}", seasons);
    println!("   ✓ 중분류: {:?}", categories);
    println!();

    // ========== 2. 중분류 요약 ==========
    println!("🧮 단계 2: 중분류 요약 (25S, 내수+직송+중국생산)");
    let domestic = DomesticType::all();
    for category in &categories {
        if let Some(summary) = Aggregator::category_summary(&records, category, "25S", &domestic) {
            println!(
                "   {} | 수량 {} | 평균TAG ₩{} | 평균원가 ${} | 원가율 {}%",
                summary.category,
                summary.order_qty,
                summary.avg_tag,
                summary.avg_cost_usd,
                summary.cost_rate,
            );
        }
    }
    println!();

    // ========== 3. 시즌 전체 요약 ==========
    println!("📈 단계 3: 최근 시즌 전체 요약 (최신순)");
    for summary in Aggregator::recent_season_summaries(&records, &domestic, 4) {
        println!(
            "   {} | 수량 {} | 평균TAG ₩{} | 원가율 {}% | 원부자재 ${} / 공임 ${}",
            summary.season,
            summary.order_qty,
            summary.avg_tag,
            summary.cost_rate,
            summary.breakdown.material,
            summary.breakdown.labor,
        );
    }
    println!();

    // ========== 4. 계층 구조 ==========
    println!("🌳 단계 4: Outer 계층 구조");
    for season in Aggregator::hierarchy_data(&records, "Outer", &domestic) {
        println!("   {} (수량 {})", season.season, season.order_qty);
        for item in &season.items {
            println!("     ├─ {} (수량 {})", item.item_name, item.order_qty);
            for style in &item.styles {
                println!("     │    └─ {} (수량 {})", style.style, style.order_qty);
            }
        }
    }

    println!();
    println!("✅ 완료");
    Ok(())
}

fn sample_records() -> Vec<CostRecord> {
    let outer = CostComponents {
        raw_material: Decimal::from(4),
        artwork: Decimal::from(3),
        sub_material: Decimal::from(2),
        labor: Decimal::from(5),
        standard_margin: Decimal::new(15, 1),
        ..CostComponents::default()
    };
    let bag = CostComponents {
        raw_material: Decimal::from(2),
        artwork: Decimal::ONE,
        sub_material: Decimal::ONE,
        labor: Decimal::from(3),
        ..CostComponents::default()
    };

    vec![
        CostRecord::new(
            "25S",
            "OT-001",
            "Outer",
            "다운 자켓",
            Decimal::from(50000),
            Decimal::from(100),
            DomesticType::Domestic,
            Decimal::from(1300),
            outer.clone(),
        ),
        CostRecord::new(
            "25S",
            "OT-002",
            "Outer",
            "코트",
            Decimal::from(55000),
            Decimal::from(300),
            DomesticType::Domestic,
            Decimal::from(1300),
            outer.clone(),
        ),
        CostRecord::new(
            "25S",
            "BG-001",
            "Bag",
            "백팩",
            Decimal::from(30000),
            Decimal::from(200),
            DomesticType::DirectShip,
            Decimal::from(1300),
            bag,
        ),
        CostRecord::new(
            "24S",
            "OT-901",
            "Outer",
            "코트",
            Decimal::from(45000),
            Decimal::from(500),
            DomesticType::Domestic,
            Decimal::from(1250),
            outer,
        ),
    ]
}
