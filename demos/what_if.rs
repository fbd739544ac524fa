//! # What-if 시뮬레이션 예제
//!
//! 이 예제는 차기 시즌 시뮬레이션 전체 흐름을 보여준다:
//! - 최신 시즌 실적으로 시뮬레이터 초기화
//! - 가이드라인 생성 (상태 분류 + 조정 추천 + 환율 민감도)
//! - 추천 적용과 시나리오 저장

use anyhow::Result;
use cost_core::{CostComponents, CostRecord, DomesticType, SimConfig};
use cost_io::{Scenario, ScenarioStore};
use cost_sim::{AdjustField, CategoryEdit, GuidanceEngine, Simulator};
use rust_decimal::Decimal;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("🎯 ===== What-if 시뮬레이션 예제 =====");
    println!();

    // ========== 1. 시뮬레이터 초기화 ==========
    println!("⚙️  단계 1: 25S 실적으로 26S 시뮬레이터 초기화 (예상환율 1400)");
    let records = sample_records();
    let mut sim = Simulator::from_records(
        &records,
        "25S",
        "26S",
        Decimal::from(1400),
        SimConfig::default(),
    );

    let state = sim.state();
    println!("   대상 시즌: {}", state.season);
    println!(
        "   전체 markup: {} (목표 {}, gap {})",
        state.overall_markup, state.target_markup, state.markup_gap
    );
    for c in &state.categories {
        println!(
            "   {} | 목표TAG ₩{} | 원가 ${} | markup {}",
            c.category, c.target_tag, c.total_cost_usd, c.markup
        );
    }
    println!();

    // ========== 2. 가이드라인 ==========
    println!("💡 단계 2: 가이드라인 생성");
    let guideline = GuidanceEngine::generate(sim.state(), sim.config());
    println!("   상태: {:?} (gap {})", guideline.status, guideline.gap);
    for s in &guideline.suggestions {
        println!(
            "   [{}] {} | {} → {} | 영향도 {}%",
            s.category, s.rationale, s.current, s.proposed, s.impact
        );
    }
    println!();
    println!("   환율 민감도:");
    for row in &guideline.sensitivity {
        println!(
            "   환율 {} (오프셋 {}) | markup {} (변화 {})",
            row.rate, row.offset, row.markup, row.markup_delta
        );
    }
    println!();

    // ========== 3. 추천 적용 ==========
    println!("✏️  단계 3: 첫 번째 추천 수동 적용");
    if let Some(first) = guideline.suggestions.first() {
        let id = sim
            .state()
            .categories
            .iter()
            .find(|c| c.category == first.category)
            .map(|c| c.id);
        if let Some(id) = id {
            let edit = match first.field {
                AdjustField::TargetTag => CategoryEdit::SetTargetTag(first.proposed),
                AdjustField::Material => CategoryEdit::SetMaterial(first.proposed),
                AdjustField::Labor => CategoryEdit::SetLabor(first.proposed),
                AdjustField::Artwork => CategoryEdit::SetArtwork(first.proposed),
                AdjustField::Other => CategoryEdit::SetOther(first.proposed),
            };
            sim.apply(id, edit);
            println!(
                "   ✓ {} 적용 → 전체 markup {}",
                first.rationale,
                sim.state().overall_markup
            );
        }
    }
    println!();

    // ========== 4. 시나리오 저장 ==========
    println!("💾 단계 4: 시나리오 저장");
    let dir = tempfile::tempdir()?;
    let mut store = ScenarioStore::open(dir.path().join("scenarios.json"))?;
    let scenario = Scenario::new("26S 1차안", sim.state().clone())
        .with_description("가이드라인 1건 반영");
    store.save(scenario.clone())?;
    println!("   ✓ 저장된 시나리오: {}건", store.load_all().len());

    println!();
    println!("   CSV 내보내기 미리보기:");
    for line in cost_io::export_scenario_to_csv(&scenario).lines().take(7) {
        println!("   {}", line);
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
            outer,
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
    ]
}
