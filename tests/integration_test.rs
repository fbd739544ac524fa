//! 통합 테스트

use cost_calc::Aggregator;
use cost_core::{DomesticType, SimConfig};
use cost_io::{ScenarioStore, Scenario};
use cost_sim::{CategoryEdit, GuidanceEngine, MarkupStatus, Simulator};
use rust_decimal::Decimal;

const HEADER: &str = "브랜드,시즌,스타일,중분류,아이템명,PO,TAG,수량,원가견적번호,발주통화,제조업체,견적서제출일자,PO_CLS,마감형태,내수구분,적용환율,(USD)_원자재,(USD)_아트웍,(USD)_부자재,(USD)_택/라벨,(USD)_공임,(USD)_본사공급자재,(USD)_정상마진,(USD)_기타마진/경비,(KRW)_원자재,(KRW)_아트웍,(KRW)_부자재,(KRW)_택/라벨,(KRW)_공임,(KRW)_본사공급자재,(KRW)_정상마진,(KRW)_기타마진/경비";

fn row(
    season: &str,
    style: &str,
    category: &str,
    item: &str,
    tag: i64,
    qty: i64,
    domestic: &str,
    rate: i64,
    usd: [&str; 8],
) -> String {
    let krw: Vec<String> = usd
        .iter()
        .map(|u| {
            let u: Decimal = u.parse().unwrap();
            (u * Decimal::from(rate)).to_string()
        })
        .collect();
    format!(
        "MLB,{season},{style},{category},{item},PO-1,{tag},{qty},Q-1,USD,공장A,2025-01-10,A,완사입,{domestic},{rate},{},{}",
        usd.join(","),
        krw.join(","),
    )
}

fn sample_csv() -> String {
    // 25S가 최신 시즌, 24S는 추이 비교용
    let rows = [
        row("25S", "OT-001", "Outer", "다운 자켓", 50000, 100, "내수", 1300,
            ["4", "3", "2", "0.5", "5", "0", "1.5", "0"]),
        row("25S", "OT-002", "Outer", "코트", 50000, 300, "내수", 1300,
            ["4", "3", "2", "0.5", "5", "0", "1.5", "0"]),
        row("25S", "BG-001", "Bag", "백팩", 30000, 200, "직송", 1300,
            ["2", "1", "1", "0.2", "3", "0", "0.8", "0"]),
        row("24S", "OT-901", "Outer", "코트", 45000, 500, "내수", 1250,
            ["3.5", "2.5", "2", "0.5", "4.5", "0", "1", "0"]),
    ];
    format!("{HEADER}\n{}\n", rows.join("\n"))
}

#[test]
fn test_csv_to_aggregation() {
    // 1. CSV 로드
    let records = cost_io::load_records_from_reader(sample_csv().as_bytes()).unwrap();
    assert_eq!(records.len(), 4);

    // 2. 시즌/중분류 탐색
    let seasons = cost_calc::filter::available_seasons(&records);
    assert_eq!(seasons, vec!["24S", "25S"]);
    let categories = cost_calc::filter::available_categories(&records);
    assert_eq!(categories, vec!["Outer", "Bag"]);

    // 3. 중분류 요약 (25S Outer, 단가 합 16 USD, 환율 1300)
    let summary =
        Aggregator::category_summary(&records, "Outer", "25S", &DomesticType::all()).unwrap();
    assert_eq!(summary.order_qty, Decimal::from(400));
    assert_eq!(summary.avg_tag, Decimal::from(50000));
    assert_eq!(summary.avg_cost_usd, Decimal::from(16));
    assert_eq!(summary.avg_cost_krw, Decimal::from(20800));
    // 원가율 = 20800/50000×100 = 41.6%
    assert_eq!(summary.cost_rate, Decimal::new(416, 1));

    // 4. 시즌 전체 요약은 내수구분 필터를 따른다
    let domestic_only =
        Aggregator::season_summary(&records, "25S", &[DomesticType::Domestic]).unwrap();
    assert_eq!(domestic_only.order_qty, Decimal::from(400)); // Bag(직송) 제외

    // 5. 추이는 시즌 오름차순
    let trend = Aggregator::trend_data(&records, &["Outer".to_string()], &DomesticType::all());
    let seasons: Vec<&str> = trend.iter().map(|t| t.season.as_str()).collect();
    assert_eq!(seasons, vec!["24S", "25S"]);
}

#[test]
fn test_simulation_round_trip() {
    let records = cost_io::load_records_from_reader(sample_csv().as_bytes()).unwrap();

    // 1. 최신 시즌(25S) 기준으로 차기 시즌(26S) 시뮬레이터 구성
    let mut sim = Simulator::from_records(
        &records,
        "25S",
        "26S",
        Decimal::from(1400),
        SimConfig::default(),
    );
    assert_eq!(sim.state().categories.len(), 2);

    // Outer: TAG 50000, 원가 16 USD → 22400 KRW, markup 2.23
    let outer = &sim.state().categories[0];
    assert_eq!(outer.category, "Outer");
    assert_eq!(outer.total_cost_krw, Decimal::from(22400));
    assert_eq!(outer.markup, Decimal::new(223, 2));

    // 2. 목표 4.5 대비 부족 → 가이드라인 생성
    let guideline = GuidanceEngine::generate(sim.state(), sim.config());
    assert_eq!(guideline.status, MarkupStatus::Deficit);
    assert!(!guideline.suggestions.is_empty());
    assert_eq!(guideline.sensitivity.len(), 4);

    // 3. 첫 제안을 수동으로 적용해 markup이 개선되는지 확인
    let before = sim.state().overall_markup;
    let first = &guideline.suggestions[0];
    let target_id = sim
        .state()
        .categories
        .iter()
        .find(|c| c.category == first.category)
        .unwrap()
        .id;
    let edit = match first.field {
        cost_sim::AdjustField::TargetTag => CategoryEdit::SetTargetTag(first.proposed),
        cost_sim::AdjustField::Material => CategoryEdit::SetMaterial(first.proposed),
        cost_sim::AdjustField::Labor => CategoryEdit::SetLabor(first.proposed),
        cost_sim::AdjustField::Artwork => CategoryEdit::SetArtwork(first.proposed),
        cost_sim::AdjustField::Other => CategoryEdit::SetOther(first.proposed),
    };
    assert!(sim.apply(target_id, edit));
    assert!(sim.state().overall_markup > before);

    // 4. 리셋하면 초기 상태로 복원
    sim.reset();
    assert_eq!(sim.state().overall_markup, before);
}

#[test]
fn test_scenario_persistence_round_trip() {
    let records = cost_io::load_records_from_reader(sample_csv().as_bytes()).unwrap();
    let mut sim = Simulator::from_records(
        &records,
        "25S",
        "26S",
        Decimal::from(1400),
        SimConfig::default(),
    );

    // 편집 후 시나리오 저장
    let id = sim.state().categories[0].id;
    sim.apply(id, CategoryEdit::SetTargetTag(Decimal::from(55000)));
    let scenario = Scenario::new("26S 1차안", sim.state().clone());
    let scenario_id = scenario.id;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenarios.json");
    let mut store = ScenarioStore::open(&path).unwrap();
    store.save(scenario).unwrap();

    // 새 저장소 인스턴스에서 적재 후 시뮬레이터 복원
    let reopened = ScenarioStore::open(&path).unwrap();
    let loaded = reopened.get(scenario_id).unwrap();
    assert_eq!(loaded.name, "26S 1차안");

    let mut restored = Simulator::from_records(
        &records,
        "25S",
        "26S",
        Decimal::from(1400),
        SimConfig::default(),
    );
    restored.load_state(loaded.state.clone());
    assert_eq!(
        restored.state().categories[0].target_tag,
        Decimal::from(55000)
    );
    assert_eq!(restored.state().overall_markup, sim.state().overall_markup);

    // JSON/CSV 내보내기도 같은 상태를 표현
    let json = cost_io::export_scenario_to_json(loaded).unwrap();
    let imported = cost_io::import_scenario_from_json(&json).unwrap();
    assert_eq!(&imported, loaded);

    let csv = cost_io::export_scenario_to_csv(loaded);
    assert!(csv.starts_with("# 시나리오: 26S 1차안"));
    assert!(csv.contains("Outer,55000,"));
}

#[test]
fn test_hierarchy_and_compare() {
    let records = cost_io::load_records_from_reader(sample_csv().as_bytes()).unwrap();

    // 시즌 → 아이템 → 스타일 계층
    let hierarchy = Aggregator::hierarchy_data(&records, "Outer", &DomesticType::all());
    assert_eq!(hierarchy.len(), 2); // 25S, 24S
    let latest = &hierarchy[0];
    assert_eq!(latest.season, "25S");
    assert_eq!(latest.order_qty, Decimal::from(400));
    let item_qty: Decimal = latest.items.iter().map(|i| i.order_qty).sum();
    assert_eq!(item_qty, latest.order_qty);

    // 비교셋은 같은 수준만 담는다
    let details = Aggregator::season_details(&records, "Outer", &DomesticType::all());
    let mut compare = cost_core::CompareSet::new();
    for d in &details {
        assert!(compare.add(cost_core::CompareItem::from_season_detail("Outer", d)));
    }
    assert_eq!(compare.len(), 2);
    assert_eq!(compare.level(), Some(cost_core::CompareLevel::Season));

    let item = cost_core::CompareItem::from_item("25S", &latest.items[0]);
    assert!(!compare.add(item)); // 수준 불일치 거부
}
