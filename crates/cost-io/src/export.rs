//! 시나리오 내보내기/가져오기

use crate::error::Result;
use crate::scenario::Scenario;

/// 시나리오를 JSON 문자열로 내보내기 (pretty)
pub fn export_scenario_to_json(scenario: &Scenario) -> Result<String> {
    Ok(serde_json::to_string_pretty(scenario)?)
}

/// JSON 문자열에서 시나리오 가져오기. 형식이 맞지 않으면 None
pub fn import_scenario_from_json(json: &str) -> Option<Scenario> {
    serde_json::from_str(json).ok()
}

/// 시나리오를 공유용 CSV 문자열로 내보내기
///
/// 주석 4줄(시나리오명, 시즌, 예상환율, 전체 markup)과 빈 줄 뒤에
/// 중분류별 현재 파라미터와 파생 값을 한 행씩 쓴다.
pub fn export_scenario_to_csv(scenario: &Scenario) -> String {
    let state = &scenario.state;
    let mut lines = vec![
        format!("# 시나리오: {}", scenario.name),
        format!("# 시즌: {}", state.season),
        format!("# 예상환율: {}", state.exchange_rate),
        format!("# 전체Markup: {}", state.overall_markup),
        String::new(),
        "중분류,목표TAG,원부자재,공임,아트웍,기타,발주수량,총원가USD,총원가KRW,원가율,Markup"
            .to_string(),
    ];

    for c in &state.categories {
        lines.push(format!(
            "{},{},{},{},{},{},{},{},{},{},{}",
            c.category,
            c.target_tag,
            c.material,
            c.labor,
            c.artwork,
            c.other,
            c.quantity,
            c.total_cost_usd,
            c.total_cost_krw,
            c.cost_rate,
            c.markup,
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cost_sim::{calculate_simulator_state, SimulatorCategory};
    use rust_decimal::Decimal;

    fn scenario() -> Scenario {
        let categories = vec![SimulatorCategory::new(
            "Outer",
            Decimal::from(50000),
            Decimal::from(10),
            Decimal::from(5),
            Decimal::from(3),
            Decimal::from(2),
            Decimal::from(1000),
        )];
        let state = calculate_simulator_state(
            &categories,
            Decimal::from(1400),
            "27S",
            Decimal::new(45, 1),
        );
        Scenario::new("기본안", state)
    }

    #[test]
    fn test_json_round_trip() {
        let original = scenario();
        let json = export_scenario_to_json(&original).unwrap();
        let back = import_scenario_from_json(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_import_rejects_malformed() {
        assert!(import_scenario_from_json("{잘못된 json").is_none());
        assert!(import_scenario_from_json("{\"name\":\"이름만\"}").is_none());
    }

    #[test]
    fn test_csv_layout() {
        let csv = export_scenario_to_csv(&scenario());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "# 시나리오: 기본안");
        assert_eq!(lines[1], "# 시즌: 27S");
        assert_eq!(lines[2], "# 예상환율: 1400");
        assert_eq!(lines[3], "# 전체Markup: 1.79");
        assert_eq!(lines[4], "");
        assert!(lines[5].starts_with("중분류,목표TAG,"));
        assert!(lines[6].starts_with("Outer,50000,10,5,3,2,1000,"));
        assert_eq!(lines.len(), 7);
    }
}
