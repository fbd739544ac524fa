//! 원가 레코드 모델

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 내수구분 (소싱/물류 분류)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DomesticType {
    /// 내수
    Domestic,
    /// 직송
    DirectShip,
    /// 중국생산
    ChinaProduction,
    /// 그 외 분류 (원본 문자열 유지)
    Other(String),
}

impl DomesticType {
    /// 원본 표기 문자열
    pub fn as_str(&self) -> &str {
        match self {
            DomesticType::Domestic => "내수",
            DomesticType::DirectShip => "직송",
            DomesticType::ChinaProduction => "중국생산",
            DomesticType::Other(s) => s,
        }
    }

    /// 기본 필터 선택 (내수 + 직송 + 중국생산)
    pub fn all() -> Vec<DomesticType> {
        vec![
            DomesticType::Domestic,
            DomesticType::DirectShip,
            DomesticType::ChinaProduction,
        ]
    }
}

impl From<&str> for DomesticType {
    fn from(s: &str) -> Self {
        match s {
            "내수" => DomesticType::Domestic,
            "직송" => DomesticType::DirectShip,
            "중국생산" => DomesticType::ChinaProduction,
            other => DomesticType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for DomesticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DomesticType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DomesticType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(DomesticType::from(s.as_str()))
    }
}

/// 단가 구성요소 (8개 항목, USD/KRW 공용)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostComponents {
    /// 원자재
    pub raw_material: Decimal,
    /// 아트웍
    pub artwork: Decimal,
    /// 부자재
    pub sub_material: Decimal,
    /// 택/라벨
    pub tag_label: Decimal,
    /// 공임
    pub labor: Decimal,
    /// 본사공급자재
    pub hq_material: Decimal,
    /// 정상마진
    pub standard_margin: Decimal,
    /// 기타마진/경비
    pub other_margin: Decimal,
}

impl CostComponents {
    /// 8개 항목 합계
    pub fn total(&self) -> Decimal {
        self.raw_material
            + self.artwork
            + self.sub_material
            + self.tag_label
            + self.labor
            + self.hq_material
            + self.standard_margin
            + self.other_margin
    }

    /// 원부자재 합계 (원자재 + 부자재 + 택/라벨 + 본사공급자재)
    pub fn material(&self) -> Decimal {
        self.raw_material + self.sub_material + self.tag_label + self.hq_material
    }

    /// 기타경비 합계 (정상마진 + 기타마진/경비)
    pub fn other(&self) -> Decimal {
        self.standard_margin + self.other_margin
    }

    /// 환율을 곱한 사본 (USD 블록 → KRW 블록 생성용)
    pub fn scaled(&self, rate: Decimal) -> CostComponents {
        CostComponents {
            raw_material: self.raw_material * rate,
            artwork: self.artwork * rate,
            sub_material: self.sub_material * rate,
            tag_label: self.tag_label * rate,
            labor: self.labor * rate,
            hq_material: self.hq_material * rate,
            standard_margin: self.standard_margin * rate,
            other_margin: self.other_margin * rate,
        }
    }
}

/// 원가 레코드 (발주 라인 1건)
///
/// 로드 이후 불변. KRW 블록은 레코드 자체의 적용환율로 환산된 값이며
/// 전역 환율로 재계산하지 않는다 (발주 시점별 환율 차이 반영).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    /// 브랜드
    pub brand: String,
    /// 시즌 (예: "25S")
    pub season: String,
    /// 스타일 코드
    pub style: String,
    /// 중분류 (Headwear, Bag, Outer 등)
    pub category: String,
    /// 아이템명
    pub item_name: String,
    /// PO 번호
    pub po: String,
    /// TAG 가격 (KRW)
    pub tag_price: Decimal,
    /// 발주수량
    pub quantity: Decimal,
    /// 원가견적번호
    pub quote_no: String,
    /// 발주통화
    pub order_currency: String,
    /// 제조업체
    pub manufacturer: String,
    /// 견적서제출일자
    pub quote_date: String,
    /// PO 구분
    pub po_cls: String,
    /// 마감형태
    pub closing_type: String,
    /// 내수구분
    pub domestic_type: DomesticType,
    /// 적용환율 (KRW/USD)
    pub exchange_rate: Decimal,
    /// USD 단가 구성
    pub usd: CostComponents,
    /// KRW 단가 구성 (usd × 적용환율)
    pub krw: CostComponents,
}

impl CostRecord {
    /// 레코드 생성 (KRW 블록은 USD × 환율로 채움)
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        season: impl Into<String>,
        style: impl Into<String>,
        category: impl Into<String>,
        item_name: impl Into<String>,
        tag_price: Decimal,
        quantity: Decimal,
        domestic_type: DomesticType,
        exchange_rate: Decimal,
        usd: CostComponents,
    ) -> Self {
        let krw = usd.scaled(exchange_rate);
        Self {
            brand: String::new(),
            season: season.into(),
            style: style.into(),
            category: category.into(),
            item_name: item_name.into(),
            po: String::new(),
            tag_price,
            quantity,
            quote_no: String::new(),
            order_currency: String::new(),
            manufacturer: String::new(),
            quote_date: String::new(),
            po_cls: String::new(),
            closing_type: String::new(),
            domestic_type,
            exchange_rate,
            usd,
            krw,
        }
    }

    /// 빌더: 브랜드 설정
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// 빌더: PO 번호 설정
    pub fn with_po(mut self, po: impl Into<String>) -> Self {
        self.po = po.into();
        self
    }

    /// 빌더: 제조업체 설정
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    /// 총 원가 (USD)
    pub fn total_cost_usd(&self) -> Decimal {
        self.usd.total()
    }

    /// 총 원가 (KRW)
    pub fn total_cost_krw(&self) -> Decimal {
        self.krw.total()
    }

    /// 원부자재 단가 (USD)
    pub fn material_cost_usd(&self) -> Decimal {
        self.usd.material()
    }

    /// 아트웍 단가 (USD)
    pub fn artwork_cost_usd(&self) -> Decimal {
        self.usd.artwork
    }

    /// 공임 단가 (USD)
    pub fn labor_cost_usd(&self) -> Decimal {
        self.usd.labor
    }

    /// 기타경비 단가 (USD)
    pub fn other_cost_usd(&self) -> Decimal {
        self.usd.other()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(each: i64) -> CostComponents {
        CostComponents {
            raw_material: Decimal::from(each),
            artwork: Decimal::from(each),
            sub_material: Decimal::from(each),
            tag_label: Decimal::from(each),
            labor: Decimal::from(each),
            hq_material: Decimal::from(each),
            standard_margin: Decimal::from(each),
            other_margin: Decimal::from(each),
        }
    }

    #[test]
    fn test_component_totals() {
        let c = components(2);
        assert_eq!(c.total(), Decimal::from(16));
        // 원자재 + 부자재 + 택/라벨 + 본사공급자재
        assert_eq!(c.material(), Decimal::from(8));
        // 정상마진 + 기타마진/경비
        assert_eq!(c.other(), Decimal::from(4));
    }

    #[test]
    fn test_new_record_scales_krw_by_own_rate() {
        let record = CostRecord::new(
            "25S",
            "ST-001",
            "Outer",
            "다운 자켓",
            Decimal::from(50000),
            Decimal::from(100),
            DomesticType::Domestic,
            Decimal::from(1300),
            components(1),
        );

        assert_eq!(record.total_cost_usd(), Decimal::from(8));
        assert_eq!(record.total_cost_krw(), Decimal::from(8 * 1300));
        assert_eq!(record.krw.labor, Decimal::from(1300));
    }

    #[test]
    fn test_domestic_type_round_trip() {
        for raw in ["내수", "직송", "중국생산", "기타구분"] {
            let parsed = DomesticType::from(raw);
            assert_eq!(parsed.as_str(), raw);

            let json = serde_json::to_string(&parsed).unwrap();
            let back: DomesticType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, parsed);
        }
        assert_eq!(DomesticType::from("내수"), DomesticType::Domestic);
    }
}
