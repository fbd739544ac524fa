//! 원가 CSV 로더
//!
//! ERP 추출 CSV(한글 헤더)를 [`CostRecord`] 목록으로 읽는다. 숫자 필드가
//! 비어 있거나 파싱할 수 없으면 0으로 대체하고 경고만 남긴다. 행 단위로
//! 실패를 전파하면 추출 품질이 나쁜 월에는 전체 분석이 막히기 때문이다.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use cost_core::{CostComponents, CostRecord, DomesticType};
use rust_decimal::Decimal;

use crate::error::Result;

/// CSV 파일에서 원가 레코드 로드
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<CostRecord>> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "원가 CSV 로드");
    let file = std::fs::File::open(path)?;
    load_records_from_reader(file)
}

/// 임의 reader에서 원가 레코드 로드
pub fn load_records_from_reader<R: Read>(reader: R) -> Result<Vec<CostRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    // 헤더명 → 컬럼 인덱스
    let headers: HashMap<String, usize> = csv_reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_string(), idx))
        .collect();

    let mut records = Vec::new();
    for (row_idx, row) in csv_reader.records().enumerate() {
        let row = row?;
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let text = |name: &str| -> String {
            headers
                .get(name)
                .and_then(|&idx| row.get(idx))
                .unwrap_or("")
                .trim()
                .to_string()
        };
        let number = |name: &str| -> Decimal {
            let raw = text(name);
            if raw.is_empty() {
                return Decimal::ZERO;
            }
            match raw.parse() {
                Ok(v) => v,
                Err(_) => {
                    tracing::warn!(row = row_idx + 2, column = name, value = %raw, "숫자 파싱 실패, 0으로 대체");
                    Decimal::ZERO
                }
            }
        };

        let usd = CostComponents {
            raw_material: number("(USD)_원자재"),
            artwork: number("(USD)_아트웍"),
            sub_material: number("(USD)_부자재"),
            tag_label: number("(USD)_택/라벨"),
            labor: number("(USD)_공임"),
            hq_material: number("(USD)_본사공급자재"),
            standard_margin: number("(USD)_정상마진"),
            other_margin: number("(USD)_기타마진/경비"),
        };
        let krw = CostComponents {
            raw_material: number("(KRW)_원자재"),
            artwork: number("(KRW)_아트웍"),
            sub_material: number("(KRW)_부자재"),
            tag_label: number("(KRW)_택/라벨"),
            labor: number("(KRW)_공임"),
            hq_material: number("(KRW)_본사공급자재"),
            standard_margin: number("(KRW)_정상마진"),
            other_margin: number("(KRW)_기타마진/경비"),
        };

        records.push(CostRecord {
            brand: text("브랜드"),
            season: text("시즌"),
            style: text("스타일"),
            category: text("중분류"),
            item_name: text("아이템명"),
            po: text("PO"),
            tag_price: number("TAG"),
            quantity: number("수량"),
            quote_no: text("원가견적번호"),
            order_currency: text("발주통화"),
            manufacturer: text("제조업체"),
            quote_date: text("견적서제출일자"),
            po_cls: text("PO_CLS"),
            closing_type: text("마감형태"),
            domestic_type: DomesticType::from(text("내수구분").as_str()),
            exchange_rate: number("적용환율"),
            usd,
            krw,
        });
    }

    tracing::info!(records = records.len(), "원가 CSV 로드 완료");
    Ok(records)
}
