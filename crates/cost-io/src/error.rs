//! 데이터 입출력 오류 타입

use thiserror::Error;

/// 입출력 계층 오류
#[derive(Debug, Error)]
pub enum DataError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    /// CSV 파싱 오류
    #[error("CSV 파싱 오류: {0}")]
    Csv(#[from] csv::Error),

    /// JSON 직렬화/역직렬화 오류
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 입출력 계층 Result
pub type Result<T> = std::result::Result<T, DataError>;
