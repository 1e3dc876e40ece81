//! 비용 계산 모듈 모음. 각 계산은 입력 구조체 → 결과 구조체의 순수 함수다.

pub mod acquisition;
pub mod operations;
pub mod token_energy;

pub use acquisition::*;
pub use operations::*;
pub use token_energy::*;

/// 비용 계산 오류를 표현한다.
#[derive(Debug)]
pub enum CostCalcError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
    /// 카탈로그에 없는 키를 참조한 경우. 데이터/프로그래밍 오류이므로 즉시 실패한다.
    UnknownCatalogKey {
        kind: &'static str,
        key: String,
    },
}

impl std::fmt::Display for CostCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostCalcError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
            CostCalcError::UnknownCatalogKey { kind, key } => {
                write!(f, "카탈로그에 없는 {kind} 키: {key}")
            }
        }
    }
}

impl std::error::Error for CostCalcError {}
