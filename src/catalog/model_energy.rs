/// 모델별 토큰 생성 에너지 벤치마크 테이블.

#[derive(Debug, Clone, Copy)]
pub struct ModelEnergyData {
    pub id: &'static str,
    pub name: &'static str,
    /// 출력 토큰 1개 생성에 드는 IT 에너지 [kWh/token]
    pub kwh_per_token: f64,
}

impl ModelEnergyData {
    const fn new(id: &'static str, name: &'static str, kwh_per_token: f64) -> Self {
        Self {
            id,
            name,
            kwh_per_token,
        }
    }
}

pub fn all() -> &'static [ModelEnergyData] {
    MODELS
}

/// id 또는 표시 이름으로 모델 벤치마크를 찾는다. 대소문자를 구분하지 않는다.
pub fn find_model(key: &str) -> Option<&'static ModelEnergyData> {
    MODELS
        .iter()
        .find(|m| m.id.eq_ignore_ascii_case(key) || m.name.eq_ignore_ascii_case(key))
}

const MODELS: &[ModelEnergyData] = &[
    ModelEnergyData::new("gpt-4", "GPT-4", 0.00017),
    ModelEnergyData::new("gpt-3.5-turbo", "GPT-3.5 Turbo", 0.00003),
    ModelEnergyData::new("llama-3-70b", "Llama 3 70B", 0.00008),
    ModelEnergyData::new("llama-3-8b", "Llama 3 8B", 0.00001),
    ModelEnergyData::new("mixtral-8x7b", "Mixtral 8x7B", 0.00005),
    ModelEnergyData::new("deepseek-v3", "DeepSeek-V3", 0.00006),
];

// NOTE:
// - 공개 추정치 기반 벤치마크다. 추론 스택/배치 구성에 따라 수 배 차이가 날 수 있다.
// - PUE와 서빙 효율 보정 전의 순수 IT 에너지 기준 값이다.
