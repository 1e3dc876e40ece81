use crate::catalog::{find_deployment, find_hardware, find_model, find_region};
use crate::cost::CostCalcError;

/// 토큰당 에너지 산정 기준.
#[derive(Debug, Clone)]
pub enum EnergyBasis {
    /// 모델 벤치마크 값 사용 (카탈로그 id)
    Model(String),
    /// GPU 정격 전력과 처리량으로 유도: (W/1000) / (token/s) (카탈로그 id)
    Gpu(String),
}

/// 토큰 생성 전력 비용 계산 입력.
#[derive(Debug, Clone)]
pub struct TokenEnergyInput {
    /// 토큰당 에너지 기준
    pub basis: EnergyBasis,
    /// 배치 유형 카탈로그 id. 서빙 효율 계수를 제공한다.
    pub deployment_id: String,
    /// PUE (1.0~3.0)
    pub pue: f64,
    /// 지역 카탈로그 id. 상업용 요금과 탄소 집약도를 제공한다.
    pub region_id: String,
    /// 토큰 생성량 [token]
    pub token_volume: f64,
}

impl Default for TokenEnergyInput {
    fn default() -> Self {
        Self {
            basis: EnergyBasis::Model("gpt-4".into()),
            deployment_id: "cloud".into(),
            pue: 1.1,
            region_id: "us".into(),
            token_volume: 1_000_000.0,
        }
    }
}

/// 토큰 생성 전력 비용 계산 결과.
#[derive(Debug, Clone)]
pub struct TokenEnergyResult {
    /// 보정 전 토큰당 IT 에너지 [kWh/token]
    pub base_kwh_per_token: f64,
    /// 효율/PUE 보정 후 토큰당 에너지 [kWh/token]
    pub effective_kwh_per_token: f64,
    /// 총 에너지 소비량 [kWh]
    pub energy_kwh: f64,
    /// 전력 비용 [USD]
    pub electricity_cost_usd: f64,
    /// 탄소 배출량 [kg CO₂e]
    pub carbon_kg: f64,
    /// 1천 토큰당 비용 [USD]. 생성량과 무관한 단가.
    pub cost_per_1k_tokens_usd: f64,
    /// 백만 토큰당 비용 [USD]. 생성량과 무관한 단가.
    pub cost_per_1m_tokens_usd: f64,
}

/// 토큰 생성 전력 비용을 계산한다.
pub fn compute_token_energy(input: &TokenEnergyInput) -> Result<TokenEnergyResult, CostCalcError> {
    // NaN은 비교에 모두 실패하므로 부정형 검사로 함께 걸러낸다.
    if !(input.pue >= 1.0) {
        return Err(CostCalcError::InvalidInput("PUE는 1.0 이상인 수이어야 합니다."));
    }
    if !(input.token_volume > 0.0) {
        return Err(CostCalcError::InvalidInput(
            "토큰 생성량은 0보다 큰 수이어야 합니다.",
        ));
    }

    let base_kwh_per_token = match &input.basis {
        EnergyBasis::Model(id) => {
            find_model(id)
                .ok_or_else(|| CostCalcError::UnknownCatalogKey {
                    kind: "모델",
                    key: id.clone(),
                })?
                .kwh_per_token
        }
        EnergyBasis::Gpu(id) => {
            let gpu = find_hardware(id).ok_or_else(|| CostCalcError::UnknownCatalogKey {
                kind: "하드웨어",
                key: id.clone(),
            })?;
            let tps = gpu.tokens_per_second.ok_or(CostCalcError::InvalidInput(
                "해당 하드웨어는 처리량(token/s) 벤치마크가 없어 토큰당 에너지를 유도할 수 없습니다.",
            ))?;
            (gpu.power_watts / 1000.0) / tps
        }
    };

    let deployment =
        find_deployment(&input.deployment_id).ok_or_else(|| CostCalcError::UnknownCatalogKey {
            kind: "배치 유형",
            key: input.deployment_id.clone(),
        })?;
    let region = find_region(&input.region_id).ok_or_else(|| CostCalcError::UnknownCatalogKey {
        kind: "지역",
        key: input.region_id.clone(),
    })?;

    if deployment.efficiency_factor <= 0.0 {
        return Err(CostCalcError::InvalidInput(
            "배치 유형의 효율 계수는 0보다 커야 합니다.",
        ));
    }

    // 서빙 효율로 나눈 뒤 PUE를 곱해 시설 전체 기준 에너지로 환산한다.
    let effective_kwh_per_token = base_kwh_per_token / deployment.efficiency_factor * input.pue;

    let energy_kwh = effective_kwh_per_token * input.token_volume;
    let rate = region.commercial_rate_usd_per_kwh;
    let cost_per_token = effective_kwh_per_token * rate;

    Ok(TokenEnergyResult {
        base_kwh_per_token,
        effective_kwh_per_token,
        energy_kwh,
        electricity_cost_usd: energy_kwh * rate,
        carbon_kg: energy_kwh * region.carbon_kg_per_kwh,
        cost_per_1k_tokens_usd: cost_per_token * 1_000.0,
        cost_per_1m_tokens_usd: cost_per_token * 1_000_000.0,
    })
}
