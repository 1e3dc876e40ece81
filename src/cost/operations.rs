use crate::catalog::{find_deployment, find_hardware, find_region, RateClass};
use crate::cost::CostCalcError;

/// 월 평균 일수. 연 365.25일 / 12개월.
const DAYS_PER_MONTH: f64 = 30.44;

/// 전력/운영 비용 계산 입력.
#[derive(Debug, Clone)]
pub struct OperationsInput {
    /// 하드웨어 카탈로그 id
    pub hardware_id: String,
    /// 노드 수량 [대]
    pub node_count: u32,
    /// 가동률 [%] (1~100)
    pub utilization_pct: f64,
    /// 지역 카탈로그 id
    pub region_id: String,
    /// 배치 유형 카탈로그 id. 요금 구분과 오버헤드 비율을 제공한다.
    pub deployment_id: String,
    /// PUE (1.0~3.0). 배치 유형 기본값을 명시적으로 덮어쓴다.
    pub pue: f64,
    /// 연간 운영일수 [일] (1~365)
    pub operational_days: u32,
}

impl Default for OperationsInput {
    fn default() -> Self {
        Self {
            hardware_id: "h100".into(),
            node_count: 8,
            utilization_pct: 80.0,
            region_id: "us".into(),
            deployment_id: "onprem".into(),
            pue: 1.5,
            operational_days: 365,
        }
    }
}

/// 전력/운영 비용 계산 결과.
#[derive(Debug, Clone)]
pub struct OperationsResult {
    /// 노드당 실제 소비 전력 [W] = 정격 × 가동률
    pub actual_power_w_per_node: f64,
    /// 시설 전체 전력 [kW] (PUE 반영)
    pub total_facility_kw: f64,
    /// 적용 전력 요금 [USD/kWh]
    pub rate_usd_per_kwh: f64,
    /// 일간 에너지 소비량 [kWh/일]
    pub daily_energy_kwh: f64,
    /// 일간 전력 비용 [USD/일]
    pub daily_power_cost_usd: f64,
    /// 일간 냉각 비용 [USD/일]. 전력 비용과 별도로 가산된다.
    pub daily_cooling_cost_usd: f64,
    /// 월간 전력 비용 [USD/월] (일간 × 30.44)
    pub monthly_power_cost_usd: f64,
    /// 연간 전력 비용 [USD/년] (일간 × 운영일수)
    pub annual_power_cost_usd: f64,
    /// 연간 냉각 비용 [USD/년]
    pub annual_cooling_cost_usd: f64,
    /// 연간 총 운영 비용 [USD/년] = (전력 + 냉각) × (1 + 오버헤드)
    pub total_operational_cost_usd: f64,
    /// 연간 에너지 소비량 [kWh/년]
    pub annual_energy_kwh: f64,
    /// 연간 탄소 배출량 [kg CO₂e/년]
    pub annual_carbon_kg: f64,
}

/// 전력/운영 비용을 계산한다.
pub fn compute_operations(input: &OperationsInput) -> Result<OperationsResult, CostCalcError> {
    if input.node_count == 0 {
        return Err(CostCalcError::InvalidInput("노드 수량은 1 이상이어야 합니다."));
    }
    // NaN은 비교에 모두 실패하므로 부정형 검사로 함께 걸러낸다.
    if !(input.utilization_pct > 0.0 && input.utilization_pct <= 100.0) {
        return Err(CostCalcError::InvalidInput(
            "가동률은 0 초과 100 이하인 수이어야 합니다.",
        ));
    }
    if !(input.pue >= 1.0) {
        return Err(CostCalcError::InvalidInput("PUE는 1.0 이상인 수이어야 합니다."));
    }
    if input.operational_days == 0 || input.operational_days > 365 {
        return Err(CostCalcError::InvalidInput(
            "운영일수는 1~365일 범위여야 합니다.",
        ));
    }

    let hardware =
        find_hardware(&input.hardware_id).ok_or_else(|| CostCalcError::UnknownCatalogKey {
            kind: "하드웨어",
            key: input.hardware_id.clone(),
        })?;
    let region = find_region(&input.region_id).ok_or_else(|| CostCalcError::UnknownCatalogKey {
        kind: "지역",
        key: input.region_id.clone(),
    })?;
    let deployment =
        find_deployment(&input.deployment_id).ok_or_else(|| CostCalcError::UnknownCatalogKey {
            kind: "배치 유형",
            key: input.deployment_id.clone(),
        })?;

    let actual_power_w = hardware.power_watts * input.utilization_pct / 100.0;
    let total_facility_kw = actual_power_w * input.node_count as f64 / 1000.0 * input.pue;

    let rate = match deployment.rate_class {
        RateClass::Industrial => region.industrial_rate_usd_per_kwh,
        RateClass::Commercial => region.commercial_rate_usd_per_kwh,
    };

    let daily_energy_kwh = total_facility_kw * 24.0;
    let daily_power_cost = daily_energy_kwh * rate;
    // 냉각은 별도의 전력 수요로 보고 IT 부하에 가산한다. 전력 비용에서 차감하지 않는다.
    let daily_cooling_cost = total_facility_kw * region.cooling_multiplier * 24.0 * rate;

    let days = input.operational_days as f64;
    let annual_power_cost = daily_power_cost * days;
    let annual_cooling_cost = daily_cooling_cost * days;
    let total_operational_cost =
        (annual_power_cost + annual_cooling_cost) * (1.0 + deployment.overhead_fraction);

    let annual_energy_kwh = daily_energy_kwh * days;

    Ok(OperationsResult {
        actual_power_w_per_node: actual_power_w,
        total_facility_kw,
        rate_usd_per_kwh: rate,
        daily_energy_kwh,
        daily_power_cost_usd: daily_power_cost,
        daily_cooling_cost_usd: daily_cooling_cost,
        monthly_power_cost_usd: daily_power_cost * DAYS_PER_MONTH,
        annual_power_cost_usd: annual_power_cost,
        annual_cooling_cost_usd: annual_cooling_cost,
        total_operational_cost_usd: total_operational_cost,
        annual_energy_kwh,
        annual_carbon_kg: annual_energy_kwh * region.carbon_kg_per_kwh,
    })
}
