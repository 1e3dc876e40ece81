use crate::catalog::{find_deployment, find_hardware, find_server, RACK_INFRA};
use crate::cost::CostCalcError;

/// 랙 1개에 수용하는 GPU 수. 인프라 비용 산정 단위.
const GPUS_PER_RACK: u32 = 8;
/// 연간 유지보수 비율. 하드웨어 취득가 대비.
const MAINTENANCE_RATE: f64 = 0.12;
/// 저가동률 패널티가 적용되는 경계 [%].
const LOW_UTILIZATION_THRESHOLD_PCT: f64 = 30.0;

/// 하드웨어 도입 비용 계산 입력.
#[derive(Debug, Clone)]
pub struct AcquisitionInput {
    /// GPU 카탈로그 id
    pub gpu_id: String,
    /// GPU 수량 [개]
    pub gpu_count: u32,
    /// 서버 구성 카탈로그 id
    pub server_id: String,
    /// 배치 유형 카탈로그 id
    pub deployment_id: String,
    /// 감가상각 기간 [년] (1~10)
    pub depreciation_years: u32,
    /// 하드웨어 가동률 [%] (1~100)
    pub utilization_pct: f64,
}

impl Default for AcquisitionInput {
    fn default() -> Self {
        Self {
            gpu_id: "h100".into(),
            gpu_count: 8,
            server_id: "custom".into(),
            deployment_id: "onprem".into(),
            depreciation_years: 3,
            utilization_pct: 80.0,
        }
    }
}

/// 하드웨어 도입 비용 계산 결과.
#[derive(Debug, Clone)]
pub struct AcquisitionResult {
    /// GPU 구매 비용 [USD]. 서버에 포함된 GPU는 제외.
    pub gpu_cost_usd: f64,
    /// 서버 섀시/시스템 비용 [USD]
    pub server_cost_usd: f64,
    /// 랙/냉각/네트워킹/배전 인프라 비용 [USD]. 클라우드는 0.
    pub infrastructure_cost_usd: f64,
    /// 연간 유지보수 비용 [USD/년]
    pub annual_maintenance_usd: f64,
    /// 저가동률 패널티 배수 (가동률 30% 이상이면 1.0)
    pub utilization_multiplier: f64,
    /// 연간 감가상각 비용 [USD/년]
    pub annual_depreciation_usd: f64,
    /// 총 비용 [USD]
    pub total_cost_usd: f64,
}

/// 하드웨어 도입 비용을 계산한다.
pub fn compute_acquisition(input: &AcquisitionInput) -> Result<AcquisitionResult, CostCalcError> {
    if input.gpu_count == 0 {
        return Err(CostCalcError::InvalidInput("GPU 수량은 1 이상이어야 합니다."));
    }
    if input.depreciation_years == 0 {
        return Err(CostCalcError::InvalidInput(
            "감가상각 기간은 1년 이상이어야 합니다.",
        ));
    }
    // NaN은 비교에 모두 실패하므로 부정형 검사로 함께 걸러낸다.
    if !(input.utilization_pct > 0.0) {
        return Err(CostCalcError::InvalidInput(
            "가동률은 0보다 큰 수이어야 합니다. (1~100% 범위 권장)",
        ));
    }

    let gpu = find_hardware(&input.gpu_id).ok_or_else(|| CostCalcError::UnknownCatalogKey {
        kind: "하드웨어",
        key: input.gpu_id.clone(),
    })?;
    let server = find_server(&input.server_id).ok_or_else(|| CostCalcError::UnknownCatalogKey {
        kind: "서버 구성",
        key: input.server_id.clone(),
    })?;
    let deployment =
        find_deployment(&input.deployment_id).ok_or_else(|| CostCalcError::UnknownCatalogKey {
            kind: "배치 유형",
            key: input.deployment_id.clone(),
        })?;

    let gpu_price = gpu.price_usd.ok_or(CostCalcError::InvalidInput(
        "해당 하드웨어는 카탈로그에 단가가 없어 도입 비용을 계산할 수 없습니다.",
    ))?;

    // 서버 가격에 이미 포함된 GPU는 추가 구매 수량에서 제외한다. (음수 방지)
    let billable_gpus = input.gpu_count.saturating_sub(server.bundled_gpus);
    let gpu_cost = gpu_price * billable_gpus as f64;
    let server_cost = server.price_usd;

    // 인프라는 랙 단위로 올림 산정. 클라우드는 시설을 구매하지 않으므로 0.
    let racks = input.gpu_count.div_ceil(GPUS_PER_RACK);
    let infrastructure_cost = if deployment.buys_infrastructure {
        RACK_INFRA.total() * racks as f64
    } else {
        0.0
    };

    let annual_maintenance = MAINTENANCE_RATE * (gpu_cost + server_cost);

    let utilization_multiplier = if input.utilization_pct < LOW_UTILIZATION_THRESHOLD_PCT {
        100.0 / input.utilization_pct
    } else {
        1.0
    };
    let annual_depreciation = (gpu_cost + server_cost + infrastructure_cost)
        / input.depreciation_years as f64
        * utilization_multiplier;

    let total = gpu_cost + server_cost + infrastructure_cost + annual_maintenance + annual_depreciation;

    Ok(AcquisitionResult {
        gpu_cost_usd: gpu_cost,
        server_cost_usd: server_cost,
        infrastructure_cost_usd: infrastructure_cost,
        annual_maintenance_usd: annual_maintenance,
        utilization_multiplier,
        annual_depreciation_usd: annual_depreciation,
        total_cost_usd: total,
    })
}
