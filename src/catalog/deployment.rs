/// 배치 유형(자체 구축/코로케이션/클라우드/엣지) 테이블.

/// 전력 요금 과금 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateClass {
    Commercial,
    Industrial,
}

#[derive(Debug, Clone, Copy)]
pub struct DeploymentData {
    pub id: &'static str,
    pub name: &'static str,
    /// 기본 PUE. 호출자가 명시적으로 덮어쓸 수 있다.
    pub default_pue: f64,
    /// 적용 전력 요금 구분
    pub rate_class: RateClass,
    /// 운영 오버헤드 비율 (0.1 = 총 전력비의 10% 추가)
    pub overhead_fraction: f64,
    /// 서빙 효율 계수 (0~1, 1.0 = 벤치마크와 동일 효율)
    pub efficiency_factor: f64,
    /// 시설 인프라(랙/냉각/배전)를 직접 구매하는지 여부. 클라우드는 false.
    pub buys_infrastructure: bool,
}

impl DeploymentData {
    const fn new(
        id: &'static str,
        name: &'static str,
        default_pue: f64,
        rate_class: RateClass,
        overhead_fraction: f64,
        efficiency_factor: f64,
        buys_infrastructure: bool,
    ) -> Self {
        Self {
            id,
            name,
            default_pue,
            rate_class,
            overhead_fraction,
            efficiency_factor,
            buys_infrastructure,
        }
    }
}

pub fn all() -> &'static [DeploymentData] {
    DEPLOYMENTS
}

/// id 또는 표시 이름으로 배치 유형을 찾는다. 대소문자를 구분하지 않는다.
pub fn find_deployment(key: &str) -> Option<&'static DeploymentData> {
    DEPLOYMENTS
        .iter()
        .find(|d| d.id.eq_ignore_ascii_case(key) || d.name.eq_ignore_ascii_case(key))
}

const DEPLOYMENTS: &[DeploymentData] = &[
    DeploymentData::new("onprem", "On-premise", 1.5, RateClass::Commercial, 0.15, 0.85, true),
    DeploymentData::new("colocation", "Colocation", 1.3, RateClass::Industrial, 0.10, 0.90, true),
    DeploymentData::new("cloud", "Cloud", 1.1, RateClass::Industrial, 0.05, 1.0, false),
    DeploymentData::new("edge", "Edge", 1.8, RateClass::Commercial, 0.20, 0.75, true),
];

// NOTE:
// - PUE 기본값은 Uptime Institute 연례 조사 수준의 개략치다.
// - 클라우드의 효율 계수 1.0은 하이퍼스케일러 최적화 서빙을 기준으로 삼은 것이다.
