/// 지역별 전력 요금/탄소 집약도 테이블.

#[derive(Debug, Clone, Copy)]
pub struct RegionData {
    pub id: &'static str,
    pub name: &'static str,
    /// 상업용 전력 요금 [USD/kWh]
    pub commercial_rate_usd_per_kwh: f64,
    /// 산업용 전력 요금 [USD/kWh]
    pub industrial_rate_usd_per_kwh: f64,
    /// 전력 탄소 집약도 [kg CO₂e/kWh]
    pub carbon_kg_per_kwh: f64,
    /// 냉각 부하 배수. IT 부하 대비 냉각 전력의 비율.
    pub cooling_multiplier: f64,
}

impl RegionData {
    const fn new(
        id: &'static str,
        name: &'static str,
        commercial_rate_usd_per_kwh: f64,
        industrial_rate_usd_per_kwh: f64,
        carbon_kg_per_kwh: f64,
        cooling_multiplier: f64,
    ) -> Self {
        Self {
            id,
            name,
            commercial_rate_usd_per_kwh,
            industrial_rate_usd_per_kwh,
            carbon_kg_per_kwh,
            cooling_multiplier,
        }
    }
}

pub fn all() -> &'static [RegionData] {
    REGIONS
}

/// id 또는 표시 이름으로 지역을 찾는다. 대소문자를 구분하지 않는다.
pub fn find_region(key: &str) -> Option<&'static RegionData> {
    REGIONS
        .iter()
        .find(|r| r.id.eq_ignore_ascii_case(key) || r.name.eq_ignore_ascii_case(key))
}

const REGIONS: &[RegionData] = &[
    RegionData::new("us", "United States", 0.15, 0.08, 0.38, 0.15),
    RegionData::new("eu", "Western Europe", 0.25, 0.12, 0.23, 0.12),
    RegionData::new("nordics", "Nordics", 0.12, 0.06, 0.02, 0.08),
    RegionData::new("apac", "Asia Pacific", 0.18, 0.10, 0.55, 0.20),
    RegionData::new("india", "India", 0.10, 0.08, 0.71, 0.25),
    RegionData::new("mena", "Middle East & North Africa", 0.08, 0.05, 0.49, 0.30),
];

// NOTE:
// - 요금은 국가 평균 수준의 참고치(2024년경)이며 사업자 계약 단가와 다를 수 있다.
// - 탄소 집약도는 전력망 평균치. 냉각 배수는 기후대별 개략치다.
