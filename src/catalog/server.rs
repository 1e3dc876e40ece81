/// 서버 구성 테이블과 랙 단위 인프라 비용 상수.

#[derive(Debug, Clone, Copy)]
pub struct ServerData {
    pub id: &'static str,
    pub name: &'static str,
    /// 섀시/시스템 가격 [USD]
    pub price_usd: f64,
    /// 가격에 이미 포함된 GPU 수 [개]
    pub bundled_gpus: u32,
}

impl ServerData {
    const fn new(id: &'static str, name: &'static str, price_usd: f64, bundled_gpus: u32) -> Self {
        Self {
            id,
            name,
            price_usd,
            bundled_gpus,
        }
    }
}

/// 랙 1개당 주변 인프라 비용 [USD].
#[derive(Debug, Clone, Copy)]
pub struct RackInfraCosts {
    pub rack_usd: f64,
    pub cooling_usd: f64,
    pub networking_usd: f64,
    pub power_distribution_usd: f64,
}

impl RackInfraCosts {
    /// 랙 1개당 합계 [USD].
    pub fn total(&self) -> f64 {
        self.rack_usd + self.cooling_usd + self.networking_usd + self.power_distribution_usd
    }
}

/// 랙 단위 인프라 기준 비용. 랙 1개 = GPU 8개 기준으로 산정한다.
pub const RACK_INFRA: RackInfraCosts = RackInfraCosts {
    rack_usd: 12_000.0,
    cooling_usd: 25_000.0,
    networking_usd: 8_000.0,
    power_distribution_usd: 5_000.0,
};

pub fn all() -> &'static [ServerData] {
    SERVERS
}

/// id 또는 표시 이름으로 서버 구성을 찾는다. 대소문자를 구분하지 않는다.
pub fn find_server(key: &str) -> Option<&'static ServerData> {
    SERVERS
        .iter()
        .find(|s| s.id.eq_ignore_ascii_case(key) || s.name.eq_ignore_ascii_case(key))
}

const SERVERS: &[ServerData] = &[
    ServerData::new("custom", "Custom build (GPU 별도)", 10_000.0, 0),
    ServerData::new("dgx-h100", "NVIDIA DGX H100 (8 GPU 포함)", 320_000.0, 8),
    ServerData::new("hgx-8gpu", "HGX 8-GPU 베이스보드 서버 (8 GPU 포함)", 250_000.0, 8),
    ServerData::new("smc-4u-4gpu", "4U 4-GPU 서버 (GPU 별도)", 24_000.0, 0),
];

// NOTE:
// - DGX/HGX 가격은 GPU 포함 시스템 가격이므로 bundled_gpus 만큼은 GPU 단가를 중복 계상하지 않는다.
// - 인프라 비용은 신규 구축 기준 개략치이며 지역/시공 조건에 따라 달라진다.
