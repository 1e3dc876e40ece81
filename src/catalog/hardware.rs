/// GPU/가속기 프로필 테이블. 값은 참고용 공개 사양 기준이며 실제 견적과 다를 수 있다.

#[derive(Debug, Clone, Copy)]
pub struct HardwareData {
    pub id: &'static str,
    pub name: &'static str,
    /// 정격 소비 전력 [W]
    pub power_watts: f64,
    /// 단가 [USD]. 시중 판매가가 없는 장비는 None.
    pub price_usd: Option<f64>,
    /// 추론 처리량 [token/s]. 벤치마크가 없는 장비는 None.
    pub tokens_per_second: Option<f64>,
}

impl HardwareData {
    const fn new(
        id: &'static str,
        name: &'static str,
        power_watts: f64,
        price_usd: Option<f64>,
        tokens_per_second: Option<f64>,
    ) -> Self {
        Self {
            id,
            name,
            power_watts,
            price_usd,
            tokens_per_second,
        }
    }
}

pub fn all() -> &'static [HardwareData] {
    HARDWARE
}

/// id 또는 표시 이름으로 하드웨어를 찾는다. 대소문자를 구분하지 않는다.
pub fn find_hardware(key: &str) -> Option<&'static HardwareData> {
    HARDWARE
        .iter()
        .find(|h| h.id.eq_ignore_ascii_case(key) || h.name.eq_ignore_ascii_case(key))
}

const HARDWARE: &[HardwareData] = &[
    HardwareData::new("h100", "NVIDIA H100 SXM", 700.0, Some(28_000.0), Some(1500.0)),
    HardwareData::new("h200", "NVIDIA H200 SXM", 700.0, Some(32_000.0), Some(1900.0)),
    HardwareData::new("b200", "NVIDIA B200", 1000.0, Some(40_000.0), Some(3200.0)),
    HardwareData::new("a100", "NVIDIA A100 80GB", 400.0, Some(12_000.0), Some(600.0)),
    HardwareData::new("l40s", "NVIDIA L40S", 350.0, Some(8_000.0), Some(280.0)),
    HardwareData::new("l4", "NVIDIA L4", 72.0, Some(2_500.0), Some(120.0)),
    HardwareData::new("rtx4090", "GeForce RTX 4090", 450.0, Some(1_800.0), Some(250.0)),
    HardwareData::new("mi300x", "AMD MI300X", 750.0, Some(15_000.0), Some(1400.0)),
    HardwareData::new("mi250", "AMD MI250", 560.0, Some(10_000.0), Some(500.0)),
    HardwareData::new("tpu-v5e", "Google TPU v5e", 200.0, None, Some(400.0)),
    HardwareData::new("tpu-v5p", "Google TPU v5p", 450.0, None, Some(1100.0)),
    HardwareData::new("cpu-epyc", "AMD EPYC 9654", 360.0, Some(11_000.0), None),
];

// NOTE:
// - 전력은 보드/칩 정격(TDP) 기준이며 서버 전체 소비 전력이 아니다.
// - 처리량은 70B급 모델 서빙 기준의 대략적인 추정치로, 모델/배치 크기에 따라 크게 달라진다.
// - TPU는 단품 판매가가 없어 price_usd를 비워둔다. 도입 비용 계산에는 사용할 수 없다.
