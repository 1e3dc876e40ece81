/// 사용자 조정 입력값의 허용 범위를 선언한다.
/// 범위 밖 값은 엔진 호출 전에 클램프하거나 거부하는 것이 원칙이다.

/// 스칼라 입력 하나의 허용 범위 [min, max].
#[derive(Debug, Clone, Copy)]
pub struct Bound {
    pub min: f64,
    pub max: f64,
}

impl Bound {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// 값이 범위 안에 있는지 확인한다. NaN은 항상 범위 밖이다.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// 값을 범위 안으로 클램프한다. NaN은 최소값으로 처리한다.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

/// 하드웨어 가동률 [%]
pub const UTILIZATION_PCT: Bound = Bound::new(1.0, 100.0);
/// 감가상각 기간 [년]
pub const DEPRECIATION_YEARS: Bound = Bound::new(1.0, 10.0);
/// PUE (Power Usage Effectiveness)
pub const PUE: Bound = Bound::new(1.0, 3.0);
/// 연간 운영일수 [일]
pub const OPERATIONAL_DAYS: Bound = Bound::new(1.0, 365.0);
/// GPU 수량 [개]
pub const GPU_COUNT: Bound = Bound::new(1.0, 4096.0);
/// 노드 수량 [대]
pub const NODE_COUNT: Bound = Bound::new(1.0, 100_000.0);
/// 토큰 생성량 [token]
pub const TOKEN_VOLUME: Bound = Bound::new(1.0, 1.0e13);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_and_contains() {
        assert!(UTILIZATION_PCT.contains(61.0));
        assert!(!UTILIZATION_PCT.contains(0.0));
        assert_eq!(UTILIZATION_PCT.clamp(0.0), 1.0);
        assert_eq!(UTILIZATION_PCT.clamp(150.0), 100.0);
        assert_eq!(PUE.clamp(0.8), 1.0);
        assert_eq!(OPERATIONAL_DAYS.clamp(400.0), 365.0);
    }

    #[test]
    fn non_finite_values_never_pass_through() {
        assert!(!UTILIZATION_PCT.contains(f64::NAN));
        assert_eq!(UTILIZATION_PCT.clamp(f64::NAN), 1.0);
        assert_eq!(UTILIZATION_PCT.clamp(f64::INFINITY), 100.0);
        assert_eq!(UTILIZATION_PCT.clamp(f64::NEG_INFINITY), 1.0);
        assert_eq!(PUE.clamp(f64::NAN), 1.0);
    }
}
