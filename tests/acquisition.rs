use ai_compute_cost_toolbox::cost::{compute_acquisition, AcquisitionInput, CostCalcError};

fn base_input() -> AcquisitionInput {
    AcquisitionInput {
        gpu_id: "h100".into(),
        gpu_count: 8,
        server_id: "custom".into(),
        deployment_id: "onprem".into(),
        depreciation_years: 3,
        utilization_pct: 40.0,
    }
}

#[test]
fn scenario_h100_onprem_breakdown() {
    let res = compute_acquisition(&base_input()).expect("acquisition calc");
    assert!(
        (res.gpu_cost_usd - 224_000.0).abs() < 1e-9,
        "gpu_cost={}",
        res.gpu_cost_usd
    );
    // 가동률 40% >= 30% 이므로 패널티 없음.
    assert!((res.utilization_multiplier - 1.0).abs() < 1e-12);
    let hardware_total = res.gpu_cost_usd + res.server_cost_usd + res.infrastructure_cost_usd;
    assert!(
        (res.annual_depreciation_usd - hardware_total / 3.0).abs() < 1e-6,
        "depreciation={} expected={}",
        res.annual_depreciation_usd,
        hardware_total / 3.0
    );
    assert!(
        (res.annual_maintenance_usd - 0.12 * (res.gpu_cost_usd + res.server_cost_usd)).abs() < 1e-9
    );
    let sum = res.gpu_cost_usd
        + res.server_cost_usd
        + res.infrastructure_cost_usd
        + res.annual_maintenance_usd
        + res.annual_depreciation_usd;
    assert!((res.total_cost_usd - sum).abs() < 1e-9);
}

#[test]
fn low_utilization_penalizes_depreciation() {
    let mut input = base_input();
    input.utilization_pct = 20.0;
    let res = compute_acquisition(&input).expect("acquisition calc");
    assert!((res.utilization_multiplier - 5.0).abs() < 1e-12);

    input.utilization_pct = 80.0;
    let full = compute_acquisition(&input).expect("acquisition calc");
    assert!((full.utilization_multiplier - 1.0).abs() < 1e-12);
    assert!(
        res.annual_depreciation_usd > full.annual_depreciation_usd * 4.9,
        "low-utilization depreciation should scale by the multiplier"
    );
}

#[test]
fn bundled_gpus_are_not_billed_twice() {
    let mut input = base_input();
    input.server_id = "dgx-h100".into();
    let res = compute_acquisition(&input).expect("acquisition calc");
    // DGX 가격에 GPU 8개가 포함되므로 추가 GPU 구매 비용은 0.
    assert_eq!(res.gpu_cost_usd, 0.0);

    input.gpu_count = 4;
    let fewer = compute_acquisition(&input).expect("acquisition calc");
    assert_eq!(fewer.gpu_cost_usd, 0.0, "clamped at zero, never negative");
}

#[test]
fn cloud_deployment_has_no_infrastructure_cost() {
    let mut input = base_input();
    input.deployment_id = "cloud".into();
    let res = compute_acquisition(&input).expect("acquisition calc");
    assert_eq!(res.infrastructure_cost_usd, 0.0);

    let onprem = compute_acquisition(&base_input()).expect("acquisition calc");
    assert!(onprem.infrastructure_cost_usd > 0.0);
}

#[test]
fn infrastructure_scales_per_rack() {
    let mut input = base_input();
    input.gpu_count = 8;
    let one_rack = compute_acquisition(&input).expect("acquisition calc");
    input.gpu_count = 9;
    let two_racks = compute_acquisition(&input).expect("acquisition calc");
    assert!(
        (two_racks.infrastructure_cost_usd - 2.0 * one_rack.infrastructure_cost_usd).abs() < 1e-9,
        "9 GPUs should round up to two racks"
    );
}

#[test]
fn total_cost_increases_with_gpu_count() {
    let mut input = base_input();
    let small = compute_acquisition(&input).expect("acquisition calc");
    input.gpu_count = 16;
    let large = compute_acquisition(&input).expect("acquisition calc");
    assert!(large.total_cost_usd > small.total_cost_usd);
}

#[test]
fn deterministic_for_identical_input() {
    let a = compute_acquisition(&base_input()).expect("acquisition calc");
    let b = compute_acquisition(&base_input()).expect("acquisition calc");
    assert_eq!(a.total_cost_usd, b.total_cost_usd);
    assert_eq!(a.annual_depreciation_usd, b.annual_depreciation_usd);
}

#[test]
fn unknown_gpu_id_fails_loudly() {
    let mut input = base_input();
    input.gpu_id = "gtx-280".into();
    let err = compute_acquisition(&input).expect_err("unknown key must fail");
    assert!(matches!(err, CostCalcError::UnknownCatalogKey { .. }), "{err}");
}

#[test]
fn zero_utilization_is_rejected() {
    let mut input = base_input();
    input.utilization_pct = 0.0;
    let err = compute_acquisition(&input).expect_err("zero utilization must fail");
    assert!(matches!(err, CostCalcError::InvalidInput(_)), "{err}");
}

#[test]
fn nan_utilization_is_rejected() {
    let mut input = base_input();
    input.utilization_pct = f64::NAN;
    let err = compute_acquisition(&input).expect_err("NaN utilization must fail");
    assert!(matches!(err, CostCalcError::InvalidInput(_)), "{err}");
}

#[test]
fn hardware_without_price_is_rejected() {
    let mut input = base_input();
    input.gpu_id = "tpu-v5e".into();
    let err = compute_acquisition(&input).expect_err("priceless hardware must fail");
    assert!(matches!(err, CostCalcError::InvalidInput(_)), "{err}");
}
