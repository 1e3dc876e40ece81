use ai_compute_cost_toolbox::cost::{compute_operations, CostCalcError, OperationsInput};

fn h100_onprem_input() -> OperationsInput {
    OperationsInput {
        hardware_id: "h100".into(),
        node_count: 8,
        utilization_pct: 61.0,
        region_id: "us".into(),
        deployment_id: "onprem".into(),
        pue: 1.1,
        operational_days: 365,
    }
}

#[test]
fn scenario_h100_cluster_daily_cost() {
    let res = compute_operations(&h100_onprem_input()).expect("operations calc");
    // 700 W × 61% = 427 W
    assert!((res.actual_power_w_per_node - 427.0).abs() < 1e-9);
    // 8 × 427 / 1000 × 1.1 ≈ 3.7576 kW
    assert!(
        (res.total_facility_kw - 3.7576).abs() < 1e-9,
        "kw={}",
        res.total_facility_kw
    );
    assert!((res.daily_energy_kwh - 90.1824).abs() < 1e-6);
    assert!(
        (res.daily_power_cost_usd - 13.52736).abs() < 1e-6,
        "daily={}",
        res.daily_power_cost_usd
    );
}

#[test]
fn monthly_cost_is_daily_times_average_month() {
    let res = compute_operations(&h100_onprem_input()).expect("operations calc");
    let expected = res.daily_power_cost_usd * 30.44;
    let rel = (res.monthly_power_cost_usd - expected).abs() / expected;
    assert!(rel < 1e-6, "monthly={} expected={expected}", res.monthly_power_cost_usd);
}

#[test]
fn annual_cost_is_daily_times_operational_days() {
    let mut input = h100_onprem_input();
    input.operational_days = 200;
    let res = compute_operations(&input).expect("operations calc");
    assert_eq!(res.annual_power_cost_usd, res.daily_power_cost_usd * 200.0);
    assert_eq!(res.annual_cooling_cost_usd, res.daily_cooling_cost_usd * 200.0);
}

#[test]
fn full_utilization_draws_nominal_power() {
    let mut input = h100_onprem_input();
    input.utilization_pct = 100.0;
    let res = compute_operations(&input).expect("operations calc");
    assert_eq!(res.actual_power_w_per_node, 700.0);
}

#[test]
fn industrial_deployment_uses_industrial_rate() {
    let mut input = h100_onprem_input();
    input.deployment_id = "cloud".into();
    let res = compute_operations(&input).expect("operations calc");
    assert!((res.rate_usd_per_kwh - 0.08).abs() < 1e-12);

    let commercial = compute_operations(&h100_onprem_input()).expect("operations calc");
    assert!((commercial.rate_usd_per_kwh - 0.15).abs() < 1e-12);
}

#[test]
fn cooling_cost_is_additive() {
    let res = compute_operations(&h100_onprem_input()).expect("operations calc");
    // us 냉각 배수 0.15, 전력 비용에서 차감되지 않고 가산된다.
    let expected_cooling = res.total_facility_kw * 0.15 * 24.0 * res.rate_usd_per_kwh;
    assert!((res.daily_cooling_cost_usd - expected_cooling).abs() < 1e-9);
    // onprem 오버헤드 15%
    let expected_total =
        (res.annual_power_cost_usd + res.annual_cooling_cost_usd) * 1.15;
    assert!(
        (res.total_operational_cost_usd - expected_total).abs() < 1e-6,
        "total={} expected={expected_total}",
        res.total_operational_cost_usd
    );
}

#[test]
fn carbon_tracks_annual_energy() {
    let res = compute_operations(&h100_onprem_input()).expect("operations calc");
    assert_eq!(res.annual_energy_kwh, res.daily_energy_kwh * 365.0);
    assert!((res.annual_carbon_kg - res.annual_energy_kwh * 0.38).abs() < 1e-6);
}

#[test]
fn cost_increases_with_node_count_and_utilization() {
    let base = compute_operations(&h100_onprem_input()).expect("operations calc");

    let mut more_nodes = h100_onprem_input();
    more_nodes.node_count = 16;
    let doubled = compute_operations(&more_nodes).expect("operations calc");
    assert!(doubled.total_operational_cost_usd > base.total_operational_cost_usd);

    let mut busier = h100_onprem_input();
    busier.utilization_pct = 90.0;
    let high = compute_operations(&busier).expect("operations calc");
    assert!(high.daily_power_cost_usd > base.daily_power_cost_usd);
}

#[test]
fn deterministic_for_identical_input() {
    let a = compute_operations(&h100_onprem_input()).expect("operations calc");
    let b = compute_operations(&h100_onprem_input()).expect("operations calc");
    assert_eq!(a.total_operational_cost_usd, b.total_operational_cost_usd);
    assert_eq!(a.annual_carbon_kg, b.annual_carbon_kg);
}

#[test]
fn invalid_inputs_are_rejected() {
    let mut input = h100_onprem_input();
    input.utilization_pct = 0.0;
    assert!(matches!(
        compute_operations(&input).expect_err("zero utilization"),
        CostCalcError::InvalidInput(_)
    ));

    let mut input = h100_onprem_input();
    input.pue = 0.5;
    assert!(matches!(
        compute_operations(&input).expect_err("PUE < 1"),
        CostCalcError::InvalidInput(_)
    ));

    let mut input = h100_onprem_input();
    input.operational_days = 0;
    assert!(matches!(
        compute_operations(&input).expect_err("zero days"),
        CostCalcError::InvalidInput(_)
    ));

    let mut input = h100_onprem_input();
    input.deployment_id = "mainframe".into();
    assert!(matches!(
        compute_operations(&input).expect_err("unknown deployment"),
        CostCalcError::UnknownCatalogKey { .. }
    ));
}

#[test]
fn non_finite_inputs_never_reach_the_formulas() {
    // NaN은 범위 검사 양쪽 비교에 모두 실패한다. Ok로 흘러나와선 안 된다.
    let mut input = h100_onprem_input();
    input.utilization_pct = f64::NAN;
    assert!(matches!(
        compute_operations(&input).expect_err("NaN utilization"),
        CostCalcError::InvalidInput(_)
    ));

    let mut input = h100_onprem_input();
    input.pue = f64::NAN;
    assert!(matches!(
        compute_operations(&input).expect_err("NaN PUE"),
        CostCalcError::InvalidInput(_)
    ));

    let mut input = h100_onprem_input();
    input.utilization_pct = f64::INFINITY;
    assert!(matches!(
        compute_operations(&input).expect_err("infinite utilization"),
        CostCalcError::InvalidInput(_)
    ));
}
