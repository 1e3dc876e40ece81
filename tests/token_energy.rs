use ai_compute_cost_toolbox::cost::{
    compute_token_energy, CostCalcError, EnergyBasis, TokenEnergyInput,
};

fn gpt4_cloud_input() -> TokenEnergyInput {
    TokenEnergyInput {
        basis: EnergyBasis::Model("gpt-4".into()),
        deployment_id: "cloud".into(),
        pue: 1.1,
        region_id: "us".into(),
        token_volume: 1_000_000.0,
    }
}

#[test]
fn scenario_gpt4_cloud_one_million_tokens() {
    let res = compute_token_energy(&gpt4_cloud_input()).expect("token energy calc");
    assert!((res.base_kwh_per_token - 0.00017).abs() < 1e-12);
    // cloud 효율 1.0, PUE 1.1 → 0.000187 kWh/token
    assert!(
        (res.effective_kwh_per_token - 0.000187).abs() < 1e-9,
        "effective={}",
        res.effective_kwh_per_token
    );
    assert!((res.energy_kwh - 187.0).abs() < 1e-6, "energy={}", res.energy_kwh);
    assert!(
        (res.electricity_cost_usd - 28.05).abs() < 1e-6,
        "cost={}",
        res.electricity_cost_usd
    );
    assert!((res.carbon_kg - 187.0 * 0.38).abs() < 1e-6);
}

#[test]
fn gpu_derived_energy_per_token() {
    let mut input = gpt4_cloud_input();
    input.basis = EnergyBasis::Gpu("h100".into());
    let res = compute_token_energy(&input).expect("token energy calc");
    // (700 W / 1000) / 1500 token/s
    let expected = 0.7 / 1500.0;
    assert!(
        (res.base_kwh_per_token - expected).abs() < 1e-12,
        "base={} expected={expected}",
        res.base_kwh_per_token
    );
}

#[test]
fn deployment_efficiency_divides_before_pue() {
    let mut input = gpt4_cloud_input();
    input.deployment_id = "onprem".into();
    let res = compute_token_energy(&input).expect("token energy calc");
    assert!(
        (res.effective_kwh_per_token - 0.00017 / 0.85 * 1.1).abs() < 1e-12,
        "effective={}",
        res.effective_kwh_per_token
    );
}

#[test]
fn per_token_rates_are_volume_independent() {
    let small = compute_token_energy(&gpt4_cloud_input()).expect("token energy calc");
    let mut input = gpt4_cloud_input();
    input.token_volume = 500_000_000.0;
    let large = compute_token_energy(&input).expect("token energy calc");
    assert_eq!(small.cost_per_1k_tokens_usd, large.cost_per_1k_tokens_usd);
    assert_eq!(small.cost_per_1m_tokens_usd, large.cost_per_1m_tokens_usd);
    assert!(large.energy_kwh > small.energy_kwh);
}

#[test]
fn cost_scales_linearly_with_volume() {
    let base = compute_token_energy(&gpt4_cloud_input()).expect("token energy calc");
    let mut input = gpt4_cloud_input();
    input.token_volume = 2_000_000.0;
    let doubled = compute_token_energy(&input).expect("token energy calc");
    assert!((doubled.electricity_cost_usd - 2.0 * base.electricity_cost_usd).abs() < 1e-9);
}

#[test]
fn unknown_model_fails_loudly() {
    let mut input = gpt4_cloud_input();
    input.basis = EnergyBasis::Model("gpt-9".into());
    let err = compute_token_energy(&input).expect_err("unknown key must fail");
    assert!(matches!(err, CostCalcError::UnknownCatalogKey { .. }), "{err}");
}

#[test]
fn unknown_region_fails_loudly() {
    let mut input = gpt4_cloud_input();
    input.region_id = "antarctica".into();
    let err = compute_token_energy(&input).expect_err("unknown key must fail");
    assert!(matches!(err, CostCalcError::UnknownCatalogKey { .. }), "{err}");
}

#[test]
fn hardware_without_throughput_is_rejected() {
    let mut input = gpt4_cloud_input();
    input.basis = EnergyBasis::Gpu("cpu-epyc".into());
    let err = compute_token_energy(&input).expect_err("no throughput benchmark");
    assert!(matches!(err, CostCalcError::InvalidInput(_)), "{err}");
}

#[test]
fn pue_below_one_is_rejected() {
    let mut input = gpt4_cloud_input();
    input.pue = 0.9;
    let err = compute_token_energy(&input).expect_err("PUE < 1 must fail");
    assert!(matches!(err, CostCalcError::InvalidInput(_)), "{err}");
}

#[test]
fn non_finite_inputs_are_rejected() {
    let mut input = gpt4_cloud_input();
    input.pue = f64::NAN;
    let err = compute_token_energy(&input).expect_err("NaN PUE must fail");
    assert!(matches!(err, CostCalcError::InvalidInput(_)), "{err}");

    let mut input = gpt4_cloud_input();
    input.token_volume = f64::NAN;
    let err = compute_token_energy(&input).expect_err("NaN volume must fail");
    assert!(matches!(err, CostCalcError::InvalidInput(_)), "{err}");
}
