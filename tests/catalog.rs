use ai_compute_cost_toolbox::catalog::{
    deployment, find_deployment, find_hardware, find_model, find_region, find_server, hardware,
    model_energy, region, server, RateClass, RACK_INFRA,
};

#[test]
fn lookup_is_case_insensitive_by_id_or_name() {
    assert!(find_hardware("H100").is_some());
    assert!(find_hardware("NVIDIA H100 SXM").is_some());
    assert!(find_region("US").is_some());
    assert!(find_deployment("CLOUD").is_some());
    assert!(find_model("GPT-4").is_some());
    assert!(find_server("Dgx-H100").is_some());
}

#[test]
fn unknown_keys_return_none() {
    assert!(find_hardware("voodoo2").is_none());
    assert!(find_region("atlantis").is_none());
    assert!(find_deployment("orbital").is_none());
    assert!(find_model("skynet").is_none());
    assert!(find_server("beige-tower").is_none());
}

#[test]
fn pinned_reference_values() {
    let h100 = find_hardware("h100").expect("h100 in catalog");
    assert_eq!(h100.power_watts, 700.0);
    assert_eq!(h100.price_usd, Some(28_000.0));

    let us = find_region("us").expect("us in catalog");
    assert_eq!(us.commercial_rate_usd_per_kwh, 0.15);

    let gpt4 = find_model("gpt-4").expect("gpt-4 in catalog");
    assert_eq!(gpt4.kwh_per_token, 0.00017);

    let cloud = find_deployment("cloud").expect("cloud in catalog");
    assert_eq!(cloud.efficiency_factor, 1.0);
    assert_eq!(cloud.rate_class, RateClass::Industrial);
    assert!(!cloud.buys_infrastructure);
}

#[test]
fn tables_are_well_formed() {
    assert!(!hardware::all().is_empty());
    assert!(!server::all().is_empty());
    assert!(!region::all().is_empty());
    assert!(!deployment::all().is_empty());
    assert!(!model_energy::all().is_empty());

    for h in hardware::all() {
        assert!(h.power_watts > 0.0, "{} power", h.id);
    }
    for r in region::all() {
        assert!(r.commercial_rate_usd_per_kwh > 0.0, "{} rate", r.id);
        assert!(r.industrial_rate_usd_per_kwh <= r.commercial_rate_usd_per_kwh, "{}", r.id);
        assert!(r.cooling_multiplier >= 0.0, "{} cooling", r.id);
    }
    for d in deployment::all() {
        assert!(d.default_pue >= 1.0, "{} pue", d.id);
        assert!(d.efficiency_factor > 0.0 && d.efficiency_factor <= 1.0, "{}", d.id);
    }
    for m in model_energy::all() {
        assert!(m.kwh_per_token > 0.0, "{} energy", m.id);
    }
    assert!(RACK_INFRA.total() > 0.0);
}
