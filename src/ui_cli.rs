use std::io::{self, Write};

use crate::app::AppError;
use crate::bounds::{self, Bound};
use crate::catalog::{deployment, hardware, model_energy, region, server, RateClass};
use crate::config::Config;
use crate::cost::{
    compute_acquisition, compute_operations, compute_token_energy, AcquisitionInput, EnergyBasis,
    OperationsInput, TokenEnergyInput,
};
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Acquisition,
    TokenEnergy,
    Operations,
    Catalogs,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ACQUISITION));
    println!("{}", tr.t(keys::MAIN_MENU_TOKEN_ENERGY));
    println!("{}", tr.t(keys::MAIN_MENU_OPERATIONS));
    println!("{}", tr.t(keys::MAIN_MENU_CATALOGS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Acquisition),
            "2" => return Ok(MenuChoice::TokenEnergy),
            "3" => return Ok(MenuChoice::Operations),
            "4" => return Ok(MenuChoice::Catalogs),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 하드웨어 도입 비용 메뉴를 처리한다.
pub fn handle_acquisition(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ACQUISITION_HEADING));
    let gpu = read_entry(tr, keys::PROMPT_GPU_ID, "h100", hardware::find_hardware)?;
    let gpu_count = read_bounded(tr, keys::PROMPT_GPU_COUNT, bounds::GPU_COUNT, 8.0)? as u32;
    let server = read_entry(tr, keys::PROMPT_SERVER_ID, "custom", server::find_server)?;
    let deployment = read_entry(
        tr,
        keys::PROMPT_DEPLOYMENT_ID,
        &cfg.defaults.deployment,
        deployment::find_deployment,
    )?;
    let depreciation_years = read_bounded(
        tr,
        keys::PROMPT_DEPRECIATION_YEARS,
        bounds::DEPRECIATION_YEARS,
        cfg.defaults.depreciation_years as f64,
    )? as u32;
    let utilization_pct = read_bounded(
        tr,
        keys::PROMPT_UTILIZATION,
        bounds::UTILIZATION_PCT,
        cfg.defaults.utilization_pct,
    )?;

    let result = compute_acquisition(&AcquisitionInput {
        gpu_id: gpu.id.to_string(),
        gpu_count,
        server_id: server.id.to_string(),
        deployment_id: deployment.id.to_string(),
        depreciation_years,
        utilization_pct,
    })?;

    println!("{} {:.2} USD", tr.t(keys::ACQUISITION_GPU_COST), result.gpu_cost_usd);
    println!("{} {:.2} USD", tr.t(keys::ACQUISITION_SERVER_COST), result.server_cost_usd);
    println!(
        "{} {:.2} USD",
        tr.t(keys::ACQUISITION_INFRA_COST),
        result.infrastructure_cost_usd
    );
    println!(
        "{} {:.2} USD",
        tr.t(keys::ACQUISITION_MAINTENANCE),
        result.annual_maintenance_usd
    );
    println!(
        "{} x{:.2}",
        tr.t(keys::ACQUISITION_MULTIPLIER),
        result.utilization_multiplier
    );
    println!(
        "{} {:.2} USD",
        tr.t(keys::ACQUISITION_DEPRECIATION),
        result.annual_depreciation_usd
    );
    println!("{} {:.2} USD", tr.t(keys::ACQUISITION_TOTAL), result.total_cost_usd);
    Ok(())
}

/// 토큰 생성 전력 비용 메뉴를 처리한다.
pub fn handle_token_energy(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TOKEN_HEADING));
    let basis = loop {
        let sel = read_line(tr.t(keys::PROMPT_ENERGY_BASIS))?;
        match sel.trim() {
            "1" => {
                let model = read_entry(tr, keys::PROMPT_MODEL_ID, "gpt-4", model_energy::find_model)?;
                break EnergyBasis::Model(model.id.to_string());
            }
            "2" => {
                let gpu = read_entry(tr, keys::PROMPT_GPU_ID, "h100", hardware::find_hardware)?;
                break EnergyBasis::Gpu(gpu.id.to_string());
            }
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };
    let deployment = read_entry(
        tr,
        keys::PROMPT_DEPLOYMENT_ID,
        &cfg.defaults.deployment,
        deployment::find_deployment,
    )?;
    let pue = read_bounded(tr, keys::PROMPT_PUE, bounds::PUE, deployment.default_pue)?;
    let region = read_entry(tr, keys::PROMPT_REGION_ID, &cfg.defaults.region, region::find_region)?;
    let token_volume = read_bounded(
        tr,
        keys::PROMPT_TOKEN_VOLUME,
        bounds::TOKEN_VOLUME,
        cfg.defaults.token_volume,
    )?;

    let result = compute_token_energy(&TokenEnergyInput {
        basis,
        deployment_id: deployment.id.to_string(),
        pue,
        region_id: region.id.to_string(),
        token_volume,
    })?;

    println!(
        "{} {:.6} kWh/token",
        tr.t(keys::TOKEN_BASE_KWH),
        result.base_kwh_per_token
    );
    println!(
        "{} {:.6} kWh/token",
        tr.t(keys::TOKEN_EFFECTIVE_KWH),
        result.effective_kwh_per_token
    );
    println!("{} {:.2} kWh", tr.t(keys::TOKEN_ENERGY), result.energy_kwh);
    println!("{} {:.2} USD", tr.t(keys::TOKEN_COST), result.electricity_cost_usd);
    println!("{} {:.2} kg CO₂e", tr.t(keys::TOKEN_CARBON), result.carbon_kg);
    println!("{} {:.4} USD", tr.t(keys::TOKEN_PER_1K), result.cost_per_1k_tokens_usd);
    println!("{} {:.2} USD", tr.t(keys::TOKEN_PER_1M), result.cost_per_1m_tokens_usd);
    Ok(())
}

/// 전력/운영 비용 메뉴를 처리한다.
pub fn handle_operations(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::OPERATIONS_HEADING));
    let hardware = read_entry(tr, keys::PROMPT_HARDWARE_ID, "h100", hardware::find_hardware)?;
    let node_count = read_bounded(tr, keys::PROMPT_NODE_COUNT, bounds::NODE_COUNT, 8.0)? as u32;
    let utilization_pct = read_bounded(
        tr,
        keys::PROMPT_UTILIZATION,
        bounds::UTILIZATION_PCT,
        cfg.defaults.utilization_pct,
    )?;
    let region = read_entry(tr, keys::PROMPT_REGION_ID, &cfg.defaults.region, region::find_region)?;
    let deployment = read_entry(
        tr,
        keys::PROMPT_DEPLOYMENT_ID,
        &cfg.defaults.deployment,
        deployment::find_deployment,
    )?;
    // 프롬프트에서 검증된 배치 유형이므로 기본 PUE는 항상 카탈로그 값이다.
    let pue = read_bounded(tr, keys::PROMPT_PUE, bounds::PUE, deployment.default_pue)?;
    let operational_days = read_bounded(
        tr,
        keys::PROMPT_OPERATIONAL_DAYS,
        bounds::OPERATIONAL_DAYS,
        cfg.defaults.operational_days as f64,
    )? as u32;

    let result = compute_operations(&OperationsInput {
        hardware_id: hardware.id.to_string(),
        node_count,
        utilization_pct,
        region_id: region.id.to_string(),
        deployment_id: deployment.id.to_string(),
        pue,
        operational_days,
    })?;

    println!(
        "{} {:.1} W",
        tr.t(keys::OPERATIONS_NODE_POWER),
        result.actual_power_w_per_node
    );
    println!(
        "{} {:.3} kW",
        tr.t(keys::OPERATIONS_FACILITY_KW),
        result.total_facility_kw
    );
    println!("{} {:.3} USD/kWh", tr.t(keys::OPERATIONS_RATE), result.rate_usd_per_kwh);
    println!(
        "{} {:.2} kWh",
        tr.t(keys::OPERATIONS_DAILY_ENERGY),
        result.daily_energy_kwh
    );
    println!(
        "{} {:.2} USD",
        tr.t(keys::OPERATIONS_DAILY_COST),
        result.daily_power_cost_usd
    );
    println!(
        "{} {:.2} USD",
        tr.t(keys::OPERATIONS_DAILY_COOLING),
        result.daily_cooling_cost_usd
    );
    println!(
        "{} {:.2} USD",
        tr.t(keys::OPERATIONS_MONTHLY_COST),
        result.monthly_power_cost_usd
    );
    println!(
        "{} {:.2} USD",
        tr.t(keys::OPERATIONS_ANNUAL_COST),
        result.annual_power_cost_usd
    );
    println!(
        "{} {:.2} USD",
        tr.t(keys::OPERATIONS_ANNUAL_COOLING),
        result.annual_cooling_cost_usd
    );
    println!(
        "{} {:.2} USD",
        tr.t(keys::OPERATIONS_TOTAL),
        result.total_operational_cost_usd
    );
    println!(
        "{} {:.2} kWh",
        tr.t(keys::OPERATIONS_ANNUAL_ENERGY),
        result.annual_energy_kwh
    );
    println!(
        "{} {:.2} kg CO₂e",
        tr.t(keys::OPERATIONS_CARBON),
        result.annual_carbon_kg
    );
    Ok(())
}

/// 카탈로그 조회 메뉴를 처리한다.
pub fn handle_catalogs(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CATALOGS_HEADING));
    println!("{}", tr.t(keys::CATALOGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            println!("{}", tr.t(keys::CATALOGS_HARDWARE_HEADER));
            for h in hardware::all() {
                let price = h
                    .price_usd
                    .map(|p| format!("{p:.0}"))
                    .unwrap_or_else(|| "-".into());
                let tps = h
                    .tokens_per_second
                    .map(|t| format!("{t:.0}"))
                    .unwrap_or_else(|| "-".into());
                println!("{} / {} / {:.0} / {} / {}", h.id, h.name, h.power_watts, price, tps);
            }
        }
        "2" => {
            println!("{}", tr.t(keys::CATALOGS_SERVER_HEADER));
            for s in server::all() {
                println!("{} / {} / {:.0} / {}", s.id, s.name, s.price_usd, s.bundled_gpus);
            }
        }
        "3" => {
            println!("{}", tr.t(keys::CATALOGS_REGION_HEADER));
            for r in region::all() {
                println!(
                    "{} / {} / {:.2} / {:.2} / {:.2} / {:.2}",
                    r.id,
                    r.name,
                    r.commercial_rate_usd_per_kwh,
                    r.industrial_rate_usd_per_kwh,
                    r.carbon_kg_per_kwh,
                    r.cooling_multiplier
                );
            }
        }
        "4" => {
            println!("{}", tr.t(keys::CATALOGS_DEPLOYMENT_HEADER));
            for d in deployment::all() {
                let rate_class = match d.rate_class {
                    RateClass::Commercial => "commercial",
                    RateClass::Industrial => "industrial",
                };
                println!(
                    "{} / {} / {:.1} / {} / {:.2} / {:.2}",
                    d.id, d.name, d.default_pue, rate_class, d.overhead_fraction, d.efficiency_factor
                );
            }
        }
        "5" => {
            println!("{}", tr.t(keys::CATALOGS_MODEL_HEADER));
            for m in model_energy::all() {
                println!("{} / {} / {:.5}", m.id, m.name, m.kwh_per_token);
            }
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.language = match sel.trim() {
        "1" => "ko".into(),
        "2" => "en".into(),
        "3" => "auto".into(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 입력 문자열로 카탈로그 레코드를 찾는다. 빈 입력이면 기본 키를 쓴다.
fn resolve_entry<'a, T>(
    raw: &str,
    default_key: &str,
    find: impl Fn(&str) -> Option<&'a T>,
) -> Option<&'a T> {
    let trimmed = raw.trim();
    let key = if trimmed.is_empty() { default_key } else { trimmed };
    find(key)
}

/// 카탈로그에 있는 id가 나올 때까지 입력을 받는다.
fn read_entry<'a, T>(
    tr: &Translator,
    prompt_key: &str,
    default_key: &str,
    find: impl Fn(&str) -> Option<&'a T>,
) -> Result<&'a T, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        if let Some(entry) = resolve_entry(&s, default_key, &find) {
            return Ok(entry);
        }
        println!("{}", tr.t(keys::ERROR_UNKNOWN_ID));
    }
}

/// 숫자를 읽어 허용 범위로 클램프한다. 빈 입력이면 기본값을 쓴다.
/// NaN/무한대는 숫자로 취급하지 않고 다시 입력받는다.
fn read_bounded(
    tr: &Translator,
    prompt_key: &str,
    bound: Bound,
    default: f64,
) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(bound.clamp(default));
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => {
                let clamped = bound.clamp(v);
                if clamped != v {
                    println!("{} {clamped}", tr.t(keys::CLAMP_NOTICE));
                }
                return Ok(clamped);
            }
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_entry_uses_default_key_only_when_blank() {
        let dep = resolve_entry("  ", "onprem", deployment::find_deployment).expect("default id");
        assert_eq!(dep.id, "onprem");
        let cloud = resolve_entry("CLOUD", "onprem", deployment::find_deployment).expect("explicit id");
        assert_eq!(cloud.id, "cloud");
        assert!((cloud.default_pue - 1.1).abs() < 1e-12);
    }

    #[test]
    fn resolve_entry_rejects_unknown_ids() {
        assert!(resolve_entry("mainframe", "onprem", deployment::find_deployment).is_none());
        assert!(resolve_entry("voodoo2", "h100", hardware::find_hardware).is_none());
    }
}
