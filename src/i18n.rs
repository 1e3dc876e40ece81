use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const CLAMP_NOTICE: &str = "general.clamp_notice";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ACQUISITION: &str = "main_menu.acquisition";
    pub const MAIN_MENU_TOKEN_ENERGY: &str = "main_menu.token_energy";
    pub const MAIN_MENU_OPERATIONS: &str = "main_menu.operations";
    pub const MAIN_MENU_CATALOGS: &str = "main_menu.catalogs";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_UNKNOWN_ID: &str = "error.unknown_id";

    pub const PROMPT_GPU_ID: &str = "prompt.gpu_id";
    pub const PROMPT_GPU_COUNT: &str = "prompt.gpu_count";
    pub const PROMPT_SERVER_ID: &str = "prompt.server_id";
    pub const PROMPT_DEPLOYMENT_ID: &str = "prompt.deployment_id";
    pub const PROMPT_REGION_ID: &str = "prompt.region_id";
    pub const PROMPT_HARDWARE_ID: &str = "prompt.hardware_id";
    pub const PROMPT_NODE_COUNT: &str = "prompt.node_count";
    pub const PROMPT_UTILIZATION: &str = "prompt.utilization";
    pub const PROMPT_DEPRECIATION_YEARS: &str = "prompt.depreciation_years";
    pub const PROMPT_PUE: &str = "prompt.pue";
    pub const PROMPT_OPERATIONAL_DAYS: &str = "prompt.operational_days";
    pub const PROMPT_TOKEN_VOLUME: &str = "prompt.token_volume";
    pub const PROMPT_ENERGY_BASIS: &str = "prompt.energy_basis";
    pub const PROMPT_MODEL_ID: &str = "prompt.model_id";

    pub const ACQUISITION_HEADING: &str = "acquisition.heading";
    pub const ACQUISITION_GPU_COST: &str = "acquisition.gpu_cost";
    pub const ACQUISITION_SERVER_COST: &str = "acquisition.server_cost";
    pub const ACQUISITION_INFRA_COST: &str = "acquisition.infra_cost";
    pub const ACQUISITION_MAINTENANCE: &str = "acquisition.maintenance";
    pub const ACQUISITION_MULTIPLIER: &str = "acquisition.multiplier";
    pub const ACQUISITION_DEPRECIATION: &str = "acquisition.depreciation";
    pub const ACQUISITION_TOTAL: &str = "acquisition.total";

    pub const TOKEN_HEADING: &str = "token.heading";
    pub const TOKEN_BASE_KWH: &str = "token.base_kwh";
    pub const TOKEN_EFFECTIVE_KWH: &str = "token.effective_kwh";
    pub const TOKEN_ENERGY: &str = "token.energy";
    pub const TOKEN_COST: &str = "token.cost";
    pub const TOKEN_CARBON: &str = "token.carbon";
    pub const TOKEN_PER_1K: &str = "token.per_1k";
    pub const TOKEN_PER_1M: &str = "token.per_1m";

    pub const OPERATIONS_HEADING: &str = "operations.heading";
    pub const OPERATIONS_NODE_POWER: &str = "operations.node_power";
    pub const OPERATIONS_FACILITY_KW: &str = "operations.facility_kw";
    pub const OPERATIONS_RATE: &str = "operations.rate";
    pub const OPERATIONS_DAILY_ENERGY: &str = "operations.daily_energy";
    pub const OPERATIONS_DAILY_COST: &str = "operations.daily_cost";
    pub const OPERATIONS_DAILY_COOLING: &str = "operations.daily_cooling";
    pub const OPERATIONS_MONTHLY_COST: &str = "operations.monthly_cost";
    pub const OPERATIONS_ANNUAL_COST: &str = "operations.annual_cost";
    pub const OPERATIONS_ANNUAL_COOLING: &str = "operations.annual_cooling";
    pub const OPERATIONS_TOTAL: &str = "operations.total";
    pub const OPERATIONS_ANNUAL_ENERGY: &str = "operations.annual_energy";
    pub const OPERATIONS_CARBON: &str = "operations.carbon";

    pub const CATALOGS_HEADING: &str = "catalogs.heading";
    pub const CATALOGS_OPTIONS: &str = "catalogs.options";
    pub const CATALOGS_HARDWARE_HEADER: &str = "catalogs.hardware_header";
    pub const CATALOGS_SERVER_HEADER: &str = "catalogs.server_header";
    pub const CATALOGS_REGION_HEADER: &str = "catalogs.region_header";
    pub const CATALOGS_DEPLOYMENT_HEADER: &str = "catalogs.deployment_header";
    pub const CATALOGS_MODEL_HEADER: &str = "catalogs.model_header";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫/중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        CLAMP_NOTICE => "허용 범위를 벗어나 값을 조정했습니다:",
        MAIN_MENU_TITLE => "\n=== AI Compute Cost Toolbox ===",
        MAIN_MENU_ACQUISITION => "1) 하드웨어 도입 비용",
        MAIN_MENU_TOKEN_ENERGY => "2) 토큰 생성 전력 비용",
        MAIN_MENU_OPERATIONS => "3) 전력/운영 비용",
        MAIN_MENU_CATALOGS => "4) 카탈로그 조회",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_UNKNOWN_ID => "카탈로그에 없는 id입니다. 다시 입력하세요.",
        PROMPT_GPU_ID => "GPU id (ex: h100, a100, mi300x): ",
        PROMPT_GPU_COUNT => "GPU 수량 [개]: ",
        PROMPT_SERVER_ID => "서버 구성 id (ex: custom, dgx-h100): ",
        PROMPT_DEPLOYMENT_ID => "배치 유형 id (ex: onprem, colocation, cloud, edge): ",
        PROMPT_REGION_ID => "지역 id (ex: us, eu, nordics, apac): ",
        PROMPT_HARDWARE_ID => "하드웨어 id (ex: h100, a100): ",
        PROMPT_NODE_COUNT => "노드 수량 [대]: ",
        PROMPT_UTILIZATION => "가동률 [%] (1~100): ",
        PROMPT_DEPRECIATION_YEARS => "감가상각 기간 [년] (1~10): ",
        PROMPT_PUE => "PUE (1.0~3.0): ",
        PROMPT_OPERATIONAL_DAYS => "연간 운영일수 [일] (1~365): ",
        PROMPT_TOKEN_VOLUME => "토큰 생성량 [token]: ",
        PROMPT_ENERGY_BASIS => "토큰당 에너지 기준 (1=모델 벤치마크, 2=GPU 유도): ",
        PROMPT_MODEL_ID => "모델 id (ex: gpt-4, llama-3-70b): ",
        ACQUISITION_HEADING => "\n-- 하드웨어 도입 비용 --",
        ACQUISITION_GPU_COST => "GPU 구매 비용:",
        ACQUISITION_SERVER_COST => "서버 비용:",
        ACQUISITION_INFRA_COST => "인프라 비용:",
        ACQUISITION_MAINTENANCE => "연간 유지보수:",
        ACQUISITION_MULTIPLIER => "저가동률 배수:",
        ACQUISITION_DEPRECIATION => "연간 감가상각:",
        ACQUISITION_TOTAL => "총 비용:",
        TOKEN_HEADING => "\n-- 토큰 생성 전력 비용 --",
        TOKEN_BASE_KWH => "토큰당 기준 에너지:",
        TOKEN_EFFECTIVE_KWH => "토큰당 보정 에너지:",
        TOKEN_ENERGY => "총 에너지:",
        TOKEN_COST => "전력 비용:",
        TOKEN_CARBON => "탄소 배출량:",
        TOKEN_PER_1K => "1천 토큰당 비용:",
        TOKEN_PER_1M => "백만 토큰당 비용:",
        OPERATIONS_HEADING => "\n-- 전력/운영 비용 --",
        OPERATIONS_NODE_POWER => "노드당 실제 전력:",
        OPERATIONS_FACILITY_KW => "시설 전체 전력:",
        OPERATIONS_RATE => "적용 요금:",
        OPERATIONS_DAILY_ENERGY => "일간 에너지:",
        OPERATIONS_DAILY_COST => "일간 전력 비용:",
        OPERATIONS_DAILY_COOLING => "일간 냉각 비용:",
        OPERATIONS_MONTHLY_COST => "월간 전력 비용:",
        OPERATIONS_ANNUAL_COST => "연간 전력 비용:",
        OPERATIONS_ANNUAL_COOLING => "연간 냉각 비용:",
        OPERATIONS_TOTAL => "연간 총 운영 비용:",
        OPERATIONS_ANNUAL_ENERGY => "연간 에너지:",
        OPERATIONS_CARBON => "연간 탄소 배출량:",
        CATALOGS_HEADING => "\n-- 카탈로그 조회 --",
        CATALOGS_OPTIONS => "1) 하드웨어  2) 서버 구성  3) 지역  4) 배치 유형  5) 모델",
        CATALOGS_HARDWARE_HEADER => "id / 이름 / 전력[W] / 단가[USD] / 처리량[token/s]",
        CATALOGS_SERVER_HEADER => "id / 이름 / 가격[USD] / 포함 GPU[개]",
        CATALOGS_REGION_HEADER => "id / 이름 / 상업[USD/kWh] / 산업[USD/kWh] / 탄소[kg/kWh] / 냉각배수",
        CATALOGS_DEPLOYMENT_HEADER => "id / 이름 / 기본 PUE / 요금구분 / 오버헤드 / 효율",
        CATALOGS_MODEL_HEADER => "id / 이름 / 에너지[kWh/token]",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) auto",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어 설정이 변경되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        CLAMP_NOTICE => "Value outside the allowed range, clamped to:",
        MAIN_MENU_TITLE => "\n=== AI Compute Cost Toolbox ===",
        MAIN_MENU_ACQUISITION => "1) Hardware acquisition cost",
        MAIN_MENU_TOKEN_ENERGY => "2) Token electricity cost",
        MAIN_MENU_OPERATIONS => "3) Power & operations cost",
        MAIN_MENU_CATALOGS => "4) Browse catalogs",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_UNKNOWN_ID => "Unknown catalog id. Please try again.",
        PROMPT_GPU_ID => "GPU id (ex: h100, a100, mi300x): ",
        PROMPT_GPU_COUNT => "GPU count: ",
        PROMPT_SERVER_ID => "Server config id (ex: custom, dgx-h100): ",
        PROMPT_DEPLOYMENT_ID => "Deployment id (ex: onprem, colocation, cloud, edge): ",
        PROMPT_REGION_ID => "Region id (ex: us, eu, nordics, apac): ",
        PROMPT_HARDWARE_ID => "Hardware id (ex: h100, a100): ",
        PROMPT_NODE_COUNT => "Node count: ",
        PROMPT_UTILIZATION => "Utilization [%] (1-100): ",
        PROMPT_DEPRECIATION_YEARS => "Depreciation period [years] (1-10): ",
        PROMPT_PUE => "PUE (1.0-3.0): ",
        PROMPT_OPERATIONAL_DAYS => "Operational days per year (1-365): ",
        PROMPT_TOKEN_VOLUME => "Token volume [tokens]: ",
        PROMPT_ENERGY_BASIS => "Energy basis (1=model benchmark, 2=GPU-derived): ",
        PROMPT_MODEL_ID => "Model id (ex: gpt-4, llama-3-70b): ",
        ACQUISITION_HEADING => "\n-- Hardware Acquisition Cost --",
        ACQUISITION_GPU_COST => "GPU cost:",
        ACQUISITION_SERVER_COST => "Server cost:",
        ACQUISITION_INFRA_COST => "Infrastructure cost:",
        ACQUISITION_MAINTENANCE => "Annual maintenance:",
        ACQUISITION_MULTIPLIER => "Low-utilization multiplier:",
        ACQUISITION_DEPRECIATION => "Annual depreciation:",
        ACQUISITION_TOTAL => "Total cost:",
        TOKEN_HEADING => "\n-- Token Electricity Cost --",
        TOKEN_BASE_KWH => "Base energy per token:",
        TOKEN_EFFECTIVE_KWH => "Effective energy per token:",
        TOKEN_ENERGY => "Total energy:",
        TOKEN_COST => "Electricity cost:",
        TOKEN_CARBON => "Carbon emissions:",
        TOKEN_PER_1K => "Cost per 1K tokens:",
        TOKEN_PER_1M => "Cost per 1M tokens:",
        OPERATIONS_HEADING => "\n-- Power & Operations Cost --",
        OPERATIONS_NODE_POWER => "Actual power per node:",
        OPERATIONS_FACILITY_KW => "Total facility power:",
        OPERATIONS_RATE => "Applied rate:",
        OPERATIONS_DAILY_ENERGY => "Daily energy:",
        OPERATIONS_DAILY_COST => "Daily power cost:",
        OPERATIONS_DAILY_COOLING => "Daily cooling cost:",
        OPERATIONS_MONTHLY_COST => "Monthly power cost:",
        OPERATIONS_ANNUAL_COST => "Annual power cost:",
        OPERATIONS_ANNUAL_COOLING => "Annual cooling cost:",
        OPERATIONS_TOTAL => "Total annual operational cost:",
        OPERATIONS_ANNUAL_ENERGY => "Annual energy:",
        OPERATIONS_CARBON => "Annual carbon emissions:",
        CATALOGS_HEADING => "\n-- Catalogs --",
        CATALOGS_OPTIONS => "1) Hardware  2) Servers  3) Regions  4) Deployments  5) Models",
        CATALOGS_HARDWARE_HEADER => "id / name / power[W] / price[USD] / throughput[token/s]",
        CATALOGS_SERVER_HEADER => "id / name / price[USD] / bundled GPUs",
        CATALOGS_REGION_HEADER => {
            "id / name / commercial[USD/kWh] / industrial[USD/kWh] / carbon[kg/kWh] / cooling"
        }
        CATALOGS_DEPLOYMENT_HEADER => "id / name / default PUE / rate class / overhead / efficiency",
        CATALOGS_MODEL_HEADER => "id / name / energy[kWh/token]",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current language:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) auto",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language setting changed to:",
        _ => return None,
    })
}
