use crate::config::Config;
use crate::cost::CostCalcError;
use crate::i18n::{keys, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 비용 계산 오류
    Cost(CostCalcError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Cost(e) => write!(f, "비용 계산 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<CostCalcError> for AppError {
    fn from(value: CostCalcError) -> Self {
        AppError::Cost(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
/// 계산 오류는 메시지만 출력하고 루프를 계속한다. 그 외 오류는 전파한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        let outcome = match ui_cli::main_menu(tr)? {
            MenuChoice::Acquisition => ui_cli::handle_acquisition(tr, config),
            MenuChoice::TokenEnergy => ui_cli::handle_token_energy(tr, config),
            MenuChoice::Operations => ui_cli::handle_operations(tr, config),
            MenuChoice::Catalogs => ui_cli::handle_catalogs(tr),
            MenuChoice::Settings => {
                let res = ui_cli::handle_settings(tr, config);
                config.save()?;
                res
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            Err(AppError::Cost(e)) => {
                println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            }
            Err(other) => return Err(other),
        }
    }
    Ok(())
}
