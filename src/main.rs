use clap::Parser;

use ai_compute_cost_toolbox::{app, config, i18n};

/// AI 컴퓨트 비용 계산 CLI.
#[derive(Debug, Parser)]
#[command(name = "ai_compute_cost_toolbox", version)]
struct Cli {
    /// 언어 코드 (ko/en/auto)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 언어팩 디렉터리 경로 (기본: locales/)
    #[arg(long)]
    locale_dir: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(&cfg.language));
    let tr = i18n::Translator::new_with_pack(&lang, cli.locale_dir.as_deref());
    app::run(&mut cfg, &tr)?;
    Ok(())
}
