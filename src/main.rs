//! label-verify 命令行入口
//! 申报信息来自参数或 JSON 文件，标签文本来自文本文件或经 Tesseract 识别的图片

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use label_verifier::{
    Claim, ConfigManager, GlobalConfig, LabelVerifier, TesseractRecognizer, VerificationReport,
};

#[derive(Debug, Parser)]
#[command(name = "label-verify", version, about = "Check declared label attributes against OCR text")]
struct Cli {
    /// 申报信息 JSON 文件（命令行字段会覆盖文件中的同名字段）
    #[arg(long)]
    claim: Option<PathBuf>,

    #[arg(long)]
    brand: Option<String>,

    #[arg(long)]
    product_type: Option<String>,

    /// 酒精度，如 "45%"
    #[arg(long)]
    abv: Option<String>,

    /// 净含量，如 "750 mL"
    #[arg(long)]
    net_contents: Option<String>,

    /// 已识别的标签文本文件
    #[arg(long, conflicts_with = "image", required_unless_present = "image")]
    ocr_text: Option<PathBuf>,

    /// 标签图片（调用 Tesseract 识别）
    #[arg(long)]
    image: Option<PathBuf>,

    /// Tesseract 可执行文件路径
    #[arg(long)]
    tesseract: Option<PathBuf>,

    /// OCR 识别语言
    #[arg(long)]
    lang: Option<String>,

    /// OCR 超时（秒）
    #[arg(long)]
    ocr_timeout: Option<u64>,

    /// 自定义单位规则 JSON 文件
    #[arg(long)]
    unit_rules: Option<PathBuf>,

    /// 以 JSON 输出报告
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn to_config(&self) -> GlobalConfig {
        let mut builder = ConfigManager::custom().verbose(self.verbose);
        if let Some(path) = &self.unit_rules {
            builder = builder.unit_rules_path(path.clone());
        }
        if let Some(cmd) = &self.tesseract {
            builder = builder.tesseract_cmd(cmd.clone());
        }
        if let Some(lang) = &self.lang {
            builder = builder.ocr_language(lang.clone());
        }
        if let Some(secs) = self.ocr_timeout {
            builder = builder.ocr_timeout(secs);
        }
        builder.build()
    }

    async fn load_claim(&self) -> anyhow::Result<Claim> {
        let claim = match &self.claim {
            Some(path) => {
                let data = tokio::fs::read(path)
                    .await
                    .with_context(|| format!("读取申报信息失败：{}", path.display()))?;
                serde_json::from_slice(&data)
                    .with_context(|| format!("申报信息JSON解析失败：{}", path.display()))?
            }
            None => Claim::default(),
        };
        Ok(self.apply_overrides(claim))
    }

    /// 命令行给出的字段覆盖 JSON 中的同名字段
    fn apply_overrides(&self, mut claim: Claim) -> Claim {
        if let Some(v) = &self.brand {
            claim.brand_name = v.clone();
        }
        if let Some(v) = &self.product_type {
            claim.product_type = v.clone();
        }
        if let Some(v) = &self.abv {
            claim.alcohol_content = v.clone();
        }
        if let Some(v) = &self.net_contents {
            claim.net_contents = v.clone();
        }
        claim
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &VerificationReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

async fn run(cli: &Cli, config: &GlobalConfig) -> anyhow::Result<bool> {
    let claim = cli.load_claim().await?;
    debug!("申报信息：{:?}", claim);

    let verifier = LabelVerifier::new(config).await.context("单位规则初始化失败")?;

    let report = match (&cli.ocr_text, &cli.image) {
        (Some(path), _) => {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("读取OCR文本失败：{}", path.display()))?;
            verifier.verify(&claim, &text)
        }
        (None, Some(image)) => {
            let recognizer = TesseractRecognizer::new(config);
            verifier.verify_image(&recognizer, &claim, image).await?
        }
        (None, None) => bail!("必须提供 --ocr-text 或 --image"),
    };

    print_report(&report, cli.json)?;
    Ok(report.overall_match())
}

/// 退出码：0 通过，1 存在不匹配字段，2 出错
fn exit_status(result: &anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.to_config();
    init_tracing(config.verbose);

    let result = run(&cli, &config).await;
    if let Err(e) = &result {
        eprintln!("错误：{:#}", e);
    }
    ExitCode::from(exit_status(&result))
}
