use anyhow::{Context, Result};
use clap::Parser;
use jshunter_core::{
    default_user_agent, scan_and_write, ScanOptions, DEFAULT_CONCURRENCY, DEFAULT_DOWNLOAD_DIR, DEFAULT_OUTPUT_DIR,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "jshunter", version, about = "Download JavaScript files and hunt for API endpoints and hardcoded secrets")]
struct Cli {
    /// Path to the file containing .js URLs
    #[arg(long)]
    urls: PathBuf,

    /// Path to the file containing regex patterns for hardcoded secrets (one per line, or a .toml rule file)
    #[arg(long)]
    secrets: Option<PathBuf>,

    /// Path to the output directory
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Path to the directory where the downloaded .js files will be stored
    #[arg(long, default_value = DEFAULT_DOWNLOAD_DIR)]
    download: PathBuf,

    /// Maximum number of URLs processed at the same time
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    timeout: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long)]
    user_agent: Option<String>,
}

/// 支持单横线长参数（`-urls x`、`-urls=x`），与双横线写法等价
const LONG_FLAGS: &[&str] = &["urls", "secrets", "output", "download", "concurrency", "timeout", "user-agent", "help", "version"];

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse_from(normalize_flags(std::env::args_os()));

    let opts = ScanOptions {
        urls_path: cli.urls,
        secrets_path: cli.secrets,
        output_dir: cli.output,
        download_dir: cli.download,
        concurrency: cli.concurrency,
        timeout: cli.timeout.map(Duration::from_secs),
        user_agent: cli.user_agent.unwrap_or_else(default_user_agent),
    };
    info!(urls = ?opts.urls_path, output = ?opts.output_dir, download = ?opts.download_dir, concurrency = opts.concurrency, "starting scan");

    let stats = scan_and_write(&opts).context("scan failed")?;

    info!(
        jobs = stats.jobs_total,
        fetched = stats.fetched,
        reports_written = stats.reports_written,
        failed = stats.failed,
        endpoints = stats.endpoints_found,
        secrets = stats.secrets_found,
        "scan finished"
    );
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr；RUST_LOG 未设置时默认 info
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 把 `-name` / `-name=value` 改写为 `--name` / `--name=value`；遇到 `--` 后不再改写
fn normalize_flags<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let mut out = Vec::new();
    let mut passthrough = false;
    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(s) if s.starts_with('-') && !s.starts_with("--") => {
                let name = s[1..].split('=').next().unwrap_or_default();
                LONG_FLAGS.contains(&name).then(|| OsString::from(format!("-{s}")))
            }
            _ => None,
        };
        out.push(rewritten.unwrap_or(arg));
    }
    out
}
