//! 扫描选项与统计信息（模块）
use std::path::PathBuf;
use std::time::Duration;

/// 默认并发令牌数
pub const DEFAULT_CONCURRENCY: usize = 10;
/// 默认报告目录
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// 默认下载目录
pub const DEFAULT_DOWNLOAD_DIR: &str = "downloaded_js";

/// 扫描选项（由 CLI 组装后一次性传入流水线，不使用全局状态）
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// URL 列表文件（每行一个）
    pub urls_path: PathBuf,
    /// 密钥规则文件；按行正则或 TOML 规则文件，可选
    pub secrets_path: Option<PathBuf>,
    /// 报告输出目录
    pub output_dir: PathBuf,
    /// 下载产物目录
    pub download_dir: PathBuf,
    /// 同时进行中的任务上限（令牌池容量）
    pub concurrency: usize,
    /// 单次请求超时；None 表示不设超时
    pub timeout: Option<Duration>,
    /// HTTP User-Agent
    pub user_agent: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            urls_path: PathBuf::new(),
            secrets_path: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            concurrency: DEFAULT_CONCURRENCY,
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

/// 默认 UA：`jshunter/<version>`
pub fn default_user_agent() -> String {
    format!("jshunter/{}", env!("CARGO_PKG_VERSION"))
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub jobs_total: usize,
    pub fetched: usize,
    pub reports_written: usize,
    pub failed: usize,
    pub endpoints_found: usize,
    pub secrets_found: usize,
}
