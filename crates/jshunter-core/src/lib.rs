//! 核心库：批量获取远程脚本，扫描接口端点与硬编码密钥，逐文件写出报告
//!
//! 设计要点：
//! - 固定大小的线程池作为令牌池限制同时在途的任务数，全部任务结束后才返回。
//! - 单个任务失败（获取、落盘、读取、写报告）只记录日志并放弃该任务，不影响其他任务。
//! - 扫描在原始字节上进行（`regex::bytes`），避免 UTF-8 解码失败导致漏检。
//! - 所有配置通过 `ScanOptions` 显式传入，不使用进程级全局状态。

mod options;
mod error;
mod types;
mod findings;
mod input;
mod rules;
mod detectors;
mod engine;
mod fetch;
mod report;
mod scan;

pub use options::{default_user_agent, ScanOptions, ScanStats, DEFAULT_CONCURRENCY, DEFAULT_DOWNLOAD_DIR, DEFAULT_OUTPUT_DIR};
pub use error::{JobError, RuleError};
pub use types::{file_name_for_url, find_name_collisions, Job, JobOutcome, JobReport};
pub use findings::ScanResult;
pub use input::{read_lines, read_patterns};
pub use rules::{load_secret_specs, RuleSpec};
pub use detectors::{DetectorSet, ENDPOINT_PATTERN, STATIC_URL_PATTERN};
pub use engine::scan_bytes;
pub use fetch::{FetchError, Fetched, Fetcher, HttpFetcher};
pub use report::{write_report_to, SECRETS_HEADER};
pub use scan::{scan_and_write, scan_jobs};
