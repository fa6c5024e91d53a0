//! 错误类型
//!
//! 两级错误：
//! - 启动前的致命错误走 `anyhow`（见 `scan::run`）；
//! - 单个任务内的错误为 `JobError`，记录日志后放弃该任务的剩余步骤。
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 单个任务的失败原因（按流水线步骤划分）
#[derive(Debug, Error)]
pub enum JobError {
    #[error("cannot derive a file name from {url}")]
    NoFileName { url: String },

    #[error("error downloading {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("error creating file {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error saving file {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing report {}: {source}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl JobError {
    /// 失败发生的步骤名（用于结构化日志字段）
    pub fn step(&self) -> &'static str {
        match self {
            JobError::NoFileName { .. } => "name",
            JobError::Fetch { .. } => "fetch",
            JobError::CreateFile { .. } => "create",
            JobError::Save { .. } => "save",
            JobError::Read { .. } => "read",
            JobError::WriteReport { .. } => "report",
        }
    }

    /// 失败是否发生在获取成功之后
    pub fn after_fetch(&self) -> bool {
        !matches!(self, JobError::NoFileName { .. } | JobError::Fetch { .. })
    }
}

/// 规则加载 / 编译错误（致命）
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("failed to read rules file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse rules file {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid pattern for rule {id}: {source}")]
    Pattern {
        id: String,
        #[source]
        source: regex::Error,
    },
}
