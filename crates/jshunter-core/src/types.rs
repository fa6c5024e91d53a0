//! 任务与任务结果
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::JobError;

/// 单个任务：一个 URL 及由其末段路径得到的产物文件名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub url: String,
    pub file_name: Option<String>,
}

impl Job {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let file_name = file_name_for_url(&url);
        Self { url, file_name }
    }
}

/// 取 URL 最后一个 `/` 之后的部分作为文件名（先去掉末尾的 `/`）
/// - 不做规范化：查询串、片段原样保留
/// - 结果为空时返回 None
pub fn file_name_for_url(url: &str) -> Option<String> {
    let trimmed = url.trim_end_matches('/');
    let name = trimmed.rsplit('/').next().unwrap_or(trimmed);
    if name.is_empty() || name == "." || name == ".." { None } else { Some(name.to_string()) }
}

/// 产物文件名冲突：同名的 URL 列表（按文件名排序，便于日志稳定）
pub fn find_name_collisions(jobs: &[Job]) -> BTreeMap<&str, Vec<&str>> {
    let mut by_name: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for job in jobs {
        if let Some(name) = job.file_name.as_deref() {
            by_name.entry(name).or_default().push(&job.url);
        }
    }
    by_name.retain(|_, urls| urls.len() > 1);
    by_name
}

/// 工作线程 → 协调线程的任务结果
#[derive(Debug)]
pub struct JobOutcome {
    pub url: String,
    pub result: Result<JobReport, JobError>,
}

/// 成功任务的摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    pub download_path: PathBuf,
    pub report_path: PathBuf,
    pub status: u16,
    pub endpoints: usize,
    pub secrets: usize,
}
