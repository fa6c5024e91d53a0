//! 单个任务的扫描结果

/// 扫描结果：端点命中与密钥命中（均保持命中顺序，不去重）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub endpoints: Vec<String>,
    pub secrets: Vec<String>,
}

