//! 检测器集合：两条固定端点正则 + 调用方提供的密钥正则
use regex::bytes::Regex;

use crate::error::RuleError;
use crate::rules::RuleSpec;

// 两条固定正则均为 ASCII 模式（`(?-u)`）：`\s`、`\b` 只认 ASCII，
// 取反字符类按单字节匹配，非 UTF-8 字节不会截断命中。

/// 服务端接口路径：绝对 URL 或以 `/` 开头的路径，含服务端扩展名
pub const ENDPOINT_PATTERN: &str =
    r#"(?-u)(?:\bhttps?://|/)[^"'\\]*(?:\.json|\.php|\.aspx?|\.jsp|\.do|\.cgi|\.cfm|\.action)[^"'\\]*\b"#;

/// 静态资源 URL：绝对 URL，含静态扩展名
pub const STATIC_URL_PATTERN: &str =
    r#"(?-u)\bhttps?://[^\s"'\\]+(?:\.html|\.htm|\.js|\.css|\.xml|\.rss|\.atom|\.txt)[^"'\\]*\b"#;

/// 编译后的检测器集合（只读，跨线程共享）
#[derive(Debug)]
pub struct DetectorSet {
    /// 端点正则，顺序固定：服务端接口在前，静态资源在后
    pub(crate) endpoints: [Regex; 2],
    /// 密钥正则，保持规则文件中的顺序
    pub(crate) secrets: Vec<Regex>,
}

impl DetectorSet {
    /// 从规则条目构建检测器集合；任一正则无法编译即返回错误
    pub fn from_specs(specs: &[RuleSpec]) -> Result<Self, RuleError> {
        let endpoints = [compile("endpoint", ENDPOINT_PATTERN)?, compile("static-url", STATIC_URL_PATTERN)?];
        let secrets = specs
            .iter()
            .map(|r| compile(&r.id, &r.pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { endpoints, secrets })
    }

    /// 仅含端点检测（未提供密钥规则）
    pub fn endpoints_only() -> Result<Self, RuleError> {
        Self::from_specs(&[])
    }

    pub fn secret_rule_count(&self) -> usize {
        self.secrets.len()
    }
}

fn compile(id: &str, pat: &str) -> Result<Regex, RuleError> {
    Regex::new(pat).map_err(|source| RuleError::Pattern { id: id.to_string(), source })
}
