//! 密钥规则加载（按行正则 或 TOML 规则文件）
use serde::Deserialize;
use std::path::Path;

use crate::error::RuleError;
use crate::input::read_patterns;

/// 单条规则的配置（支持 pattern 或 regex 字段）
#[derive(Debug, Clone, Deserialize)]
struct RuleEntry {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub regex: Option<String>,
}

/// 顶层规则文件结构
#[derive(Debug, Clone, Deserialize)]
struct RuleFile {
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

/// 归一化后的规则规格
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub id: String,
    pub name: Option<String>,
    pub pattern: String,
}

/// 加载密钥规则，保持文件中的顺序
/// - `.toml` 后缀：按 `[[rules]]` 表解析
/// - 其他：每个非空行原样作为一条正则，规则 id 为 `line-<序号>`
pub fn load_secret_specs(path: &Path) -> Result<Vec<RuleSpec>, RuleError> {
    let is_toml = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        let txt = std::fs::read_to_string(path)
            .map_err(|source| RuleError::Io { path: path.to_path_buf(), source })?;
        return parse_toml_specs(&txt)
            .map_err(|source| RuleError::Toml { path: path.to_path_buf(), source });
    }

    let lines = read_patterns(path).map_err(|source| RuleError::Io { path: path.to_path_buf(), source })?;
    Ok(lines
        .into_iter()
        .enumerate()
        .map(|(i, pattern)| RuleSpec { id: format!("line-{}", i + 1), name: None, pattern })
        .collect())
}

fn parse_toml_specs(txt: &str) -> Result<Vec<RuleSpec>, toml::de::Error> {
    let parsed: RuleFile = toml::from_str(txt)?;
    let mut out = Vec::new();

    for e in parsed.rules {
        // 兼容两种字段名：pattern 或 regex
        let pattern = match (e.pattern, e.regex) {
            (Some(p), _) => p,
            (None, Some(r)) => r,
            _ => continue,
        };
        out.push(RuleSpec { id: e.id, name: e.name, pattern });
    }

    Ok(out)
}
