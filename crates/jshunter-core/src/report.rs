//! 纯文本报告
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::findings::ScanResult;

/// 密钥段落标题（固定文本）
pub const SECRETS_HEADER: &str = "Hardcoded secrets:";

/// 按报告格式写出扫描结果
/// - 每个端点一行 `Endpoint: <match>`
/// - 存在密钥命中时：空行 + 标题 + 每行一个原始命中
pub fn write_report_to<W: Write>(out: &mut W, result: &ScanResult) -> io::Result<()> {
    for endpoint in &result.endpoints {
        writeln!(out, "Endpoint: {endpoint}")?;
    }
    if !result.secrets.is_empty() {
        writeln!(out)?;
        writeln!(out, "{SECRETS_HEADER}")?;
        for secret in &result.secrets {
            writeln!(out, "{secret}")?;
        }
    }
    Ok(())
}

/// 创建报告文件并写入（覆盖已有文件）
pub(crate) fn write_report(path: &Path, result: &ScanResult) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_report_to(&mut out, result)?;
    out.flush()
}
