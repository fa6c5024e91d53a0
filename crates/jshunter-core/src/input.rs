//! 按行读取的输入列表（URL 列表、正则列表）
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// 读取按行分隔的列表文件
/// - 每行去除首尾空白（兼容 `\r\n`）
/// - 跳过空行与 `#` 开头的注释行
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    parse_lines(BufReader::new(file))
}

/// 读取按行分隔的正则列表：每行原样作为一条正则
/// - 只去掉行尾换行（含 `\r`），不裁剪空白，不识别注释
/// - 仅跳过空行
pub fn read_patterns(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    parse_patterns(BufReader::new(file))
}

pub(crate) fn parse_patterns<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() { continue; }
        out.push(line);
    }
    Ok(out)
}

pub(crate) fn parse_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') { continue; }
        out.push(trimmed.to_string());
    }
    Ok(out)
}
