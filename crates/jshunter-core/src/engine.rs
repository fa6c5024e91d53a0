//! 字节级扫描引擎
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use regex::bytes::Regex;

use crate::detectors::DetectorSet;
use crate::findings::ScanResult;

/// 读取已下载的产物并扫描
pub(crate) fn scan_file(path: &Path, detectors: &DetectorSet) -> io::Result<ScanResult> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(scan_bytes(&buf, detectors))
}

/// 在原始字节上运行全部检测器
/// - 端点：服务端接口正则的全部命中，随后是静态资源正则的全部命中
/// - 密钥：按规则顺序，每条规则内按命中顺序（非重叠）
/// - 命中值以有损 UTF-8 转换输出，非 UTF-8 内容不会中断扫描
pub fn scan_bytes(buf: &[u8], detectors: &DetectorSet) -> ScanResult {
    let mut result = ScanResult::default();
    for re in &detectors.endpoints {
        collect(re, buf, &mut result.endpoints);
    }
    for re in &detectors.secrets {
        collect(re, buf, &mut result.secrets);
    }
    result
}

fn collect(re: &Regex, buf: &[u8], out: &mut Vec<String>) {
    out.extend(re.find_iter(buf).map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned()));
}
