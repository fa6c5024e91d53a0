//! 远程脚本获取
//!
//! 流水线只依赖 `Fetcher` trait：生产环境使用基于 reqwest 阻塞客户端的 `HttpFetcher`，
//! 测试可替换为内存实现。
use std::io::Read;

use reqwest::blocking::Client;

use crate::options::ScanOptions;

/// 获取失败的底层错误（网络、TLS、URL 解析等）
pub type FetchError = Box<dyn std::error::Error + Send + Sync>;

/// 一次成功获取的响应：状态码 + 可流式读取的响应体
pub struct Fetched {
    pub status: u16,
    pub body: Box<dyn Read + Send>,
}

impl Fetched {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 获取器：在工作线程中被并发调用
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Fetched, FetchError>;
}

/// 基于 reqwest 阻塞客户端的 HTTP 获取器（自动跟随重定向）
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &ScanOptions) -> reqwest::Result<Self> {
        // timeout 为 None 时请求不设上限
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Fetched, FetchError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        Ok(Fetched { status, body: Box::new(resp) })
    }
}
