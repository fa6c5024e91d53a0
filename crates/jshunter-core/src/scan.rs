//! 获取-扫描-写报告 主流程与并发调度
use anyhow::{bail, Context, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::detectors::DetectorSet;
use crate::engine::scan_file;
use crate::error::JobError;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::input::read_lines;
use crate::options::{ScanOptions, ScanStats};
use crate::report::write_report;
use crate::rules::load_secret_specs;
use crate::types::{find_name_collisions, Job, JobOutcome, JobReport};

/// 读取输入、准备目录并执行全部任务
/// 启动前的错误（输入列表不可读、正则非法、目录无法创建等）直接返回；
/// 单个任务的错误只记录日志，不影响返回值。
pub fn scan_and_write(opts: &ScanOptions) -> Result<ScanStats> {
    let urls = read_lines(&opts.urls_path)
        .with_context(|| format!("Error reading URLs file {}", opts.urls_path.display()))?;

    let specs = match &opts.secrets_path {
        Some(path) => load_secret_specs(path).context("Error reading secrets file")?,
        None => Vec::new(),
    };
    let detectors = DetectorSet::from_specs(&specs).context("Error compiling secret patterns")?;

    fs::create_dir_all(&opts.download_dir)
        .with_context(|| format!("create download directory {}", opts.download_dir.display()))?;
    fs::create_dir_all(&opts.output_dir)
        .with_context(|| format!("create output directory {}", opts.output_dir.display()))?;

    let fetcher = HttpFetcher::new(opts).context("build HTTP client")?;
    let jobs: Vec<Job> = urls.into_iter().map(Job::new).collect();

    info!(jobs = jobs.len(), secret_rules = detectors.secret_rule_count(), "loaded inputs");
    scan_jobs(&jobs, &detectors, &fetcher, opts)
}

/// 并行调度：
/// - 固定大小的 Rayon 线程池充当令牌池，所有任务一次性提交，按池容量排队执行
/// - 池的 scope 作为屏障，全部任务结束后才返回
/// - 工作线程通过通道把结果交给当前线程统一计数与记录日志
pub fn scan_jobs<F: Fetcher>(
    jobs: &[Job],
    detectors: &DetectorSet,
    fetcher: &F,
    opts: &ScanOptions,
) -> Result<ScanStats> {
    use crossbeam_channel as channel;

    if opts.concurrency == 0 {
        bail!("concurrency must be at least 1");
    }

    for (name, urls) in find_name_collisions(jobs) {
        warn!(file_name = name, ?urls, "multiple URLs share a file name; downloads and reports will overwrite each other");
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opts.concurrency)
        .thread_name(|i| format!("jshunter-worker-{i}"))
        .build()
        .context("build worker pool")?;

    let (tx, rx) = channel::unbounded::<JobOutcome>();
    let download_dir = opts.download_dir.as_path();
    let output_dir = opts.output_dir.as_path();

    let mut stats = ScanStats { jobs_total: jobs.len(), ..ScanStats::default() };

    std::thread::scope(|threads| {
        threads.spawn(move || {
            pool.scope(|s| {
                for job in jobs {
                    let tx = tx.clone();
                    s.spawn(move |_| {
                        let result = run_job(job, detectors, fetcher, download_dir, output_dir);
                        let _ = tx.send(JobOutcome { url: job.url.clone(), result });
                    });
                }
            });
            // 全部 Sender 在此之后被丢弃，Receiver 收到关闭信号
        });

        for outcome in rx.iter() {
            record_outcome(&mut stats, outcome);
        }
    });

    Ok(stats)
}

fn record_outcome(stats: &mut ScanStats, outcome: JobOutcome) {
    match outcome.result {
        Ok(report) => {
            stats.fetched += 1;
            stats.reports_written += 1;
            stats.endpoints_found += report.endpoints;
            stats.secrets_found += report.secrets;
            debug!(
                url = %outcome.url,
                status = report.status,
                download = %report.download_path.display(),
                report = %report.report_path.display(),
                endpoints = report.endpoints,
                secrets = report.secrets,
                "job finished"
            );
        }
        Err(e) => {
            if e.after_fetch() { stats.fetched += 1; }
            stats.failed += 1;
            error!(url = %outcome.url, step = e.step(), "{e}");
        }
    }
}

/// 单个任务：获取 → 落盘 → 读回扫描 → 写报告；任一步失败即放弃后续步骤
fn run_job<F: Fetcher>(
    job: &Job,
    detectors: &DetectorSet,
    fetcher: &F,
    download_dir: &Path,
    output_dir: &Path,
) -> Result<JobReport, JobError> {
    let name = job
        .file_name
        .as_deref()
        .ok_or_else(|| JobError::NoFileName { url: job.url.clone() })?;

    let mut fetched = fetcher
        .fetch(&job.url)
        .map_err(|source| JobError::Fetch { url: job.url.clone(), source })?;
    if !fetched.is_success() {
        warn!(url = %job.url, status = fetched.status, "non-success status; saving body anyway");
    }

    let download_path = download_dir.join(name);
    let file = File::create(&download_path)
        .map_err(|source| JobError::CreateFile { path: download_path.clone(), source })?;
    let mut out = BufWriter::new(file);
    io::copy(&mut fetched.body, &mut out)
        .and_then(|_| out.flush())
        .map_err(|source| JobError::Save { path: download_path.clone(), source })?;
    drop(out);

    let result = scan_file(&download_path, detectors)
        .map_err(|source| JobError::Read { path: download_path.clone(), source })?;

    let report_path = output_dir.join(format!("{name}.txt"));
    write_report(&report_path, &result)
        .map_err(|source| JobError::WriteReport { path: report_path.clone(), source })?;

    Ok(JobReport {
        download_path,
        report_path,
        status: fetched.status,
        endpoints: result.endpoints.len(),
        secrets: result.secrets.len(),
    })
}
