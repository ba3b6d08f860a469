use std::sync::Arc;
use std::time::Instant;
use anyhow::Context;
use futures::future::join_all;
use log::{debug, info, warn};
use reqwest::Client;
use tokio::task::{JoinHandle, JoinSet};

use crate::core::concurrency_controller::ConcurrencyController;
use crate::core::http_client::build_client;
use crate::core::request_task::send_request;
use crate::core::run_counters::RunCounters;
use crate::models::config::{Config, DispatchPolicy};
use crate::models::result::TestResult;

pub async fn run(config: &Config) -> anyhow::Result<TestResult> {
    info!(
        "开始压测 {}: 请求数 {}, 并发数 {}, keep-alive {}, 模式 {:?}",
        config.url,
        config.total_requests,
        config.concurrency,
        !config.disable_keep_alive,
        config.policy
    );
    let client = build_client(config.disable_keep_alive)?;
    let url: Arc<str> = Arc::from(config.url.as_str());
    let counters = Arc::new(RunCounters::new());
    // 开始时间
    let test_start = Instant::now();
    match config.policy {
        DispatchPolicy::Wave => dispatch_waves(config, &client, &url, &counters).await?,
        DispatchPolicy::Window => dispatch_window(config, &client, &url, &counters).await?,
    }
    let elapsed = test_start.elapsed();

    let result = TestResult::new(counters.success_count(), counters.error_count(), elapsed);
    if result.is_degenerate() {
        warn!("没有成功的请求，TPS为0，平均延迟和错误率为非有限值");
    }
    Ok(result)
}

fn spawn_request(
    client: &Client,
    url: &Arc<str>,
    counters: &Arc<RunCounters>,
) -> JoinHandle<()> {
    let client = client.clone();
    let url = url.clone();
    let counters = counters.clone();
    tokio::spawn(async move { send_request(&client, &url, &counters).await })
}

// 等待已发起的任务全部完成
async fn drain(handles: &mut Vec<JoinHandle<()>>) -> anyhow::Result<()> {
    for joined in join_all(handles.drain(..)).await {
        joined.context("请求任务异常退出")?;
    }
    Ok(())
}

// 每发起`concurrency`个请求就整批等待完成
async fn dispatch_waves(
    config: &Config,
    client: &Client,
    url: &Arc<str>,
    counters: &Arc<RunCounters>,
) -> anyhow::Result<()> {
    let mut wave = Vec::with_capacity(config.concurrency.min(config.total_requests));
    for index in 0..config.total_requests {
        wave.push(spawn_request(client, url, counters));
        if (index + 1) % config.concurrency == 0 {
            drain(&mut wave).await?;
            let launched = index + 1;
            debug!("第{}批完成，已发起 {} 个请求", launched / config.concurrency, launched);
        }
    }
    drain(&mut wave).await
}

// 完成一个补一个，在途请求数不超过`concurrency`
async fn dispatch_window(
    config: &Config,
    client: &Client,
    url: &Arc<str>,
    counters: &Arc<RunCounters>,
) -> anyhow::Result<()> {
    let controller = ConcurrencyController::new(config.concurrency);
    let mut tasks = JoinSet::new();
    for index in 0..config.total_requests {
        let permit = controller.acquire().await?;
        // 回收已结束的任务
        while let Some(joined) = tasks.try_join_next() {
            joined.context("请求任务异常退出")?;
        }
        let client = client.clone();
        let url = url.clone();
        let counters = counters.clone();
        tasks.spawn(async move {
            send_request(&client, &url, &counters).await;
            drop(permit);
        });
        if (index + 1) % config.concurrency == 0 {
            debug!("已发起 {} 个请求，在途 {}", index + 1, controller.in_flight());
        }
    }
    while let Some(joined) = tasks.join_next().await {
        joined.context("请求任务异常退出")?;
    }
    Ok(())
}
