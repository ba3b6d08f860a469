use std::sync::Arc;
use anyhow::Context;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// 滑动窗口的并发闸门，许可证随任务结束归还
pub struct ConcurrencyController {
    semaphore: Arc<Semaphore>,
    total_permits: usize,
}

impl ConcurrencyController {
    pub fn new(total_permits: usize) -> Self {
        ConcurrencyController {
            semaphore: Arc::new(Semaphore::new(total_permits)),
            total_permits,
        }
    }

    // 等待一个空位
    pub async fn acquire(&self) -> anyhow::Result<OwnedSemaphorePermit> {
        self.semaphore.clone().acquire_owned().await.context("获取并发许可失败")
    }

    // 当前在途数量
    pub fn in_flight(&self) -> usize {
        self.total_permits - self.semaphore.available_permits()
    }
}
