use std::sync::atomic::{AtomicU64, Ordering};

/// 一次压测中所有请求任务共享的结果计数
///
/// 每个任务恰好记录一次结果，计数只增不减
#[derive(Debug, Default)]
pub struct RunCounters {
    success: AtomicU64,
    errors: AtomicU64,
}

impl RunCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// 收到了响应，不论状态码
    #[inline]
    pub fn on_success(&self) {
        self.success.fetch_add(1, Ordering::Relaxed);
    }

    /// 收到响应之前就失败了
    #[inline]
    pub fn on_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn success_count(&self) -> u64 {
        self.success.load(Ordering::Relaxed)
    }

    pub fn error_count(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }
}
