use std::time::Duration;

#[derive(Debug)]
#[derive(Clone)]
pub struct TestResult {
    pub total_requests: u64,
    pub success_count: u64,
    pub error_count: u64,
    /// 从开始分发到最后一个请求完成的秒数
    pub elapsed: f64,
    pub tps: f64,
    /// `elapsed / success_count`，是吞吐量的倒数，并非单个请求实测的延迟
    pub avg_latency: f64,
    /// 错误数 / 成功数
    pub error_percentage: f64,
    /// 错误数 / 请求总数
    pub error_rate_of_attempts: f64,
}

impl TestResult {
    /// 成功数为0时按浮点除法得到`inf`/`NaN`
    pub fn new(success_count: u64, error_count: u64, elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        let success = success_count as f64;
        let errors = error_count as f64;
        let total_requests = success_count + error_count;
        TestResult {
            total_requests,
            success_count,
            error_count,
            elapsed: secs,
            tps: success / secs,
            avg_latency: secs / success,
            error_percentage: errors / success * 100.0,
            error_rate_of_attempts: errors / total_requests as f64 * 100.0,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.success_count == 0
    }
}
