use crate::models::args::Args;

pub const DEFAULT_TOTAL_REQUESTS: usize = 10000;
pub const DEFAULT_CONCURRENCY: usize = 100;

/// 并发上限下的请求分发方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchPolicy {
    /// 每批发起`concurrency`个请求，整批完成后再发下一批
    #[default]
    Wave,
    /// 任意请求完成后立即补发一个
    Window,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub total_requests: usize,
    pub concurrency: usize,
    pub disable_keep_alive: bool,
    pub policy: DispatchPolicy,
}

impl Config {
    /// 小于等于0的数量使用默认值
    pub fn new(
        url: impl Into<String>,
        total_requests: i64,
        concurrency: i64,
        disable_keep_alive: bool,
    ) -> Self {
        Config {
            url: url.into(),
            total_requests: positive_or(total_requests, DEFAULT_TOTAL_REQUESTS),
            concurrency: positive_or(concurrency, DEFAULT_CONCURRENCY),
            disable_keep_alive,
            policy: DispatchPolicy::Wave,
        }
    }

    pub fn with_policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }
}

fn positive_or(value: i64, default: usize) -> usize {
    if value <= 0 {
        default
    } else {
        usize::try_from(value).unwrap_or(default)
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let policy = if args.window {
            DispatchPolicy::Window
        } else {
            DispatchPolicy::Wave
        };
        Config::new(args.url, args.requests, args.concurrency, args.disable_keep_alive)
            .with_policy(policy)
    }
}
