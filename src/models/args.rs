use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// 目标地址
    pub url: String,

    /// 请求总数（小于等于0时为10000）
    #[arg(short = 'n', default_value_t = 0, allow_negative_numbers = true)]
    pub requests: i64,

    /// 并发数（小于等于0时为100）
    #[arg(short = 'c', default_value_t = 0, allow_negative_numbers = true)]
    pub concurrency: i64,

    /// 关闭keep-alive，每个请求新建连接
    #[arg(short = 'k', default_value_t = false)]
    pub disable_keep_alive: bool,

    /// 滑动窗口模式：完成一个立即补一个，不再整批等待
    #[arg(short = 'w', long = "window", default_value_t = false)]
    pub window: bool,

    /// 日志详细程度，可重复
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}
