use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, CONNECTION, USER_AGENT};
use reqwest::Client;

pub(crate) fn user_agent() -> String {
    let info = os_info::get();
    format!(
        "{}/{} ({}; {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        info.os_type(),
        info.version()
    )
}

/// 构建一次压测内所有请求共享的客户端
///
/// 关闭keep-alive时不保留空闲连接，并要求服务端在响应后关闭连接
pub(crate) fn build_client(disable_keep_alive: bool) -> anyhow::Result<Client> {
    let mut headers = HeaderMap::new();
    let agent = HeaderValue::from_str(&user_agent()).context("构建user-agent失败")?;
    headers.insert(USER_AGENT, agent);
    let mut builder = Client::builder();
    if disable_keep_alive {
        headers.insert(CONNECTION, HeaderValue::from_static("close"));
        builder = builder.pool_max_idle_per_host(0);
    }
    builder.default_headers(headers).build().context("构建http客户端失败")
}
