use log::{debug, error};
use reqwest::Client;

use crate::core::run_counters::RunCounters;

/// 发送一次GET请求并记录结果
///
/// 只有传输层失败算错误，4xx/5xx 也算成功
pub(crate) async fn send_request(client: &Client, url: &str, counters: &RunCounters) {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            // 读完响应体，连接才会被释放
            if let Err(e) = response.bytes().await {
                debug!("读取响应体失败: {}", e);
            }
            debug!("{} {}", status.as_u16(), url);
            counters.on_success();
        }
        Err(e) => {
            error!("Error making the request: {}", e);
            counters.on_error();
        }
    }
}
