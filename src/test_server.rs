//! 测试用的请求接收端：记录每个请求的方法和URL

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Default)]
pub(crate) struct SinkStats {
    connections: AtomicUsize,
    arrivals: AtomicUsize,
    requests: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    log: Mutex<Vec<(String, String)>>,
    // (到达序号, 该请求响应时已到达的请求数)
    completions: Mutex<Vec<(usize, usize)>>,
}

impl SinkStats {
    pub(crate) fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    pub(crate) fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub(crate) async fn requests_log(&self) -> Vec<(String, String)> {
        self.log.lock().await.clone()
    }

    /// 第`arrival`个到达的请求响应时，一共到达了多少个请求
    pub(crate) async fn arrivals_when_done(&self, arrival: usize) -> Option<usize> {
        self.completions
            .lock()
            .await
            .iter()
            .find(|(index, _)| *index == arrival)
            .map(|(_, seen)| *seen)
    }
}

struct SinkPlan {
    // 按到达顺序指定的延迟，超出部分使用`default_delay`
    delays: Vec<Duration>,
    default_delay: Duration,
    status: StatusCode,
}

pub(crate) struct SinkServer {
    pub(crate) addr: SocketAddr,
    pub(crate) stats: Arc<SinkStats>,
}

impl SinkServer {
    /// 每个请求先等待`delay`，再以`status`响应
    pub(crate) async fn start(delay: Duration, status: u16) -> SinkServer {
        Self::start_with_delays(Vec::new(), delay, status).await
    }

    pub(crate) async fn start_with_delays(
        delays: Vec<Duration>,
        default_delay: Duration,
        status: u16,
    ) -> SinkServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let stats = Arc::new(SinkStats::default());
        let plan = Arc::new(SinkPlan {
            delays,
            default_delay,
            status: StatusCode::from_u16(status).unwrap(),
        });
        let stats_clone = stats.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                stats_clone.connections.fetch_add(1, Ordering::SeqCst);
                let stats = stats_clone.clone();
                let plan = plan.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |req| handle(req, stats.clone(), plan.clone()));
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });
        SinkServer { addr, stats }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

async fn handle(
    req: Request<Incoming>,
    stats: Arc<SinkStats>,
    plan: Arc<SinkPlan>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let arrival = stats.arrivals.fetch_add(1, Ordering::SeqCst);
    let now = stats.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    stats.max_in_flight.fetch_max(now, Ordering::SeqCst);

    let delay = plan.delays.get(arrival).copied().unwrap_or(plan.default_delay);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let seen = stats.arrivals.load(Ordering::SeqCst);
    stats.completions.lock().await.push((arrival, seen));
    stats.log.lock().await.push((req.method().to_string(), req.uri().to_string()));
    stats.requests.fetch_add(1, Ordering::SeqCst);
    // 先减在途数，再返回响应，避免下一批请求被算进来
    stats.in_flight.fetch_sub(1, Ordering::SeqCst);

    let mut response = Response::new(Full::new(Bytes::from_static(b"ok")));
    *response.status_mut() = plan.status;
    Ok(response)
}

/// 一个没有监听者的本地地址
pub(crate) async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}
