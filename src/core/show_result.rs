use crate::models::result::TestResult;

pub fn render_result(result: &TestResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", result.success_count));
    out.push_str(&format!("TPS: {:.2}\n", result.tps));
    out.push_str(&format!("Latency: {:.6} seconds\n", result.avg_latency));
    out.push_str(&format!(
        "Requests with error: {} ({:.2}%)\n",
        result.error_count, result.error_percentage
    ));
    out
}

pub fn show_result(result: &TestResult) {
    print!("{}", render_result(result));
}
