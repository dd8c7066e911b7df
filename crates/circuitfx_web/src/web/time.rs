// `std::time::Instant::now()` panics on `wasm32-unknown-unknown`. `web-time`
// provides a browser-backed monotonic clock via `performance.now()`.
pub(super) use web_time::Instant;
