use lazy_static::lazy_static;
use prometheus::{register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec};

lazy_static! {
    pub static ref QUERY_TIME: HistogramVec = register_histogram_vec!(
        "blob_stats_query_time_seconds",
        "time spent reading a single stats or blob query",
        &["query"],
        vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0],
    )
    .unwrap();
    pub static ref QUERY_ERRORS: IntCounterVec = register_int_counter_vec!(
        "blob_stats_query_errors_total",
        "total failed stats or blob queries",
        &["query"],
    )
    .unwrap();
}
