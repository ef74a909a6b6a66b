mod daily;
mod overall;

pub use daily::{
    daily_stats_query, day_start, format_day, get_daily_stats, BlobDailyStats, BlockDailyStats,
    DailyStatsSeries, TransactionDailyStats,
};
pub use overall::{
    get_overall_stats, BlobOverallStats, BlockOverallStats, OverallStats,
    TransactionOverallStats,
};
