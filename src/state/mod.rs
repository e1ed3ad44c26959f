// State management module.
// Holds loaded dashboard data and per-view derived state.

pub mod console;
pub mod dashboard;
pub mod home;
pub mod metrics;

pub use console::{ConsoleLevel, ConsoleMessage, ConsoleState};
pub use dashboard::{DashboardData, LoadingState};
pub use home::{QuickStat, TodaySummary};
pub use metrics::{MetricSeries, SportMetrics};
