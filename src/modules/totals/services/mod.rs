pub mod totals_aggregator;

pub use totals_aggregator::TotalsAggregator;
