pub mod aggregator;
pub mod category;
pub mod latest;
pub mod row;
pub mod window;
