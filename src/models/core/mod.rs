mod monitor;

pub use monitor::{CsvConfig, MonitorConfig, TensorboardConfig, WandbConfig};
