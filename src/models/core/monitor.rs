use serde::{Deserialize, Serialize};

/// Default directory name created inside a backend's output path.
pub const DEFAULT_JOB_NAME: &str = "DeepSpeedJobName";

/// Default WandB project name.
pub const DEFAULT_WANDB_PROJECT: &str = "deepspeed";

/// Options for the TensorBoard monitor.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TensorboardConfig {
    /// Whether logging to TensorBoard is enabled. The TensorBoard writer
    /// client must be available to the consuming application.
    pub enabled: bool,
    /// Path where the TensorBoard logs will be written. If not provided,
    /// the writer falls back to the training script's launching path.
    pub output_path: String,
    /// Name for the current job. Becomes a new directory inside `output_path`.
    pub job_name: String,
}

impl Default for TensorboardConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            output_path: String::new(),
            job_name: DEFAULT_JOB_NAME.to_string(),
        }
    }
}

/// Options for the WandB monitor.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WandbConfig {
    /// Whether logging to WandB is enabled. The WandB client must be
    /// available to the consuming application.
    pub enabled: bool,
    /// Name for the WandB group. Can be used to group together runs.
    pub group: Option<String>,
    /// Name for the WandB team.
    pub team: Option<String>,
    /// Name for the WandB project.
    pub project: String,
}

impl Default for WandbConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            group: None,
            team: None,
            project: DEFAULT_WANDB_PROJECT.to_string(),
        }
    }
}

/// Options for local CSV output of monitoring data.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CsvConfig {
    /// Whether logging to local CSV files is enabled.
    pub enabled: bool,
    /// Path where the csv files will be written. If not provided, the
    /// writer falls back to the training script's launching path.
    pub output_path: String,
    /// Name for the current job. Becomes a new directory inside `output_path`.
    pub job_name: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            output_path: String::new(),
            job_name: DEFAULT_JOB_NAME.to_string(),
        }
    }
}

/// Aggregate of the per-backend monitoring options.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    pub tensorboard: TensorboardConfig,
    pub wandb: WandbConfig,
    pub csv_monitor: CsvConfig,
}

impl MonitorConfig {
    /// Whether at least one monitoring backend is enabled.
    ///
    /// Derived from the sub-options on every call rather than stored, so
    /// it cannot drift from its inputs.
    pub fn enabled(&self) -> bool {
        self.tensorboard.enabled || self.wandb.enabled || self.csv_monitor.enabled
    }
}
