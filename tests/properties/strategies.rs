use deepspeed_monitor::models::{CsvConfig, TensorboardConfig, WandbConfig};
use proptest::{option, prelude::*};

prop_compose! {
	pub fn tensorboard_strategy()(
		enabled in any::<bool>(),
		output_path in "[a-z0-9/_]{0,20}",
		job_name in "[A-Za-z0-9_]{1,16}",
	) -> TensorboardConfig {
		TensorboardConfig { enabled, output_path, job_name }
	}
}

prop_compose! {
	pub fn wandb_strategy()(
		enabled in any::<bool>(),
		group in option::of("[a-z0-9_]{1,12}"),
		team in option::of("[a-z0-9_]{1,12}"),
		project in "[a-z0-9_]{1,16}",
	) -> WandbConfig {
		WandbConfig { enabled, group, team, project }
	}
}

prop_compose! {
	pub fn csv_strategy()(
		enabled in any::<bool>(),
		output_path in "[a-z0-9/_]{0,20}",
		job_name in "[A-Za-z0-9_]{1,16}",
	) -> CsvConfig {
		CsvConfig { enabled, output_path, job_name }
	}
}
