pub mod paths;

pub use paths::{default_config_path, dfc_home, tools_output_dir};
