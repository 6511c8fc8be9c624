use std::path::PathBuf;

use clap::Parser;

use crate::config::map_config::MapConfig;
use crate::data::location::Coordinates;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate an interactive map of campus dining halls", long_about = None)]
pub struct Args {
    #[arg(short, long, help = "Directory to write the map into (default ~/Documents/VT_Dining_Maps)")]
    output_dir: Option<PathBuf>,

    #[arg(long, help = "Write the map without opening it in a browser", default_value_t = false)]
    no_open: bool,

    #[arg(long, value_name = "LAT,LON", help = "Print walking distances from this point")]
    from: Option<Coordinates>,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,
}

impl Args {
    pub fn origin(&self) -> Option<Coordinates> {
        self.from
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    /// Default configuration with these arguments applied on top.
    pub fn to_config(&self) -> MapConfig {
        let mut config = MapConfig::default();
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if self.no_open {
            config.open_viewer = false;
        }
        config
    }
}
