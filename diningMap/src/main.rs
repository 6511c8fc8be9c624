use anyhow::Result;
use clap::Parser;
use tracing::info;

use dining_map::analysis::reporting;
use dining_map::cli::cli::Args;
use dining_map::data::registry::LocationRegistry;
use dining_map::geo::distance::distances_from;
use dining_map::publish::publisher::Publisher;
use dining_map::render::builder::build;
use dining_map::utils::logging::{self, OperationCategory};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    logging::init_logging(args.enable_timing(), args.debug_logging())?;

    let config = args.to_config();

    let registry = {
        let _timing = logging::start_timing("load_registry", OperationCategory::Registry);
        LocationRegistry::vt_dining_halls()?
    };
    info!(locations = registry.len(), "registry loaded");

    reporting::print_banner(&registry);
    reporting::print_locations(&registry);

    if let Some(origin) = args.origin() {
        reporting::print_distance_table(&distances_from(origin, &registry));
    }

    println!("\n🗺️  Creating interactive dining hall map...");
    let artifact = build(&registry, &config);

    let result = Publisher::from_config(&config).publish(&artifact)?;
    reporting::print_publish_result(&result.path, &result.viewer);
    reporting::print_usage(&result.viewer);

    logging::print_timing_report();

    Ok(())
}
