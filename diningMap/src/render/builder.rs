use tracing::{debug, info};

use crate::config::map_config::MapConfig;
use crate::data::registry::LocationRegistry;
use crate::render::artifact::{page_style, MapArtifact};
use crate::render::markers::MarkerSpec;
use crate::render::script::viewer_script;
use crate::render::tiles::default_tile_layers;
use crate::utils::logging::{self, OperationCategory};

/// Compose the registry into a self-contained map page.
#[tracing::instrument(skip_all, fields(locations = registry.len()))]
pub fn build(registry: &LocationRegistry, config: &MapConfig) -> MapArtifact {
    let _timing = logging::start_timing("build_map_artifact", OperationCategory::Build);

    let markers: Vec<MarkerSpec> = registry
        .iter()
        .map(|location| {
            debug!(key = location.get_key(), name = location.get_name(), "adding marker");
            MarkerSpec::from_location(location)
        })
        .collect();

    let tile_layers = default_tile_layers();
    let script = viewer_script(config, &markers, &tile_layers);
    let style = page_style(&config.accent_color);

    info!(
        markers = markers.len(),
        tile_layers = tile_layers.len(),
        "map artifact built"
    );

    MapArtifact::new(
        config.page_title.clone(),
        config.branding_text.clone(),
        markers,
        tile_layers,
        style,
        script,
    )
}
