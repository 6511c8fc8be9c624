//! The viewer-side script embedded in the generated page.
//!
//! The body is kept as `&'static str` pieces and prefixed at build time with a
//! `DINING_MAP` settings object. `calculateDistance` and `walkMinutes` mirror
//! `geo::distance` and take their constants from those settings.

use serde_json::json;

use crate::config::constants::{
    EARTH_RADIUS_METERS, LABEL_ICON_ANCHOR, LABEL_ICON_SIZE, LOCATE_MAX_ZOOM, MIN_WALK_MINUTES,
    POPUP_MAX_WIDTH, WALKING_SPEED_M_PER_MIN,
};
use crate::config::map_config::MapConfig;
use crate::render::markers::{MarkerSpec, PLACEHOLDER_CLASS};
use crate::render::tiles::TileLayer;

/// Walking estimator shared by every page. Exposes `diningEstimator`.
pub const ESTIMATOR_SCRIPT: &str = r#"
var diningEstimator = (function (settings) {
  'use strict';

  function calculateDistance(lat1, lon1, lat2, lon2) {
    var R = settings.earthRadiusMeters;
    var phi1 = lat1 * Math.PI / 180;
    var phi2 = lat2 * Math.PI / 180;
    var deltaPhi = (lat2 - lat1) * Math.PI / 180;
    var deltaLambda = (lon2 - lon1) * Math.PI / 180;

    var a = Math.sin(deltaPhi / 2) * Math.sin(deltaPhi / 2) +
            Math.cos(phi1) * Math.cos(phi2) *
            Math.sin(deltaLambda / 2) * Math.sin(deltaLambda / 2);
    var c = 2 * Math.atan2(Math.sqrt(a), Math.sqrt(1 - a));

    return R * c;
  }

  function walkMinutes(meters) {
    return Math.max(settings.minWalkMinutes,
                    Math.round(meters / settings.walkingSpeedMetersPerMinute));
  }

  return { calculateDistance: calculateDistance, walkMinutes: walkMinutes };
})(DINING_MAP);
"#;

pub const VIEWER_SCRIPT: &str = r#"
(function () {
  'use strict';

  var settings = DINING_MAP;
  var userFix = null;

  function findLocation(key) {
    for (var i = 0; i < settings.locations.length; i++) {
      if (settings.locations[i].key === key) {
        return settings.locations[i];
      }
    }
    return null;
  }

  function appendLine(parent, heading, value) {
    var b = document.createElement('b');
    b.textContent = heading;
    parent.appendChild(b);
    parent.appendChild(document.createTextNode(value));
  }

  function renderDistance(placeholder, meters, minutes) {
    var panel = document.createElement('div');
    panel.className = 'distance-info';
    appendLine(panel, '📍 Distance from you:', ' ' + Math.round(meters) + ' meters');
    panel.appendChild(document.createElement('br'));
    appendLine(panel, '🚶 Walking time:', ' ~' + minutes + ' minutes');
    while (placeholder.firstChild) {
      placeholder.removeChild(placeholder.firstChild);
    }
    placeholder.appendChild(panel);
  }

  var map = L.map('map', {
    center: [settings.center.lat, settings.center.lon],
    zoom: settings.zoom
  });

  var baseLayers = {};
  settings.tiles.forEach(function (tile) {
    var layer = L.tileLayer(tile.url, { attribution: tile.attribution, maxZoom: 19 });
    if (tile.isDefault) {
      layer.addTo(map);
    }
    baseLayers[tile.name] = layer;
  });

  L.control.layers(baseLayers).addTo(map);
  L.control.scale().addTo(map);
  L.control.fullscreen({ position: 'topleft' }).addTo(map);
  L.control.locate({
    position: 'topleft',
    strings: settings.locate.strings,
    locateOptions: settings.locate.options
  }).addTo(map);

  settings.locations.forEach(function (loc) {
    var tooltip = document.createElement('span');
    tooltip.textContent = loc.tooltip;

    L.marker([loc.lat, loc.lon], {
      icon: L.AwesomeMarkers.icon({ icon: loc.icon, markerColor: loc.color, prefix: 'fa' })
    })
      .bindPopup(document.getElementById(settings.popupIdPrefix + loc.key),
                 { maxWidth: settings.popupMaxWidth })
      .bindTooltip(tooltip)
      .addTo(map);

    L.marker([loc.lat, loc.lon], {
      icon: L.divIcon({
        html: document.getElementById(settings.labelIdPrefix + loc.key),
        className: 'location-label-icon',
        iconSize: settings.labelIconSize,
        iconAnchor: settings.labelIconAnchor
      }),
      interactive: false,
      keyboard: false
    }).addTo(map);
  });

  window.addEventListener('load', function () {
    setTimeout(function () {
      map.on('locationfound', function (e) {
        userFix = e.latlng;
      });

      map.on('popupopen', function (e) {
        if (!userFix) {
          return;
        }
        var content = e.popup.getContent();
        if (!content || !content.dataset) {
          return;
        }
        var loc = findLocation(content.dataset.locationKey);
        var placeholder = content.querySelector('.' + settings.placeholderClass);
        if (!loc || !placeholder) {
          return;
        }
        var meters = diningEstimator.calculateDistance(userFix.lat, userFix.lng, loc.lat, loc.lon);
        renderDistance(placeholder, meters, diningEstimator.walkMinutes(meters));
      });
    }, settings.settleDelayMs);
  });
})();
"#;

/// Serializes the settings object the viewer script reads.
pub fn settings_json(config: &MapConfig, markers: &[MarkerSpec], tiles: &[TileLayer]) -> String {
    let settings = json!({
        "center": config.center,
        "zoom": config.zoom,
        "settleDelayMs": config.settle_delay_ms,
        "earthRadiusMeters": EARTH_RADIUS_METERS,
        "walkingSpeedMetersPerMinute": WALKING_SPEED_M_PER_MIN,
        "minWalkMinutes": MIN_WALK_MINUTES,
        "popupMaxWidth": POPUP_MAX_WIDTH,
        "popupIdPrefix": "popup-",
        "labelIdPrefix": "label-",
        "placeholderClass": PLACEHOLDER_CLASS,
        "labelIconSize": [LABEL_ICON_SIZE.0, LABEL_ICON_SIZE.1],
        "labelIconAnchor": [LABEL_ICON_ANCHOR.0, LABEL_ICON_ANCHOR.1],
        "tiles": tiles,
        "locate": {
            "strings": {
                "title": "📍 Show my location (for distance calc)",
                "popup": "You are here!",
            },
            "options": {
                "enableHighAccuracy": true,
                "watch": true,
                "setView": true,
                "maxZoom": LOCATE_MAX_ZOOM,
            },
        },
        "locations": markers,
    });
    script_safe(&settings.to_string())
}

/// Full script body: settings prelude, the estimator, then the viewer logic.
pub fn viewer_script(config: &MapConfig, markers: &[MarkerSpec], tiles: &[TileLayer]) -> String {
    format!(
        "var DINING_MAP = {};\n{}{}",
        settings_json(config, markers, tiles),
        ESTIMATOR_SCRIPT,
        VIEWER_SCRIPT
    )
}

// `</` can only appear inside JSON strings, where `<\/` decodes to the same text.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
