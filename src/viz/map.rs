//! Interactive ship map rendered as a standalone Leaflet HTML document.
//!
//! Leaflet, Font Awesome and Leaflet.awesome-markers are pulled from public CDNs, the same
//! set a typical Python `folium` export references. Marker data is embedded as JSON and popups
//! are inserted as text nodes, so ship names are never interpreted as HTML.

use super::types::MapMarker;
use crate::models::{Dataset, UNKNOWN};
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Initial map view: centered on the origin, zoomed out to show most of the world.
pub const MAP_CENTER: (f64, f64) = (0.0, 0.0);
pub const MAP_ZOOM: u8 = 2;

/// Font Awesome glyph used for every marker.
pub const MARKER_ICON: &str = "ship";

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>Ships</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.css" />
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.2.0/css/all.min.css" />
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css" />
<script src="https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.js"></script>
<script src="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js"></script>
<style>
html, body { width: 100%; height: 100%; margin: 0; padding: 0; }
#ships-map { position: absolute; top: 0; bottom: 0; left: 0; right: 0; }
</style>
</head>
<body>
<div id="ships-map"></div>
<script>
"#;

const HTML_TAIL: &str = r#"
var map = L.map("ships-map", { center: center, zoom: zoom });
L.tileLayer("https://tile.openstreetmap.org/{z}/{x}/{y}.png", {
  maxZoom: 19,
  attribution: "&copy; OpenStreetMap contributors"
}).addTo(map);
ships.forEach(function (ship) {
  var popup = document.createElement("div");
  popup.textContent = ship.popup;
  L.marker([ship.lat, ship.lon], {
    icon: L.AwesomeMarkers.icon({ icon: icon, prefix: "fa", markerColor: "blue", iconColor: "white" })
  }).bindPopup(popup).addTo(map);
});
</script>
</body>
</html>
"#;

/// One marker per record that has both `LAT` and `LON`; popup = name or `"Unknown"`.
pub fn collect_markers(ds: &Dataset) -> Vec<MapMarker> {
    ds.records()
        .iter()
        .filter_map(|r| {
            let (lat, lon) = r.position()?;
            let popup = r
                .name()
                .map(|n| n.into_owned())
                .unwrap_or_else(|| UNKNOWN.to_string());
            Some(MapMarker { lat, lon, popup })
        })
        .collect()
}

/// JSON for embedding inside a `<script>` block: `</` is escaped so a name like
/// `"</script>"` cannot close the element early.
fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let s = serde_json::to_string(value).context("serialize map data")?;
    Ok(s.replace("</", "<\\/"))
}

/// Compose the complete HTML document for `markers`.
pub fn render_map_html(markers: &[MapMarker]) -> Result<String> {
    let mut html = String::with_capacity(HTML_HEAD.len() + HTML_TAIL.len() + markers.len() * 64);
    html.push_str(HTML_HEAD);
    html.push_str(&format!(
        "var center = [{:?}, {:?}];\nvar zoom = {};\nvar icon = {};\nvar ships = {};\n",
        MAP_CENTER.0,
        MAP_CENTER.1,
        MAP_ZOOM,
        script_json(MARKER_ICON)?,
        script_json(markers)?
    ));
    html.push_str(HTML_TAIL);
    Ok(html)
}

/// Render the dataset's ships to an HTML map at `out_path`. Returns the number of markers.
pub fn save_ship_map<P: AsRef<Path>>(ds: &Dataset, out_path: P) -> Result<usize> {
    let out_path = out_path.as_ref();
    let markers = collect_markers(ds);
    debug!(
        "placing {} markers ({} records without coordinates)",
        markers.len(),
        ds.len() - markers.len()
    );
    let html = render_map_html(&markers)?;
    fs::write(out_path, html).with_context(|| format!("writing {}", out_path.display()))?;
    Ok(markers.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_close_tag_in_name_is_escaped() {
        let m = [MapMarker {
            lat: 1.0,
            lon: 2.0,
            popup: "</script><b>x".into(),
        }];
        let html = render_map_html(&m).unwrap();
        assert!(!html.contains("</script><b>"));
        assert!(html.contains(r#"<\/script><b>x"#));
    }
}
