use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use shopper::map::{Bounds, LatLng, MapOverlay, MAP_DEFAULTS};

#[wasm_bindgen]
extern "C" {
    type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(element_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue) -> LeafletMap;

    type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, html: &str) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(position: &JsValue) -> Layer;

    #[wasm_bindgen(extends = Layer)]
    type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_layer(this: &LayerGroup, layer: &Layer);

    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &LayerGroup);
}

fn lat_lng(point: LatLng) -> JsValue {
    Array::of2(&point.lat.into(), &point.lng.into()).into()
}

fn bounds(bounds: Bounds) -> JsValue {
    Array::of2(&lat_lng(bounds.south_west), &lat_lng(bounds.north_east)).into()
}

fn tile_options() -> Result<JsValue, JsValue> {
    let options = Object::new();
    Reflect::set(&options, &"maxZoom".into(), &MAP_DEFAULTS.max_zoom.into())?;
    Reflect::set(&options, &"attribution".into(), &MAP_DEFAULTS.attribution.into())?;
    Ok(options.into())
}

/// One Leaflet map with a single marker layer that is replaced per draw
pub struct MapWidget {
    map: LeafletMap,
    markers: LayerGroup,
}

impl MapWidget {
    /// Create the map inside `element_id`, centred on the default view
    pub fn attach(element_id: &str) -> Result<Self, JsValue> {
        let map = leaflet_map(element_id)?;
        map.set_view(&lat_lng(MAP_DEFAULTS.center), MAP_DEFAULTS.zoom);
        tile_layer(MAP_DEFAULTS.tile_url, &tile_options()?).add_to(&map);

        let markers = layer_group();
        markers.add_to(&map);

        Ok(Self { map, markers })
    }

    pub fn draw(&self, overlay: &MapOverlay) {
        self.markers.clear_layers();
        for marker_data in &overlay.markers {
            let layer = marker(&lat_lng(marker_data.position));
            layer.bind_popup(&marker_data.popup_html);
            self.markers.add_layer(&layer);
        }

        if let Some(fit) = overlay.bounds {
            self.map.fit_bounds(&bounds(fit));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn tile_options_carry_zoom_and_attribution() {
        let options = tile_options().unwrap();
        let max_zoom = Reflect::get(&options, &"maxZoom".into()).unwrap();
        assert_eq!(max_zoom.as_f64(), Some(f64::from(MAP_DEFAULTS.max_zoom)));
        let attribution = Reflect::get(&options, &"attribution".into()).unwrap();
        assert_eq!(attribution.as_string().as_deref(), Some(MAP_DEFAULTS.attribution));
    }
}
