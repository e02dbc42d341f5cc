// Trunk builds this binary for the browser and calls `wasm_start` on load.
// On any other target, or without `--features web`, there is nothing to run.

fn main() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    atlas_web::start();
}
