//! WASM entry point.

use crate::IdeaBoardApp;
use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};
use idea_board::{ClientConfig, Controller, HttpIdeaApi};
use wasm_bindgen::prelude::*;

/// Element id of the config script injected by the host.
const CONFIG_ELEMENT_ID: &str = "idea-board-config";

/// Runs futures on the browser event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpawner;

impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let config = read_config(&document).unwrap_or_else(ClientConfig::compiled);
        log::info!("Using ideas API at {}", config.api_url);

        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("Failed to find canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("Not a canvas element");

        let web_options = eframe::WebOptions::default();
        let api = HttpIdeaApi::new(&config);

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| {
                    let controller = Controller::new(api, BrowserSpawner);
                    Ok(Box::new(IdeaBoardApp::new(&cc.egui_ctx, controller)))
                }),
            )
            .await;

        // Remove the loading text
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Read the client config the host injected into the page.
fn read_config(document: &web_sys::Document) -> Option<ClientConfig> {
    let script = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    let json = script.text_content()?;
    match serde_json::from_str(&json) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("Ignoring malformed client config: {e}");
            None
        }
    }
}
