//! Web module - NUI page entry point
//!
//! Resolves the HUD regions from the page, then renders every `message`
//! event the game host posts to the window.

mod dom;
mod logging;
mod scheduler;

use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::MessageEvent;

use crate::core::config::HudConfig;
use crate::core::dispatcher::Dispatcher;
use crate::core::elements::HudElements;

use dom::WebRegion;
use scheduler::WebScheduler;

/// Configuration shipped with the page
const EMBEDDED_CONFIG: &str = include_str!("../../offroad_hud.toml");

fn load_config() -> HudConfig {
    HudConfig::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|e| {
        // Logging is not up yet
        web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
        HudConfig::default()
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let config = load_config();
    logging::init_logging(&config.logging);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    let elements = HudElements::resolve(&config.elements, |id| {
        document.get_element_by_id(id).map(WebRegion::from)
    })
    .map_err(|e| {
        error!(error = %e, "[nui] HUD page is incomplete");
        JsValue::from_str(&e.to_string())
    })?;

    let dispatcher = Dispatcher::new(elements, WebScheduler::new(window.clone()), &config);

    let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
        match js_sys::JSON::stringify(&event.data()) {
            Ok(raw) => {
                if let Some(raw) = raw.as_string() {
                    dispatcher.on_message(&raw);
                }
            }
            Err(e) => warn!(error = ?e, "[nui] Message data is not serializable"),
        }
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())?;
    on_message.forget();

    info!("[nui] HUD ready");
    Ok(())
}
