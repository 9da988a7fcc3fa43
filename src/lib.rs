// Offroad Race HUD - NUI page for the offroad race game mode

pub mod core;

#[cfg(not(target_arch = "wasm32"))]
pub mod host;

#[cfg(target_arch = "wasm32")]
mod web;
