//! Canvas client for Pong
//!
//! Draws with the 2D canvas API and drives the game from
//! `requestAnimationFrame`.

mod canvas;
mod input;
mod logger;
mod scheduler;

use canvas::CanvasSurface;
use game_core::{Config, Game, Playfield};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Start the game on the given canvas
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init(log::LevelFilter::Info) {
        // Already installed by an earlier start()
        log::warn!("{}", e);
    }

    run(canvas).map_err(|e| {
        log::error!("Failed to start: {}", e);
        JsValue::from_str(&e)
    })
}

fn run(canvas: HtmlCanvasElement) -> Result<(), String> {
    let field = Playfield::with_size(canvas.width() as f32, canvas.height() as f32)?;
    let mut surface = CanvasSurface::from_canvas(&canvas)?;
    let game = Rc::new(RefCell::new(Game::new(field, Config::new())));

    input::listen_for_keys(game.clone())?;

    log::info!("Starting Pong on {}x{} canvas", field.width, field.height);
    scheduler::run_loop(move || {
        game.borrow_mut().tick(&mut surface);
    })
}
