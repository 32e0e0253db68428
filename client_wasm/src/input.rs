//! Keyboard input handling

use game_core::Game;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Extract key from keyboard event
pub fn get_key_from_event(event: &KeyboardEvent) -> String {
    event.key()
}

/// Forward window `keydown` events to the game for the rest of the session
pub fn listen_for_keys(game: Rc<RefCell<Game>>) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;

    let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let key = get_key_from_event(&event);
        if game.borrow_mut().handle_key(&key) {
            // Stop arrow keys from scrolling the page
            event.prevent_default();
        }
    });

    window
        .add_event_listener_with_callback(
            "keydown",
            on_key_down.as_ref().unchecked_ref::<js_sys::Function>(),
        )
        .map_err(|e| format!("Failed to add keydown listener: {:?}", e))?;

    // Listener lives as long as the page
    on_key_down.forget();
    Ok(())
}
