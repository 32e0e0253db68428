//! Self-rescheduling `requestAnimationFrame` loop

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type FrameCallback = Closure<dyn FnMut()>;

fn request_animation_frame(callback: &FrameCallback) -> Result<i32, String> {
    web_sys::window()
        .ok_or_else(|| "No window".to_string())?
        .request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())
        .map_err(|e| format!("requestAnimationFrame failed: {:?}", e))
}

/// Call `frame` once before every repaint, forever.
///
/// The callback holds a handle to itself so it can re-register after each
/// frame; the cycle is never broken, which keeps the closure alive.
pub fn run_loop<F>(mut frame: F) -> Result<(), String>
where
    F: FnMut() + 'static,
{
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let self_ref = slot.clone();

    *slot.borrow_mut() = Some(Closure::new(move || {
        frame();

        if let Some(callback) = self_ref.borrow().as_ref() {
            if let Err(e) = request_animation_frame(callback) {
                log::error!("Stopping frame loop: {}", e);
            }
        }
    }));

    let first = slot.borrow();
    let callback = first
        .as_ref()
        .ok_or_else(|| "Frame callback missing".to_string())?;
    request_animation_frame(callback)?;
    Ok(())
}
