use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// A pending `requestAnimationFrame` callback, cancelled if dropped before
/// it fires.
pub struct AnimationFrame {
    id: i32,
    _callback: Closure<dyn FnMut(f64)>,
}

impl AnimationFrame {
    pub fn request<F>(callback: F) -> Option<Self>
    where
        F: FnOnce(f64) + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::once(callback);
        let id = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("requestAnimationFrame failed: {:?}", e))
            .ok()?;
        Some(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}
