//! Pointer input handling

/// Convert a window-space pointer `y` to playfield space, given the top of
/// the canvas' bounding rect in the same window space.
pub fn pointer_local_y(client_y: f64, canvas_top: f64) -> f32 {
    (client_y - canvas_top) as f32
}

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::pointer_local_y;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    /// Extract the playfield-local pointer `y` from a mouse event on `canvas`
    pub fn get_pointer_y_from_event(event: &MouseEvent, canvas: &HtmlCanvasElement) -> f32 {
        let rect = canvas.get_bounding_client_rect();
        pointer_local_y(event.client_y() as f64, rect.top())
    }
}
