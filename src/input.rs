use mandel_core::{PointerSample, SurfaceRect};
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn canvas_rect(canvas: &web::HtmlCanvasElement) -> SurfaceRect {
    let rect = canvas.get_bounding_client_rect();
    SurfaceRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Normalized pointer position plus the event's own timestamp (ms since time origin).
///
/// Both client coordinates and the bounding rect are in CSS pixels, so the
/// device pixel ratio cancels out.
#[inline]
pub fn pointer_sample(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<PointerSample> {
    let pos = canvas_rect(canvas).normalize(ev.client_x() as f64, ev.client_y() as f64)?;
    Some(PointerSample::new(pos, ev.time_stamp()))
}
