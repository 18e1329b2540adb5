#![cfg(target_arch = "wasm32")]
use mandel_core::{
    ControllerConfig, FrameClock, PointerInertiaController, SurfaceRect, ViewUniforms,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mandel-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let (width, height) = dom::sync_canvas_backing_size(&canvas)
        .ok_or_else(|| anyhow::anyhow!("no window"))?;
    let aspect_ratio = SurfaceRect::from_size(width as f64, height as f64)
        .aspect_ratio()
        .unwrap_or(1.0);
    let controller = Rc::new(RefCell::new(PointerInertiaController::new(
        ControllerConfig::default(),
        aspect_ratio,
    )?));
    log::info!("[view] surface {}x{}", width, height);

    let wiring = events::InputWiring {
        canvas: canvas.clone(),
        controller: controller.clone(),
    };
    events::wire_canvas_resize(&wiring);
    events::wire_input_handlers(wiring);

    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        canvas,
        gpu,
        clock: FrameClock::new(),
        uniforms: ViewUniforms::default(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
