//! Browser bindings: canvas surface, pointer listener, animation-frame loop

use std::cell::RefCell;
use std::rc::Rc;

use crate::driver::{FrameDriver, SharedGame};
use crate::input::get_pointer_y_from_event;
use crate::logger;
use crate::surface::DrawSurface;
use game_core::{Color, Config, Game, GameRng};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

impl DrawSurface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<(), JsValue> {
        CanvasRenderingContext2d::clear_rect(self, x as f64, y as f64, width as f64, height as f64);
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> Result<(), JsValue> {
        self.set_fill_style_str(&color.to_css());
        CanvasRenderingContext2d::fill_rect(self, x as f64, y as f64, width as f64, height as f64);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), JsValue> {
        self.set_fill_style_str(&color.to_css());
        self.begin_path();
        self.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        self.fill();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        line_width: f32,
        color: Color,
    ) -> Result<(), JsValue> {
        self.set_stroke_style_str(&color.to_css());
        self.set_line_width(line_width as f64);
        self.begin_path();
        self.move_to(from.x as f64, from.y as f64);
        self.line_to(to.x as f64, to.y as f64);
        self.stroke();
        Ok(())
    }
}

/// Called automatically when the WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}

/// Start a local game on `canvas`: the arena takes the canvas size, the
/// mouse drives the left paddle, and frames run until the page goes away.
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let config = Config::with_arena(canvas.width() as f32, canvas.height() as f32);
    let seed = js_sys::Date::now() as u64;
    let game = Game::new(config, GameRng::new(seed))
        .map_err(|e| JsValue::from_str(&format!("Invalid game config: {e}")))?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
        .dyn_into()?;

    let driver = FrameDriver::new(Rc::new(RefCell::new(game)), ctx);
    listen_for_pointer(&canvas, driver.game())?;
    run_frames(driver)?;

    log::info!("game started (seed {seed})");
    Ok(())
}

fn listen_for_pointer(canvas: &HtmlCanvasElement, game: SharedGame) -> Result<(), JsValue> {
    let target = canvas.clone();
    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let y = get_pointer_y_from_event(&event, &target);
        game.borrow_mut().set_pointer_y(y);
    });
    canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    // Listener lives as long as the page
    on_move.forget();
    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn run_frames(mut driver: FrameDriver<CanvasRenderingContext2d>) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = Rc::clone(&callback);

    *callback.borrow_mut() = Some(Closure::new(move || {
        if let Err(e) = driver.tick() {
            log::error!("Frame failed: {:?}", e);
        }
        if let Some(f) = next.borrow().as_ref() {
            if let Err(e) = request_animation_frame(f) {
                log::error!("Failed to schedule frame: {:?}", e);
            }
        }
    }));

    let scheduled = match callback.borrow().as_ref() {
        Some(f) => request_animation_frame(f),
        None => Err(JsValue::from_str("Frame callback missing")),
    };
    scheduled
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<(), JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .request_animation_frame(f.as_ref().unchecked_ref())?;
    Ok(())
}
