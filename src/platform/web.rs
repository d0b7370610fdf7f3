//! Browser bindings: interval timers, the canvas 2D surface and the DOM
//! display.

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlElement};

use super::CancelTask;
use crate::render::RenderSurface;
use crate::sim::DisplaySink;

/// A `setInterval` task. The handle owns its closure, so the callback stays
/// alive exactly as long as the handle; cancelling clears the interval.
pub struct Interval {
    id: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn every(period_ms: i32, f: impl FnMut() + 'static) -> Self {
        let closure = Closure::<dyn FnMut()>::new(f);
        let id = web_sys::window()
            .expect("no window")
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms,
            )
            .expect("setInterval failed");
        Self {
            id: Some(id),
            _closure: closure,
        }
    }
}

impl CancelTask for Interval {
    fn cancel(&mut self) {
        if let Some(id) = self.id.take()
            && let Some(window) = web_sys::window()
        {
            window.clear_interval_with_handle(id);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Canvas 2D implementation of the render surface.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    size: Vec2,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            size: Vec2::ZERO,
        }
    }

    /// Refreshed each frame from the canvas element so window resizes take
    /// effect mid-round.
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn set_fill(&mut self, color: &str, alpha: f32) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2) {
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_polygon(&mut self, points: &[Vec2]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }
}

/// DOM display: score/timer text plus game-over and restart visibility.
pub struct DomDisplay {
    score: Element,
    timer: Element,
    game_over: HtmlElement,
    restart: HtmlElement,
}

impl DomDisplay {
    /// Looks up the display elements by the ids the page provides.
    pub fn new(document: &Document) -> Self {
        Self {
            score: document.get_element_by_id("score").expect("no #score"),
            timer: document.get_element_by_id("timer").expect("no #timer"),
            game_over: document
                .get_element_by_id("game-over")
                .expect("no #game-over")
                .dyn_into()
                .expect("#game-over is not an HtmlElement"),
            restart: document
                .get_element_by_id("restart")
                .expect("no #restart")
                .dyn_into()
                .expect("#restart is not an HtmlElement"),
        }
    }

    /// Hide the game-over overlay and restart button (round start).
    pub fn reset(&self) {
        set_display(&self.game_over, "none");
        set_display(&self.restart, "none");
    }
}

impl DisplaySink for DomDisplay {
    fn score_changed(&mut self, score: i32) {
        self.score.set_text_content(Some(&format!("Score: {score}")));
    }

    fn time_changed(&mut self, seconds: u32) {
        self.timer.set_text_content(Some(&format!("Time: {seconds}")));
    }

    fn round_ended(&mut self) {
        set_display(&self.game_over, "block");
        set_display(&self.restart, "block");
    }
}

fn set_display(el: &HtmlElement, value: &str) {
    let _ = el.style().set_property("display", value);
}
