//! Shape Slash entry point
//!
//! Handles platform-specific initialization and wires the browser event
//! loop (timers, pointer input, DOM display) to the simulation core.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent, TouchEvent};

    use shape_slash::consts::{COUNTDOWN_PERIOD_MS, SIM_PERIOD_MS, SPAWN_PERIOD_MS};
    use shape_slash::platform::RoundDrivers;
    use shape_slash::platform::web::{CanvasSurface, DomDisplay, Interval};
    use shape_slash::sim::{Round, frame};

    /// Everything the event closures share.
    struct App {
        round: Round,
        surface: CanvasSurface,
        display: DomDisplay,
        canvas: HtmlCanvasElement,
    }

    impl App {
        fn viewport(&self) -> Vec2 {
            Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Shape Slash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        size_canvas_to_window(&canvas);

        let ctx: web_sys::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            round: Round::new(seed),
            surface: CanvasSurface::new(ctx),
            display: DomDisplay::new(&document),
            canvas: canvas.clone(),
        }));
        let drivers = Rc::new(RefCell::new(RoundDrivers::stopped()));

        log::info!("initialized with seed {seed}");

        setup_resize_handler(&canvas);
        setup_pointer_handlers(&canvas, app.clone());
        setup_restart_button(&document, app.clone(), drivers.clone());

        start_round(app, drivers);

        log::info!("Shape Slash running!");
    }

    /// (Re)start: reset round state and install a fresh driver set. The old
    /// drivers are cancelled first so no stale loop keeps mutating state.
    fn start_round(app: Rc<RefCell<App>>, drivers: Rc<RefCell<RoundDrivers<Interval>>>) {
        {
            let mut a = app.borrow_mut();
            let App { round, display, .. } = &mut *a;
            round.start(display);
            display.reset();
        }

        let frame_task = {
            let app = app.clone();
            Interval::every(SIM_PERIOD_MS, move || {
                let mut a = app.borrow_mut();
                let viewport = a.viewport();
                a.surface.set_size(viewport);
                let App { round, surface, .. } = &mut *a;
                frame(round, surface, viewport);
            })
        };

        let spawn_task = {
            let app = app.clone();
            Interval::every(SPAWN_PERIOD_MS, move || {
                let mut a = app.borrow_mut();
                let viewport = a.viewport();
                a.round.spawn_tick(viewport);
            })
        };

        let countdown_task = {
            let app = app.clone();
            let drivers = drivers.clone();
            Interval::every(COUNTDOWN_PERIOD_MS, move || {
                let over = {
                    let mut a = app.borrow_mut();
                    let App { round, display, .. } = &mut *a;
                    round.countdown_tick(display);
                    round.over
                };
                // Cancel in place; handles are freed on the next restart
                if over {
                    drivers.borrow_mut().stop();
                }
            })
        };

        drivers
            .borrow_mut()
            .replace(frame_task, spawn_task, countdown_task);
    }

    fn size_canvas_to_window(canvas: &HtmlCanvasElement) {
        let window = web_sys::window().expect("no window");
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement) {
        let window = web_sys::window().expect("no window");
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            // In-flight fruits keep their trajectories; only the bounds move
            size_canvas_to_window(&canvas);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Pointer position in surface-local coordinates
    fn local_pos(canvas: &HtmlCanvasElement, client_x: f64, client_y: f64) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            (client_x - rect.left()) as f32,
            (client_y - rect.top()) as f32,
        )
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse down - drag start
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = local_pos(&canvas_clone, event.client_x() as f64, event.client_y() as f64);
                app.borrow_mut().round.pointer_press(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - slice evaluation
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = local_pos(&canvas_clone, event.client_x() as f64, event.client_y() as f64);
                let mut a = app.borrow_mut();
                let App { round, display, .. } = &mut *a;
                round.pointer_move(pos, display);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up and pointer leaving the canvas both end the drag
        for event_name in ["mouseup", "mouseleave"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().round.pointer_release();
            });
            let _ = canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos =
                        local_pos(&canvas_clone, touch.client_x() as f64, touch.client_y() as f64);
                    app.borrow_mut().round.pointer_press(pos);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos =
                        local_pos(&canvas_clone, touch.client_x() as f64, touch.client_y() as f64);
                    let mut a = app.borrow_mut();
                    let App { round, display, .. } = &mut *a;
                    round.pointer_move(pos, display);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().round.pointer_release();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(
        document: &Document,
        app: Rc<RefCell<App>>,
        drivers: Rc<RefCell<RoundDrivers<Interval>>>,
    ) {
        if let Some(btn) = document.get_element_by_id("restart") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                log::info!("restarting round");
                start_round(app.clone(), drivers.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Shape Slash (native) starting...");
    log::info!("The game targets the browser - build for wasm32 to play");

    println!("\nRunning geometry smoke check...");
    smoke_distance();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_distance() {
    use glam::Vec2;
    use shape_slash::sim::distance_point_to_segment;

    let d = distance_point_to_segment(
        Vec2::new(0.0, 5.0),
        Vec2::new(-10.0, 0.0),
        Vec2::new(10.0, 0.0),
    );
    assert!((d - 5.0).abs() < 1e-6);
    println!("✓ geometry smoke check passed!");
}
