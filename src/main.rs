//! Waste Sorter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Shipped item and bin tables
const CONFIG_JSON: &str = include_str!("../assets/config.json");

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use waste_sorter::GameConfig;
    use waste_sorter::platform::web::{CanvasSurface, ImageStore};
    use waste_sorter::renderer::{self, Surface};
    use waste_sorter::sim::{Category, PointerDown, Simulation, tick};

    /// Game instance holding all state
    struct Game {
        sim: Simulation,
        surface: CanvasSurface,
        images: ImageStore,
        /// Timestamp of the last animation frame (ms)
        last_time: f64,
    }

    impl Game {
        /// Run one frame: advance, then draw
        fn frame(&mut self, time: f64) {
            self.last_time = time;
            tick(&mut self.sim, time);
            renderer::draw(&self.sim, &mut self.surface, &self.images, time);
        }

        fn resize(&mut self) {
            self.surface.fit_to_client();
            let (w, h) = (self.surface.width(), self.surface.height());
            self.sim.resize(w, h);
            log::debug!("Resized to {w}x{h}");
        }

        fn press(&mut self, x: f32, y: f32) {
            match self.sim.pointer_down(x, y) {
                PointerDown::BrokeApart { parent, children } => {
                    log::info!("Item {parent} broke apart into {children:?}");
                }
                PointerDown::Grabbed(_) | PointerDown::Nothing => {}
            }
        }

        fn release(&mut self, x: f32, y: f32) {
            let now = self.last_time;
            if let Some(outcome) = self.sim.pointer_up(x, y, now) {
                log::debug!("Disposal: {outcome:?}");
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Waste Sorter starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let surface = CanvasSurface::new(canvas.clone()).expect("Failed to get 2d context");
        let config = GameConfig::load_or_default(super::CONFIG_JSON);

        let mut images = ImageStore::new();
        images.load_all(config.items.iter().map(|i| i.sprite.as_str()));
        images.load_all(config.bins.iter().map(|b| b.sprite.as_str()));
        // Parts spawned by decomposition use their category's default sprite
        images.load_all(Category::ALL.iter().map(|c| c.default_sprite()));

        let seed = js_sys::Date::now() as u64;
        let (w, h) = (surface.width(), surface.height());
        let game = Rc::new(RefCell::new(Game {
            sim: Simulation::new(config, w, h, seed),
            surface,
            images,
            last_time: 0.0,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        setup_resize(game.clone());
        setup_auto_pause(game.clone());

        request_animation_frame(game);

        log::info!("Waste Sorter running!");
    }

    /// Client coordinates to canvas-local CSS pixels
    fn to_canvas(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f32, f32) {
        let rect = canvas.get_bounding_client_rect();
        (
            client_x as f32 - rect.left() as f32,
            client_y as f32 - rect.top() as f32,
        )
    }

    fn mouse_pos(canvas: &HtmlCanvasElement, event: &MouseEvent) -> (f32, f32) {
        to_canvas(canvas, event.client_x(), event.client_y())
    }

    fn touch_pos(canvas: &HtmlCanvasElement, event: &TouchEvent) -> Option<(f32, f32)> {
        // touchend has no active touches; fall back to the ones that lifted
        let touch = event
            .touches()
            .get(0)
            .or_else(|| event.changed_touches().get(0))?;
        Some(to_canvas(canvas, touch.client_x(), touch.client_y()))
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Mouse down - pick up
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let (x, y) = mouse_pos(&canvas_clone, &event);
                game.borrow_mut().press(x, y);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - drag. On the window so a held item follows the pointer off the canvas.
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let (x, y) = mouse_pos(&canvas_clone, &event);
                game.borrow_mut().sim.pointer_move(x, y);
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up - drop. A release past the canvas edge lands outside every bin.
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let (x, y) = mouse_pos(&canvas_clone, &event);
                game.borrow_mut().release(x, y);
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some((x, y)) = touch_pos(&canvas_clone, &event) {
                    game.borrow_mut().press(x, y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some((x, y)) = touch_pos(&canvas_clone, &event) {
                    game.borrow_mut().sim.pointer_move(x, y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some((x, y)) = touch_pos(&canvas_clone, &event) {
                    game.borrow_mut().release(x, y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch cancel - the browser took the gesture; no release will follow
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().sim.cancel_drag();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchcancel", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let hidden = document_clone.visibility_state() == web_sys::VisibilityState::Hidden;
                game.borrow_mut().sim.set_paused(hidden);
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur: the matching mouseup may never arrive
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                g.sim.cancel_drag();
                g.sim.set_paused(true);
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window focus
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().sim.set_paused(false);
            });
            let _ =
                window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
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
    log::info!("Waste Sorter (native) starting...");
    log::info!("Native mode has no window - serve the wasm build for the playable version");

    println!("\nRunning scripted session...");
    scripted_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drop every starting item straight down and report where it landed
#[cfg(not(target_arch = "wasm32"))]
fn scripted_session() {
    use waste_sorter::GameConfig;
    use waste_sorter::sim::{PointerDown, Simulation, tick};

    let config = GameConfig::load_or_default(CONFIG_JSON);
    let mut sim = Simulation::new(config, 400.0, 600.0, 42);
    let mut now = 0.0;
    let bottom = sim.surface.y - sim.config.item_size.1 / 2.0;

    let ids: Vec<u32> = sim.items.iter().map(|i| i.id).collect();
    for id in ids {
        let Some(item) = sim.item(id) else { continue };
        let center = item.pos + item.size / 2.0;

        // Items can overlap; only the topmost one under the pointer is grabbed
        match sim.pointer_down(center.x, center.y) {
            PointerDown::Grabbed(held) if held == id => {
                sim.pointer_move(center.x, bottom);
                match sim.pointer_up(center.x, bottom, now) {
                    Some(outcome) => println!("  item {id}: {outcome:?}"),
                    None => println!("  item {id}: nothing released"),
                }
            }
            PointerDown::Grabbed(other) => {
                sim.cancel_drag();
                println!("  item {id}: covered by item {other}, skipped");
            }
            PointerDown::BrokeApart { children, .. } => {
                println!("  item {id}: broke apart into {children:?}");
            }
            PointerDown::Nothing => println!("  item {id}: not hit"),
        }

        tick(&mut sim, now);
        now += 16.0;
    }

    println!("✓ {} items in play", sim.items.len());
}
