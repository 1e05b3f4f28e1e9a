//! Cellscope entry point
//!
//! Wires the browser canvas, pointer/wheel input and the tick loop to the
//! viewport core.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, EventTarget, HtmlCanvasElement, HtmlInputElement, MouseEvent, WheelEvent,
    };

    use cellscope::clock::TickClock;
    use cellscope::surface::CanvasSurface;
    use cellscope::viewport::{ViewportController, ViewportOptions, render_frame};
    use cellscope::{Board, Error, Settings, Vector2d};

    const CANVAS_ID: &str = "game-canvas";

    /// Everything one canvas session owns
    struct App {
        settings: Settings,
        board: Board,
        controller: ViewportController,
        clock: TickClock,
        surface: CanvasSurface,
        document: Document,
    }

    impl App {
        fn new(
            settings: Settings,
            surface: CanvasSurface,
            document: Document,
        ) -> cellscope::Result<Self> {
            let layout = settings.layout()?;
            let seed = js_sys::Date::now() as u64;
            let board = Board::seeded(settings.grid_size, seed, settings.seed_density);
            log::info!("Board {}x{} seeded with {}", settings.grid_size, settings.grid_size, seed);

            Ok(Self {
                controller: ViewportController::new(layout, ViewportOptions::from(&settings)),
                clock: TickClock::new(settings.speed),
                board,
                surface,
                document,
                settings,
            })
        }

        fn pointer_down(&mut self, pointer: Vector2d) {
            self.controller.pointer_down(pointer);
        }

        fn pointer_move(&mut self, pointer: Vector2d) {
            self.controller.pointer_move(pointer, &self.board);
        }

        fn pointer_up(&mut self, pointer: Vector2d) {
            self.controller.pointer_up(pointer, &mut self.board);
        }

        fn set_speed(&mut self, speed: u32) {
            self.settings.speed = speed;
            self.settings = self.settings.clone().clamped();
            self.clock.set_speed(self.settings.speed);
            self.settings.save();
            log::info!(
                "Speed {} ticks/s ({:.0}ms per tick)",
                self.settings.speed,
                self.clock.interval_ms()
            );
        }

        fn resize_board(&mut self, size: usize) {
            self.settings.grid_size = size;
            self.settings = self.settings.clone().clamped();
            let size = self.settings.grid_size;

            let seed = js_sys::Date::now() as u64;
            self.board = Board::seeded(size, seed, self.settings.seed_density);
            let layout = self.controller.layout().with_extent(size);
            self.controller.set_layout(layout);
            self.settings.save();
            log::info!("Board resized to {}x{}", size, size);
        }

        fn frame(&mut self, time: f64) {
            for _ in 0..self.clock.advance(time) {
                cellscope::CellEngine::tick(&mut self.board);
            }

            if let Err(e) = render_frame(
                &mut self.surface,
                &self.controller,
                &self.board,
                &self.settings.theme,
                self.settings.show_drag_guide,
            ) {
                log::error!("Render failed: {}", e);
            }

            self.update_debug();
        }

        /// Write the debug panel text
        fn update_debug(&self) {
            let readout = self.controller.readout();
            self.set_text("mouse-position", &readout.pointer_text());
            self.set_text("drag-start", &readout.drag_start_text());
            self.set_text("magnitude", &readout.magnitude_text());
            self.set_text("zoom", &readout.zoom.to_string());
            self.set_text("hovered-cell", &readout.hovered_text());
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }
    }

    /// Pointer position in canvas pixels
    fn pointer_of(event: &MouseEvent) -> Vector2d {
        Vector2d::new(event.offset_x() as f64, event.offset_y() as f64)
    }

    /// Attach a listener for `kind`, downcasting the event to `E`
    fn listen<E>(target: &EventTarget, kind: &str, mut handler: impl FnMut(E) + 'static)
    where
        E: JsCast + 'static,
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            if let Ok(event) = event.dyn_into::<E>() {
                handler(event);
            }
        });
        let callback = closure.as_ref().unchecked_ref();
        if let Err(e) = target.add_event_listener_with_callback(kind, callback) {
            log::warn!("Could not listen for {}: {:?}", kind, e);
        }
        closure.forget();
    }

    pub fn start() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Cellscope starting...");
        if let Err(e) = run() {
            log::error!("Cellscope failed to start: {}", e);
        }
    }

    fn run() -> cellscope::Result<()> {
        let window = web_sys::window().ok_or(Error::MissingWindow)?;
        let document = window.document().ok_or(Error::MissingWindow)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| Error::MissingElement(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| Error::MissingElement(CANVAS_ID.to_string()))?;

        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
        let mut surface = CanvasSurface::new(canvas.clone())?;
        surface.resize(width as u32, height as u32);

        let settings = Settings::load();
        let app = Rc::new(RefCell::new(App::new(settings, surface, document.clone())?));

        setup_pointer_handlers(&canvas, &app);
        setup_controls(&document, &app);

        request_animation_frame(app);
        log::info!("Cellscope running!");
        Ok(())
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, app: &Rc<RefCell<App>>) {
        {
            let app = app.clone();
            listen(canvas, "mousedown", move |event: MouseEvent| {
                app.borrow_mut().pointer_down(pointer_of(&event));
            });
        }
        {
            let app = app.clone();
            listen(canvas, "mousemove", move |event: MouseEvent| {
                app.borrow_mut().pointer_move(pointer_of(&event));
            });
        }
        {
            let app = app.clone();
            listen(canvas, "mouseup", move |event: MouseEvent| {
                app.borrow_mut().pointer_up(pointer_of(&event));
            });
        }
        {
            let app = app.clone();
            listen(canvas, "mouseleave", move |_event: MouseEvent| {
                app.borrow_mut().controller.pointer_leave();
            });
        }
        {
            let app = app.clone();
            listen(canvas, "wheel", move |event: WheelEvent| {
                event.prevent_default();
                app.borrow_mut().controller.wheel(event.delta_y());
            });
        }
    }

    fn input_element(document: &Document, id: &str) -> Option<HtmlInputElement> {
        let input = document.get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok();
        if input.is_none() {
            log::warn!("Optional control #{} not found", id);
        }
        input
    }

    fn setup_controls(document: &Document, app: &Rc<RefCell<App>>) {
        // Speed slider (ticks per second)
        if let Some(input) = input_element(document, "speed") {
            input.set_value(&app.borrow().settings.speed.to_string());
            let app = app.clone();
            let target = input.clone();
            listen(&target, "input", move |_event: web_sys::Event| {
                if let Ok(speed) = input.value().parse::<u32>() {
                    app.borrow_mut().set_speed(speed);
                }
            });
        }

        // Board size slider (cells per side)
        if let Some(input) = input_element(document, "size") {
            input.set_value(&app.borrow().settings.grid_size.to_string());
            let app = app.clone();
            let target = input.clone();
            listen(&target, "change", move |_event: web_sys::Event| {
                if let Ok(size) = input.value().parse::<usize>() {
                    app.borrow_mut().resize_board(size);
                }
            });
        }

        // Pause / resume
        match document.get_element_by_id("pause") {
            Some(button) => {
                let app = app.clone();
                let target = button.clone();
                listen(&target, "click", move |_event: MouseEvent| {
                    let paused = app.borrow_mut().clock.toggle_pause();
                    button.set_text_content(Some(if paused { "Resume" } else { "Pause" }));
                    log::info!("Simulation {}", if paused { "paused" } else { "resumed" });
                });
            }
            None => log::warn!("Optional control #pause not found"),
        }

        // Kill every cell
        match document.get_element_by_id("clear") {
            Some(button) => {
                let app = app.clone();
                listen(&button, "click", move |_event: MouseEvent| {
                    app.borrow_mut().board.clear();
                    log::info!("Board cleared");
                });
            }
            None => log::warn!("Optional control #clear not found"),
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            app.borrow_mut().frame(time);
            request_animation_frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    web_app::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cellscope (native) starting...");
    log::info!("The interactive viewer needs a browser - build for wasm32 with `trunk serve`");

    if let Err(e) = headless_demo() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the viewport against a recording surface and print the board
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() -> cellscope::Result<()> {
    use cellscope::viewport::{ViewportOptions, render_frame};
    use cellscope::{Board, CellEngine, RecordingSurface, Settings, Vector2d, ViewportController};

    let settings = Settings::load();

    // Glider in the top-left corner of an 8x8 board
    let mut board = Board::from_alive(8, [1, 10, 16, 17, 18]);
    let layout = settings.layout()?.with_extent(board.size());
    let mut controller = ViewportController::new(layout, ViewportOptions::from(&settings));

    // Click the bottom-right cell, then pan the view
    let click = layout.cell_origin(7, 7) + layout.cell_size() / 2.0;
    controller.pointer_down(click);
    controller.pointer_up(click, &mut board);

    controller.pointer_down(Vector2d::new(10.0, 10.0));
    controller.pointer_move(Vector2d::new(60.0, 35.0), &board);
    controller.pointer_up(Vector2d::new(60.0, 35.0), &mut board);
    log::info!("Pan offset {:?}", controller.state().pan_offset);

    let mut surface = RecordingSurface::new(800.0, 800.0);
    for _ in 0..4 {
        println!("Generation {}:\n{}", board.generation(), board);
        let scene = render_frame(
            &mut surface,
            &controller,
            &board,
            &settings.theme,
            settings.show_drag_guide,
        )?;
        log::info!(
            "Rendered {} blocks in {} draw calls",
            scene.len(),
            surface.take_commands().len()
        );
        board.tick();
    }

    Ok(())
}
