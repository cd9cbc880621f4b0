//! Stage Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

    use stage_breaker::audio::{AudioManager, SoundEffect};
    use stage_breaker::platform::{InputState, dom_ids};
    use stage_breaker::renderer::CanvasSurface;
    use stage_breaker::scheduler::{PendingTimer, TimerToken};
    use stage_breaker::sim::Arena;
    use stage_breaker::ui::UiView;
    use stage_breaker::{Session, Settings};

    /// Game instance holding all state
    struct Game {
        session: Session,
        surface: CanvasSurface,
        audio: AudioManager,
        input: InputState,
        document: Document,
        /// Pending animation frame request; at most one at a time
        frame_id: Option<i32>,
        /// Armed stage-advance timeout (token, JS handle)
        timer: Option<(TimerToken, i32)>,
        /// Last view pushed to the DOM
        last_view: Option<UiView>,
    }

    fn js_err(msg: &str) -> JsValue {
        JsValue::from_str(msg)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
        let document = window.document().ok_or_else(|| js_err("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(dom_ids::CANVAS)
            .ok_or_else(|| js_err("no canvas"))?
            .dyn_into()?;

        let (settings, settings_error) = Settings::load(&canvas);
        console_log::init_with_level(settings.log_level())
            .map_err(|e| js_err(&e.to_string()))?;
        if let Some(e) = settings_error {
            log::warn!("Invalid settings, using defaults: {e}");
        }

        log::info!("Stage Breaker starting...");

        let arena = Arena::new(canvas.width() as f32, canvas.height() as f32);
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(arena),
            surface: CanvasSurface::from_canvas(&canvas)?,
            audio: AudioManager::new(&settings),
            input: InputState::default(),
            document: document.clone(),
            frame_id: None,
            timer: None,
            last_view: None,
        }));

        log::info!("Arena {}x{}", arena.width, arena.height);

        setup_keyboard(&document, game.clone());

        bind_button(&document, dom_ids::START_STAGE_1, game.clone(), |s| {
            s.start_stage(1)
        });
        bind_button(&document, dom_ids::START_STAGE_2, game.clone(), |s| {
            s.start_stage(2)
        });
        bind_button(&document, dom_ids::RESTART, game.clone(), Session::restart);
        bind_button(&document, dom_ids::NEXT_STAGE, game.clone(), Session::advance);
        bind_button(&document, dom_ids::BACK_TO_MENU, game.clone(), |s| {
            s.back_to_menu();
            true
        });

        // Show the menu
        sync_host(&game);

        log::info!("Stage Breaker ready!");
        Ok(())
    }

    fn setup_keyboard(document: &Document, game: Rc<RefCell<Game>>) {
        for (kind, down) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                let handled = if down {
                    g.input.key_down(&key)
                } else {
                    g.input.key_up(&key)
                };
                if handled {
                    event.prevent_default();
                }
            });
            let _ = document
                .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn bind_button(
        document: &Document,
        id: &str,
        game: Rc<RefCell<Game>>,
        action: fn(&mut Session) -> bool,
    ) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("Missing button #{id}");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            {
                let mut g = game.borrow_mut();
                // Clicks count as the user gesture audio needs
                g.audio.resume();
                if !action(&mut g.session) {
                    log::debug!("Click had no effect on {:?}", g.session.screen());
                }
            }
            sync_host(&game);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Bring the animation frame, the advance timeout and the DOM in line
    /// with the session
    fn sync_host(game: &Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut g = game.borrow_mut();

        if g.session.is_running() {
            if g.frame_id.is_none() {
                g.frame_id = request_animation_frame(&window, game.clone());
            }
        } else if let Some(id) = g.frame_id.take() {
            let _ = window.cancel_animation_frame(id);
        }

        let pending = g.session.pending_timer();
        let already_armed = matches!(
            (pending, g.timer),
            (Some(p), Some((token, _))) if p.token == token
        );
        if !already_armed {
            if let Some((_, handle)) = g.timer.take() {
                window.clear_timeout_with_handle(handle);
            }
            if let Some(p) = pending {
                g.timer = set_timeout(&window, game.clone(), p).map(|handle| (p.token, handle));
            }
        }

        let view = g.session.view();
        if g.last_view.as_ref() != Some(&view) {
            apply_view(&g.document, &view);
            g.last_view = Some(view);
        }
    }

    fn request_animation_frame(window: &Window, game: Rc<RefCell<Game>>) -> Option<i32> {
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let id = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
        id
    }

    fn set_timeout(window: &Window, game: Rc<RefCell<Game>>, pending: PendingTimer) -> Option<i32> {
        let token = pending.token;
        let closure = Closure::once(move || {
            {
                let mut g = game.borrow_mut();
                if matches!(g.timer, Some((armed, _)) if armed == token) {
                    g.timer = None;
                }
                g.session.on_timer(token);
            }
            sync_host(&game);
        });
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                pending.delay_ms as i32,
            )
            .ok();
        closure.forget();
        handle
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.frame_id = None;

            let input = g.input.tick_input();
            let Game {
                session,
                surface,
                audio,
                ..
            } = &mut *g;
            let events = session.frame(&input, surface);
            for effect in SoundEffect::for_events(&events) {
                audio.play(effect);
            }
        }

        sync_host(&game);
    }

    /// Push a view to the page
    fn apply_view(document: &Document, view: &UiView) {
        set_hidden(document, dom_ids::MAIN_MENU, !view.menu_visible);
        set_hidden(document, dom_ids::GAME_SCREEN, !view.game_visible);
        set_hidden(document, dom_ids::STATUS, !view.status_visible);
        set_hidden(document, dom_ids::RESTART, !view.restart_visible);
        set_hidden(document, dom_ids::NEXT_STAGE, !view.next_visible);
        set_hidden(document, dom_ids::BACK_TO_MENU, !view.menu_button_visible);

        set_text(document, dom_ids::STATUS_MESSAGE, &view.status_message);
        set_text(document, dom_ids::RESTART, view.restart_label);
        set_text(document, dom_ids::SCORE, &view.score_text);
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if hidden {
                classes.add_1(dom_ids::HIDDEN_CLASS)
            } else {
                classes.remove_1(dom_ids::HIDDEN_CLASS)
            };
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Stage Breaker (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    autoplay();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play both stages with a ball-tracking paddle and report the outcome
#[cfg(not(target_arch = "wasm32"))]
fn autoplay() {
    use stage_breaker::renderer::DrawList;
    use stage_breaker::sim::{Arena, TickInput};
    use stage_breaker::{Screen, Session};

    /// Five minutes at 60 Hz
    const MAX_FRAMES: u64 = 60 * 60 * 5;
    const FRAME_MS: u32 = 16;

    let mut session = Session::new(Arena::default());
    let mut surface = DrawList::new();
    let mut timer_elapsed_ms = 0;
    session.start_stage(1);

    for _ in 0..MAX_FRAMES {
        match session.screen() {
            Screen::Playing { .. } => {
                let state = session.state();
                let offset = state.ball.pos.x - state.paddle.center_x();
                let input = TickInput {
                    left: offset < -10.0,
                    right: offset > 10.0,
                };
                session.frame(&input, &mut surface);
            }
            Screen::OfferNextOrRestart { .. } => {
                session.advance();
            }
            Screen::StageCleared { .. } => {
                if let Some(pending) = session.pending_timer() {
                    timer_elapsed_ms += FRAME_MS;
                    if timer_elapsed_ms >= pending.delay_ms {
                        timer_elapsed_ms = 0;
                        session.on_timer(pending.token);
                    }
                }
            }
            Screen::Menu | Screen::AllStagesCleared { .. } | Screen::GameOver { .. } => break,
        }
    }

    let view = session.view();
    log::info!(
        "Autoplay finished on {:?}: score {}, {} frames drawn, status {:?}",
        session.screen(),
        view.score_text,
        surface.frames,
        view.status_message
    );
}
