//! owm-lookup - current weather for any city, in the terminal

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use owm_lookup::action::Action;
use owm_lookup::api::WeatherClient;
use owm_lookup::components::{
    Component, SearchBar, SearchBarProps, WeatherDisplay, WeatherDisplayProps, SEARCH_BAR_HEIGHT,
};
use owm_lookup::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_CITY};
use owm_lookup::effect::{resolve_fetch, Effect};
use owm_lookup::logging;
use owm_lookup::reducer::reducer;
use owm_lookup::state::{AppState, LOADING_ANIM_TICK_MS};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};
use tracing::{info, warn};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Current weather for any city (OpenWeatherMap)
#[derive(Parser, Debug)]
#[command(name = "owm-lookup")]
#[command(about = "Look up current weather for a city via OpenWeatherMap")]
struct Args {
    /// City looked up on startup
    #[arg(long, short, default_value = DEFAULT_CITY)]
    city: String,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// API root; current weather is requested from `{base_url}/weather`
    #[arg(long, env = "OPENWEATHER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Give up on a lookup after this many seconds (default: wait indefinitely)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long, env = "OWM_LOOKUP_LOG")]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum LookupComponentId {
    Display,
    Search,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum LookupContext {
    Main,
    Search,
}

impl EventRoutingState<LookupComponentId, LookupContext> for AppState {
    fn focused(&self) -> Option<LookupComponentId> {
        if self.search_focused {
            Some(LookupComponentId::Search)
        } else {
            Some(LookupComponentId::Display)
        }
    }

    fn modal(&self) -> Option<LookupComponentId> {
        if self.search_focused {
            Some(LookupComponentId::Search)
        } else {
            None
        }
    }

    fn binding_context(&self, id: LookupComponentId) -> LookupContext {
        match id {
            LookupComponentId::Display => LookupContext::Main,
            LookupComponentId::Search => LookupContext::Search,
        }
    }

    fn default_context(&self) -> LookupContext {
        LookupContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        city,
        api_key,
        base_url,
        timeout,
        log_file,
        debug: debug_args,
    } = Args::parse();

    logging::init(log_file.as_deref())?;

    let mut config = ClientConfig::new(base_url, api_key);
    if let Some(secs) = timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if !config.has_api_key() {
        warn!("no OpenWeatherMap API key configured; lookups will be rejected");
    }
    let client = WeatherClient::new(config).map_err(io::Error::other)?;
    info!(base_url = %client.config().base_url, %city, "starting");

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let initial_city = city.clone();
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(initial_city))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, client, city, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct LookupUi {
    display: WeatherDisplay,
    search: SearchBar,
}

impl LookupUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay,
            search: SearchBar::new(),
        }
    }

    fn search_props(state: &AppState, is_focused: bool) -> SearchBarProps<'_> {
        SearchBarProps {
            query: &state.query,
            is_focused,
            on_change: Action::QueryChange,
            on_submit: Action::QuerySubmit,
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<LookupComponentId>,
    ) {
        let chunks = Layout::vertical([
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(1),
        ])
        .split(area);

        event_ctx.set_component_area(LookupComponentId::Search, chunks[0]);
        event_ctx.set_component_area(LookupComponentId::Display, chunks[1]);

        let focused = render_ctx.is_focused();
        self.search.render(
            frame,
            chunks[0],
            Self::search_props(state, focused && state.search_focused),
        );

        let props = WeatherDisplayProps {
            state,
            is_focused: focused && !state.search_focused,
        };
        self.display.render(frame, chunks[1], props);
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_search_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let actions: Vec<_> = self
            .search
            .handle_event(event, Self::search_props(state, true))
            .into_iter()
            .collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    client: WeatherClient,
    city: String,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(LookupUi::new()));
    let mut bus: EventBus<AppState, Action, LookupComponentId, LookupContext> = EventBus::new();
    let keybindings: Keybindings<LookupContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(LookupComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(LookupComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::startup(city)),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_ANIM_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &client),
        )
        .await
}

/// Handle effects by spawning tasks.
///
/// Every lookup shares one task key, so starting a new one cancels the
/// previous request; the reducer also drops results from older generations.
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: &WeatherClient) {
    match effect {
        Effect::FetchWeather { request_id, city } => {
            let client = client.clone();
            ctx.tasks().spawn("weather", async move {
                resolve_fetch(&client, request_id, &city).await
            });
        }
    }
}
