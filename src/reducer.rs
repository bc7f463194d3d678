//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, LOADING_ANIM_CYCLE_TICKS};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Query actions =====
        Action::QueryChange(query) => {
            if state.query == query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        Action::QuerySubmit(query) => {
            let city = query.trim().to_string();
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            state.query = query;
            start_fetch(state, city)
        }

        // ===== Weather actions =====
        Action::WeatherFetch => match state.refresh_target() {
            Some(city) => start_fetch(state, city),
            None => DispatchResult::unchanged(),
        },

        Action::WeatherDidLoad { request_id, result } => {
            if request_id != state.request_id {
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Loaded(result);
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        Action::WeatherDidError {
            request_id,
            message,
        } => {
            if request_id != state.request_id {
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Failed(message);
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiFocusSearch => {
            if state.search_focused {
                return DispatchResult::unchanged();
            }
            state.search_focused = true;
            DispatchResult::changed()
        }

        Action::UiBlurSearch => {
            if !state.search_focused {
                return DispatchResult::unchanged();
            }
            state.search_focused = false;
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            let animating = state.loading_anim_active();
            if animating {
                state.tick_count = state.tick_count.wrapping_add(1);
                if state.loading_anim_ticks_remaining > 0 {
                    state.loading_anim_ticks_remaining -= 1;
                }
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Every lookup starts a new generation and drops whatever was shown before.
fn start_fetch(state: &mut AppState, city: String) -> DispatchResult<Effect> {
    state.request_id = state.request_id.wrapping_add(1);
    state.city = Some(city.clone());
    state.weather = DataResource::Loading;
    state.search_focused = false;
    state.tick_count = 0;
    state.loading_anim_ticks_remaining = 0;
    DispatchResult::changed_with(Effect::FetchWeather {
        request_id: state.request_id,
        city,
    })
}

fn ticks_to_phase_zero(tick_count: u32) -> u32 {
    let cycle = LOADING_ANIM_CYCLE_TICKS.max(1);
    if tick_count == 0 {
        return cycle;
    }
    let remainder = tick_count % cycle;
    if remainder == 0 {
        0
    } else {
        cycle - remainder
    }
}
