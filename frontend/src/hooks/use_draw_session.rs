use std::rc::Rc;

use gloo_render::request_animation_frame;
use gloo_timers::callback::Timeout;
use shared::constants::WHEEL_SETTLED_EVENT;
use shared::shared_wheel_game::*;
use wasm_bindgen::JsValue;
use web_sys::{window, CustomEvent, CustomEventInit};
use yew::prelude::*;

pub enum WheelAction {
    Draw,
    Complete(TransitionTicket),
    Dispose,
}

#[derive(PartialEq)]
pub struct WheelState {
    pub session: DrawSession,
}

impl Reducible for WheelState {
    type Action = WheelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.session.is_disposed() {
            return self;
        }

        let mut session = self.session.clone();
        let changed = match action {
            WheelAction::Draw => session.draw(&mut rand::thread_rng()).is_some(),
            WheelAction::Complete(ticket) => session.complete(ticket).is_some(),
            WheelAction::Dispose => {
                if let Some(ticket) = session.dispose() {
                    log::debug!("Spin {} abandoned on teardown", ticket.0);
                }
                true
            }
        };

        // Returning the same Rc skips the re-render: ignored draws stay invisible
        if changed {
            Rc::new(Self { session })
        } else {
            self
        }
    }
}

pub struct UseDrawSessionHandle {
    pub phase: DrawPhase,
    pub rotation: f64,
    pub segments: SegmentList,
    pub winner: Option<Segment>,
    pub draw: Callback<()>,
}

// Lets host pages outside Yew observe results
pub fn dispatch_settled_event(result: &DrawResult) {
    if let Some(window) = window() {
        let event_init = CustomEventInit::new();
        let detail = match serde_json::to_string(result) {
            Ok(json) => js_sys::JSON::parse(&json).unwrap_or(JsValue::NULL),
            Err(e) => {
                log::error!("Failed to serialize event detail: {:?}", e);
                JsValue::NULL
            }
        };
        event_init.set_detail(&detail);

        match CustomEvent::new_with_event_init_dict(WHEEL_SETTLED_EVENT, &event_init) {
            Ok(event) => {
                let _ = window.dispatch_event(&event);
            }
            Err(e) => log::error!("Failed to create {} event: {:?}", WHEEL_SETTLED_EVENT, e),
        }
    }
}

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Binds a draw session to browser timers.
///
/// Each accepted draw gets exactly one `Timeout` at the nominal duration;
/// the handle lives in an effect, so unmounting the wheel drops it and the
/// pending completion never fires. Unmounting also disposes the session.
/// Animation frames drive the displayed rotation until the transition ends.
#[hook]
pub fn use_draw_session(
    initial: DrawSession,
    on_result: Option<Callback<DrawResult>>,
) -> UseDrawSessionHandle {
    let state = use_reducer(move || WheelState { session: initial });
    // (ticket, start timestamp) of the transition being animated
    let started = use_mut_ref(|| None::<(TransitionTicket, f64)>);
    let frame_clock = use_state(|| 0.0_f64);

    let ticket = state.session.transition().map(|t| t.ticket);
    let duration_ms = state.session.config().nominal_duration_ms;

    // Completion timer
    {
        let dispatcher = state.dispatcher();
        let started = started.clone();
        let frame_clock = frame_clock.clone();

        use_effect_with(ticket, move |ticket| {
            let timeout = ticket.map(|ticket| {
                let now = now_ms();
                *started.borrow_mut() = Some((ticket, now));
                frame_clock.set(now);

                Timeout::new(duration_ms, move || {
                    dispatcher.dispatch(WheelAction::Complete(ticket));
                })
            });

            move || drop(timeout)
        });
    }

    let elapsed = match (*started.borrow(), ticket) {
        (Some((started_ticket, started_at)), Some(current)) if started_ticket == current => {
            *frame_clock - started_at
        }
        _ => 0.0,
    };

    // Frame loop until the transition has played out
    {
        let animating = state
            .session
            .transition()
            .map_or(false, |t| !t.is_finished(elapsed));
        let frame_clock = frame_clock.clone();

        use_effect_with((animating, *frame_clock), move |(animating, _)| {
            let frame = animating.then(|| {
                let clock = frame_clock.clone();
                request_animation_frame(move |timestamp| clock.set(timestamp))
            });

            move || drop(frame)
        });
    }

    // Publish the winner once per settled draw
    {
        let result = state.session.result();

        use_effect_with(
            (state.session.phase(), state.session.draw_count()),
            move |(phase, _)| {
                if *phase == DrawPhase::Settled {
                    if let Some(result) = result {
                        dispatch_settled_event(&result);
                        if let Some(on_result) = on_result {
                            on_result.emit(result);
                        }
                    }
                }
                || ()
            },
        );
    }

    // Teardown
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| move || dispatcher.dispatch(WheelAction::Dispose));
    }

    let draw = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(WheelAction::Draw))
    };

    UseDrawSessionHandle {
        phase: state.session.phase(),
        rotation: state.session.rotation_at(elapsed),
        segments: state.session.segments().clone(),
        winner: state.session.winning_segment().cloned(),
        draw,
    }
}
