use shared::constants::RESULT_PREFIX;
use shared::shared_wheel_game::*;
use yew::prelude::*;

// Canvas angles grow clockwise from the +x axis; the pointer sits at -90°.
const POINTER_DEGREES: f64 = -90.0;

/// Canvas arc `(start, end)` in radians for segment `index`, before rotation.
///
/// Segments are laid out counter-clockwise from the pointer so that a wheel
/// turned clockwise by the settled angle shows `winning_index` under it.
pub fn segment_span(segments: &SegmentList, index: usize) -> (f64, f64) {
    let start = POINTER_DEGREES - segments.arc_start(index) - segments.arc_degrees();
    let end = POINTER_DEGREES - segments.arc_start(index);
    (start.to_radians(), end.to_radians())
}

pub fn label_angle(segments: &SegmentList, index: usize) -> f64 {
    (POINTER_DEGREES - segments.arc_middle(index)).to_radians()
}

pub fn result_message(label: &str) -> String {
    format!("{}{}", RESULT_PREFIX, label)
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub winner: Option<Segment>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(winner) = &props.winner else {
        return html! {};
    };

    html! {
        <div class="mt-8 mb-4 flex flex-col items-center justify-center">
            <p aria-label={result_message(&winner.label)} class={classes!(
                "result",
                "px-6",
                "py-4",
                "rounded-xl",
                "bg-gradient-to-r",
                "from-violet-400",
                "to-violet-600",
                "border-2",
                "border-violet-300",
                "text-white",
                "text-xl",
                "shadow-lg",
                "animate-pulse"
            )}>
                {RESULT_PREFIX}
                <strong>{&winner.label}</strong>
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub phase: DrawPhase,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let is_disabled = !props.phase.accepts_draw();

    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    let spin_icon_class = if is_disabled {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class={classes!(
                    "relative",
                    "w-full",
                    "px-8",
                    "py-4",
                    "font-bold",
                    "text-lg",
                    "transition-all",
                    "duration-300",
                    "focus:outline-none",
                    "focus:ring-4",
                    "focus:ring-yellow-300",
                    "bg-transparent",
                )}
            >
                <div class="flex items-center justify-center">
                    <svg class={spin_icon_class} xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{props.phase.trigger_label()}</span>
                </div>
            </button>
        </div>
    }
}
