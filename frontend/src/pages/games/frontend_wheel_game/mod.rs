mod wheel_canvas;
mod wheel_utils;

use shared::shared_wheel_game::*;
use yew::prelude::*;

use crate::hooks::use_draw_session::use_draw_session;
use crate::styles;

use wheel_canvas::WheelCanvas;
use wheel_utils::{ResultDisplay, SpinButton};

#[derive(Properties, PartialEq)]
pub struct FrontendWheelGameProps {
    /// Engine for this widget instance, built (and validated) by the host.
    pub session: DrawSession,
    #[prop_or_default]
    pub on_result: Option<Callback<DrawResult>>,
}

#[function_component(FrontendWheelGame)]
pub fn frontend_wheel_game(props: &FrontendWheelGameProps) -> Html {
    let wheel = use_draw_session(props.session.clone(), props.on_result.clone());

    let start_spin = {
        let draw = wheel.draw.clone();
        Callback::from(move |_: MouseEvent| draw.emit(()))
    };

    html! {
        <div class={styles::WHEEL_CARD}>
            <div class="relative mx-auto mb-8 flex justify-center items-center">
                <div class="w-full max-w-[450px] mx-auto">
                    <WheelCanvas
                        segments={wheel.segments.clone()}
                        rotation={wheel.rotation}
                        is_spinning={wheel.phase == DrawPhase::Spinning}
                    />
                </div>
            </div>

            <div class="flex justify-center mt-4">
                <div class="w-full max-w-[300px]">
                    <SpinButton phase={wheel.phase} onclick={start_spin} />
                </div>
            </div>

            <ResultDisplay winner={wheel.winner.clone()} />
        </div>
    }
}
