use shared::shared_wheel_game::*;
use shared::WheelError;
use yew::prelude::*;

use crate::config::{get_segment_labels, get_wheel_config};
use crate::pages::games::FrontendWheelGame;
use crate::styles;

fn build_session() -> Result<DrawSession, WheelError> {
    let segments = SegmentList::new(get_segment_labels())?;
    DrawSession::new(segments, get_wheel_config())
}

#[function_component(Home)]
pub fn home() -> Html {
    // Built once per mount; an invalid setup never reaches the wheel
    let session = use_memo((), |_| build_session());

    let on_result = Callback::from(|result: DrawResult| {
        log::info!("Draw settled on {} ({})", result.label, result.index);
    });

    html! {
        <div class={styles::CONTAINER}>
            <h1 class={styles::TEXT_H1}>
                <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500">{"Spinning Wheel Game"}</span>
            </h1>
            {
                match &*session {
                    Ok(session) => html! {
                        <>
                            <FrontendWheelGame session={session.clone()} on_result={on_result} />
                            <p class={classes!(styles::TEXT_SMALL, "text-center", "mt-4")}>
                                {format!("{} segments", session.segments().len())}
                            </p>
                        </>
                    },
                    Err(err) => {
                        log::error!("{}", err);
                        html! {
                            <div class={styles::ALERT_ERROR}>{err.to_string()}</div>
                        }
                    }
                }
            }
        </div>
    }
}
