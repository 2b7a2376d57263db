use yew::prelude::*;

use crate::config;
use crate::dom::hooks::use_frame_task;
use crate::dom::runtime::FrameTask;
use crate::dom::tasks::PageProgressTask;

#[function_component(ProgressBar)]
pub fn progress_bar() -> Html {
    let bar = use_node_ref();
    {
        let bar = bar.clone();
        use_frame_task(move || {
            Some(Box::new(PageProgressTask::new(bar, config::site().spring)) as Box<dyn FrameTask>)
        });
    }

    html! {
        <>
            <div ref={bar} class="scroll-progress" style="transform: scaleX(0);"></div>
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 4px;
                        background: #22C55E;
                        transform-origin: 0% 50%;
                        z-index: 60;
                        will-change: transform;
                    }
                "#}
            </style>
        </>
    }
}
