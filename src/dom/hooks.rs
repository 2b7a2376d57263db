use yew::prelude::*;

use super::runtime::{FrameTask, MotionRuntime};

/// Subscribes the task built by `make` to the page's motion runtime after the
/// first render and unsubscribes on unmount. `make` returning `None` leaves
/// the element static.
#[hook]
pub fn use_frame_task<F>(make: F)
where
    F: FnOnce() -> Option<Box<dyn FrameTask>> + 'static,
{
    let runtime = use_context::<MotionRuntime>();
    use_effect_with_deps(
        move |_| {
            let subscription = runtime.and_then(|runtime| make().map(|task| runtime.subscribe(task)));
            move || drop(subscription)
        },
        (),
    );
}
