use log::warn;
use yew::prelude::*;

use crate::config;
use crate::dom::hooks::use_frame_task;
use crate::dom::runtime::FrameTask;
use crate::dom::tasks::RevealTask;
use crate::motion::reveal::{Direction, Preset, RevealAnimation};
use crate::motion::scroll::ScrollRange;

/// Shared body of the reveal wrappers: an outer node that is measured and an
/// inner node that receives the animated style.
#[hook]
fn use_reveal(preset: Preset, range: ScrollRange, delay: f64) -> (NodeRef, NodeRef, String) {
    let trigger = use_node_ref();
    let target = use_node_ref();
    let animation = use_memo(
        |_| match RevealAnimation::new(preset, config::site().spring, delay) {
            Ok(animation) => Some(animation),
            Err(e) => {
                warn!("Reveal animation disabled: {}", e);
                None
            }
        },
        (),
    );

    {
        let trigger = trigger.clone();
        let target = target.clone();
        let animation = (*animation).clone();
        use_frame_task(move || {
            animation.map(|animation| {
                Box::new(RevealTask::new(trigger, target, range, animation)) as Box<dyn FrameTask>
            })
        });
    }

    // Rendered once up front so the block never flashes in its final state.
    let initial = (*animation)
        .as_ref()
        .map(|animation| animation.style().to_css())
        .unwrap_or_default();
    (trigger, target, initial)
}

#[derive(Properties, PartialEq)]
pub struct ScrollAnimationProps {
    #[prop_or(Direction::Up)]
    pub direction: Direction,
    /// Seconds the block waits after entering before it starts moving.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades, scales and slides its children in as they scroll into view.
#[function_component(ScrollAnimation)]
pub fn scroll_animation(props: &ScrollAnimationProps) -> Html {
    let (trigger, target, initial) =
        use_reveal(Preset::Slide(props.direction), ScrollRange::ENTRANCE, props.delay);
    html! {
        <div ref={trigger} class={props.class.clone()}>
            <div ref={target} class="motion-layer" style={initial}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wipes its children in from the left.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let (trigger, target, initial) = use_reveal(Preset::Clip, ScrollRange::ENTRANCE, 0.0);
    html! {
        <div ref={trigger} class={props.class.clone()}>
            <div ref={target} style={initial}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum InViewEffect {
    FadeUp,
    Zoom,
}

#[derive(Properties, PartialEq)]
pub struct InViewProps {
    pub effect: InViewEffect,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plays a one-shot entrance as soon as any part of the block is visible.
#[function_component(InView)]
pub fn in_view(props: &InViewProps) -> Html {
    let preset = match props.effect {
        InViewEffect::FadeUp => Preset::FadeUp { distance: 20.0 },
        InViewEffect::Zoom => Preset::Zoom,
    };
    let (trigger, target, initial) = use_reveal(preset, ScrollRange::IN_VIEW, props.delay);
    html! {
        <div ref={trigger}>
            <div ref={target} class={classes!("motion-layer", props.class.clone())} style={initial}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
