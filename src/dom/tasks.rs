use yew::NodeRef;

use super::runtime::{element_box, Frame, FrameTask, StyleWrite};
use crate::motion::frame::TaskStatus;
use crate::motion::reveal::{RevealAnimation, RevealPhase};
use crate::motion::scroll::ScrollRange;
use crate::motion::spring::{Spring, SpringConfig};
use crate::nav::NavbarCurves;
use web_sys::HtmlElement;

/// Skips writes that would not change the attribute.
#[derive(Default)]
struct LastCss(Option<String>);

impl LastCss {
    fn write(&mut self, element: HtmlElement, css: String) -> Option<StyleWrite> {
        if self.0.as_deref() == Some(css.as_str()) {
            return None;
        }
        self.0 = Some(css.clone());
        Some(StyleWrite { element, css })
    }
}

/// Drives one block's entrance. `trigger` is measured, `target` is styled.
pub struct RevealTask {
    trigger: NodeRef,
    target: NodeRef,
    range: ScrollRange,
    animation: RevealAnimation,
    last: LastCss,
}

impl RevealTask {
    pub fn new(
        trigger: NodeRef,
        target: NodeRef,
        range: ScrollRange,
        animation: RevealAnimation,
    ) -> Self {
        Self {
            trigger,
            target,
            range,
            animation,
            last: LastCss::default(),
        }
    }
}

impl FrameTask for RevealTask {
    fn update(&mut self, frame: &Frame) -> (TaskStatus, Option<StyleWrite>) {
        let (Some(trigger), Some(target)) = (
            self.trigger.cast::<HtmlElement>(),
            self.target.cast::<HtmlElement>(),
        ) else {
            return (TaskStatus::Idle, None);
        };
        // Progress is latched once settled, so stop reading layout.
        let progress = match self.animation.phase() {
            RevealPhase::Settled => 1.0,
            _ => self.range.progress(&element_box(&trigger, &frame.viewport), &frame.viewport),
        };
        let moving = self.animation.update(progress, frame.dt);
        let write = self.last.write(target, self.animation.style().to_css());

        let status = if self.animation.is_finished() {
            TaskStatus::Finished
        } else if moving {
            TaskStatus::Animating
        } else {
            TaskStatus::Idle
        };
        (status, write)
    }
}

/// Page scroll progress bar, smoothed.
pub struct PageProgressTask {
    bar: NodeRef,
    spring: Spring,
    primed: bool,
    last: LastCss,
}

impl PageProgressTask {
    pub fn new(bar: NodeRef, config: SpringConfig) -> Self {
        Self {
            bar,
            spring: Spring::new(0.0, config),
            primed: false,
            last: LastCss::default(),
        }
    }
}

impl FrameTask for PageProgressTask {
    fn update(&mut self, frame: &Frame) -> (TaskStatus, Option<StyleWrite>) {
        let Some(bar) = self.bar.cast::<HtmlElement>() else {
            return (TaskStatus::Idle, None);
        };
        // A page restored mid-scroll starts with the bar already in place.
        if !self.primed {
            self.spring.snap_to(frame.viewport.page_progress());
            self.primed = true;
        }
        self.spring.set_target(frame.viewport.page_progress());
        let moving = self.spring.tick(frame.dt);
        let css = format!("transform: scaleX({:.4});", self.spring.value());
        let status = if moving {
            TaskStatus::Animating
        } else {
            TaskStatus::Idle
        };
        (status, self.last.write(bar, css))
    }
}

/// Navbar translucency, bound directly to scroll position.
pub struct NavbarTask {
    nav: NodeRef,
    curves: NavbarCurves,
    last: LastCss,
}

impl NavbarTask {
    pub fn new(nav: NodeRef, curves: NavbarCurves) -> Self {
        Self {
            nav,
            curves,
            last: LastCss::default(),
        }
    }
}

impl FrameTask for NavbarTask {
    fn update(&mut self, frame: &Frame) -> (TaskStatus, Option<StyleWrite>) {
        let Some(nav) = self.nav.cast::<HtmlElement>() else {
            return (TaskStatus::Idle, None);
        };
        let css = self.curves.style(frame.viewport.scroll_y);
        (TaskStatus::Idle, self.last.write(nav, css))
    }
}
