use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;
use web_sys::{Element, HtmlElement};

use super::listener::ScopedListener;
use super::raf::AnimationFrame;
use crate::motion::frame::{FrameLoop, RemovalQueue, TaskId, TaskStatus};
use crate::motion::scroll::{ElementBox, Viewport};

/// One frame's worth of input, shared by every task.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    pub viewport: Viewport,
    pub dt: f64,
}

/// A style attribute to apply once every task has finished reading layout.
pub struct StyleWrite {
    pub element: HtmlElement,
    pub css: String,
}

impl StyleWrite {
    fn apply(self) {
        let _ = self.element.set_attribute("style", &self.css);
    }
}

/// Work done on every animation frame. `update` may read layout but must
/// not touch the DOM; writes go through the returned `StyleWrite`.
pub trait FrameTask {
    fn update(&mut self, frame: &Frame) -> (TaskStatus, Option<StyleWrite>);
}

struct Shared {
    tasks: RefCell<FrameLoop<Box<dyn FrameTask>>>,
    pending: RefCell<Option<AnimationFrame>>,
    /// Removals requested while a frame was running.
    removals: RemovalQueue,
    listeners: RefCell<Vec<ScopedListener>>,
    frames_run: Cell<u64>,
}

/// The page's single scroll publisher. Scroll and resize events schedule at
/// most one animation frame; that frame samples the viewport once, updates
/// every subscribed task and then applies all their style writes together.
#[derive(Clone)]
pub struct MotionRuntime {
    shared: Rc<Shared>,
}

impl PartialEq for MotionRuntime {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl MotionRuntime {
    pub fn new() -> Self {
        let tasks = FrameLoop::new();
        let shared = Rc::new(Shared {
            removals: tasks.removals(),
            tasks: RefCell::new(tasks),
            pending: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            frames_run: Cell::new(0),
        });

        if let Some(window) = web_sys::window() {
            for event in ["scroll", "resize"] {
                let weak = Rc::downgrade(&shared);
                let listener = ScopedListener::new(&window, event, move |_| {
                    if let Some(shared) = weak.upgrade() {
                        schedule(&shared);
                    }
                });
                shared.listeners.borrow_mut().extend(listener);
            }
        }
        debug!("Motion runtime started");
        Self { shared }
    }

    /// Registers `task` until the returned subscription is dropped.
    pub fn subscribe(&self, task: Box<dyn FrameTask>) -> Subscription {
        let id = {
            let mut tasks = self.shared.tasks.borrow_mut();
            let id = tasks.insert(task);
            debug!("Frame task {:?} subscribed, {} active", id, tasks.len());
            id
        };
        schedule(&self.shared);
        Subscription {
            shared: Rc::downgrade(&self.shared),
            id,
        }
    }
}

impl Default for MotionRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        debug!("Motion runtime stopped after {} frames", self.frames_run.get());
    }
}

/// Keeps a task registered. Dropping it removes the task, so an unmounted
/// component is never updated again.
pub struct Subscription {
    shared: Weak<Shared>,
    id: TaskId,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };
        match shared.tasks.try_borrow_mut() {
            Ok(mut tasks) => {
                tasks.remove(self.id);
            }
            Err(_) => shared.removals.push(self.id),
        };
    }
}

fn schedule(shared: &Rc<Shared>) {
    let Ok(mut pending) = shared.pending.try_borrow_mut() else {
        return;
    };
    if pending.is_some() {
        return;
    }
    let idle = shared
        .tasks
        .try_borrow()
        .map(|tasks| tasks.is_empty())
        .unwrap_or(false);
    if idle {
        return;
    }
    let weak = Rc::downgrade(shared);
    *pending = AnimationFrame::request(move |timestamp| {
        if let Some(shared) = weak.upgrade() {
            run_frame(&shared, timestamp);
        }
    });
}

fn run_frame(shared: &Rc<Shared>, timestamp: f64) {
    // The frame that invoked us has fired; clearing it lets tasks reschedule.
    let fired = shared.pending.borrow_mut().take();
    let Some(viewport) = read_viewport() else {
        return;
    };

    let mut writes = Vec::new();
    let animating = {
        let mut tasks = shared.tasks.borrow_mut();
        let dt = tasks.begin_frame(timestamp);
        let frame = Frame { viewport, dt };
        let animating = tasks.run(|_, task| {
            let (status, write) = task.update(&frame);
            writes.extend(write);
            status
        });
        if !animating {
            tasks.go_idle();
        }
        animating
    };
    shared.frames_run.set(shared.frames_run.get() + 1);

    for write in writes {
        write.apply();
    }
    drop(fired);

    if animating {
        schedule(shared);
    }
}

/// Current scroll position and page size; `None` outside a browser.
pub fn read_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    Some(Viewport {
        scroll_y: window.scroll_y().ok()?,
        height: window.inner_height().ok()?.as_f64()?,
        document_height: root.scroll_height() as f64,
    })
}

/// Document-space box of `element`. Measure an untransformed wrapper, not
/// the node being animated.
pub fn element_box(element: &Element, viewport: &Viewport) -> ElementBox {
    let rect = element.get_bounding_client_rect();
    ElementBox::from_client_top(rect.top(), rect.height(), viewport)
}
