use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::sphere::{transform, Camera, SphereStyle, WireSphere};
use crate::dom::raf::AnimationFrame;

const SPHERE_COLOR: &str = "rgba(34, 197, 94, 0.8)";

struct Scene {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    sphere: WireSphere,
    style: SphereStyle,
    camera: Camera,
    started_at: Option<f64>,
}

impl Scene {
    fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas,
            context,
            sphere: WireSphere::new(24, 24, 48),
            style: SphereStyle::default(),
            camera: Camera::default(),
            started_at: None,
        })
    }

    /// Keeps the backing store at device resolution for the element's size.
    fn fit(&self) -> (f64, f64) {
        let ratio = web_sys::window()
            .map(|window| window.device_pixel_ratio())
            .unwrap_or(1.0);
        let width = self.canvas.client_width().max(1) as f64;
        let height = self.canvas.client_height().max(1) as f64;
        let (px_w, px_h) = ((width * ratio) as u32, (height * ratio) as u32);
        if self.canvas.width() != px_w || self.canvas.height() != px_h {
            self.canvas.set_width(px_w);
            self.canvas.set_height(px_h);
        }
        let _ = self.context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
        (width, height)
    }

    fn draw(&mut self, timestamp_ms: f64) {
        let started_at = *self.started_at.get_or_insert(timestamp_ms);
        let t = (timestamp_ms - started_at) / 1000.0;
        let (width, height) = self.fit();

        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.set_stroke_style_str(SPHERE_COLOR);
        ctx.set_line_width(0.6);
        ctx.begin_path();
        for ring in self.sphere.rings() {
            let mut pen_down = false;
            for point in ring {
                let world = transform(point, t, &self.style);
                match self.camera.project(&world, width, height) {
                    Some((x, y)) if pen_down => ctx.line_to(x, y),
                    Some((x, y)) => {
                        ctx.move_to(x, y);
                        pen_down = true;
                    }
                    None => pen_down = false,
                }
            }
        }
        ctx.stroke();
    }
}

type Loop = Rc<RefCell<Option<AnimationFrame>>>;

fn next_frame(scene: Rc<RefCell<Scene>>, handle: Loop) {
    let weak_handle = Rc::downgrade(&handle);
    let frame = AnimationFrame::request(move |timestamp| {
        // Unmounted: the handle was dropped with the effect.
        let Some(handle) = weak_handle.upgrade() else {
            return;
        };
        scene.borrow_mut().draw(timestamp);
        next_frame(scene, handle);
    });
    *handle.borrow_mut() = frame;
}

/// Slowly spinning, wobbling wireframe sphere behind the hero copy.
#[function_component(HeroCanvas)]
pub fn hero_canvas() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let handle: Loop = Rc::new(RefCell::new(None));
                match canvas_ref.cast::<HtmlCanvasElement>().and_then(Scene::new) {
                    Some(scene) => next_frame(Rc::new(RefCell::new(scene)), handle.clone()),
                    None => warn!("Canvas 2D unavailable, hero sphere disabled"),
                }
                move || {
                    handle.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="hero-canvas" aria-hidden="true"></canvas>
    }
}
