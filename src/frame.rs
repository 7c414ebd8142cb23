use crate::constants::{SPARKLES_CONTAINER_ID, SPARKLE_INITIAL_COUNT};
use crate::decor::{SparkleClock, SparkleStyle};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state for the decorative sparkle layer.
pub struct FrameContext {
    pub document: web::Document,
    pub container: web::HtmlElement,
    pub clock: SparkleClock,
    pub sparkles: VecDeque<web::Element>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(document: web::Document) -> anyhow::Result<Self> {
        let container = dom::html_element_by_id(&document, SPARKLES_CONTAINER_ID)?;
        let mut ctx = Self {
            document,
            container,
            clock: SparkleClock::new(),
            sparkles: VecDeque::new(),
            last_instant: Instant::now(),
        };
        ctx.clock.seed(SPARKLE_INITIAL_COUNT);
        for _ in 0..SPARKLE_INITIAL_COUNT {
            ctx.add_sparkle();
        }
        Ok(ctx)
    }

    fn add_sparkle(&mut self) {
        let el = match self.document.create_element("div") {
            Ok(el) => el,
            Err(e) => {
                log::error!("sparkle element error: {:?}", e);
                return;
            }
        };
        let viewport = dom::viewport_size();
        let s = SparkleStyle::random(&mut rand::thread_rng(), viewport.x, viewport.y);
        _ = el.class_list().add_1("sparkle");
        _ = el.set_attribute(
            "style",
            &format!(
                "left:{:.1}px;top:{:.1}px;animation-delay:{:.2}s;animation-duration:{:.2}s",
                s.x, s.y, s.delay_sec, s.duration_sec
            ),
        );
        _ = self.container.append_child(&el);
        self.sparkles.push_back(el);
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let tick = self.clock.tick(dt);
        for _ in 0..tick.expire {
            if let Some(el) = self.sparkles.pop_front() {
                el.remove();
            }
        }
        for _ in 0..tick.spawn {
            self.add_sparkle();
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
