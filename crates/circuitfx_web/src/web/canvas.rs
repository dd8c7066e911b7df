use std::cell::RefCell;
use std::rc::Rc;

use circuitfx::anchors::CIRCUIT_CANVAS_ID;
use circuitfx::circuit::{trace_path, CircuitGraph};
use circuitfx::config::CircuitConfig;
use circuitfx::prng::Prng;
use wasm_bindgen::{JsCast, JsValue};

use super::dom;
use super::sched::FrameLoop;
use crate::error::FxError;

struct CircuitView {
    canvas: web_sys::HtmlCanvasElement,
    ctx: web_sys::CanvasRenderingContext2d,
    cfg: CircuitConfig,
    rng: Prng,
    graph: CircuitGraph,
}

pub(super) fn attach(cfg: &CircuitConfig, rng: Prng) -> Result<(), FxError> {
    let canvas: web_sys::HtmlCanvasElement = dom::by_id(CIRCUIT_CANVAS_ID, "canvas")?;
    let ctx = context_2d(&canvas)?;

    let view = Rc::new(RefCell::new(CircuitView {
        canvas,
        ctx,
        cfg: cfg.clone(),
        rng,
        graph: CircuitGraph::default(),
    }));
    view.borrow_mut().resize()?;

    let window = dom::window()?;
    dom::listen(&window, "resize", {
        let view = view.clone();
        move |_: web_sys::Event| {
            if let Err(e) = view.borrow_mut().resize() {
                tracing::warn!(error = %e, "circuit: resize failed");
            }
        }
    })?;

    FrameLoop::new(move |_ts| match view.borrow_mut().draw() {
        Ok(()) => true,
        // Skip this frame; the canvas may be re-inserted.
        Err(e) if !e.stops_animation() => true,
        Err(e) => {
            tracing::warn!(error = %e, "circuit: draw failed, animation stopped");
            false
        }
    })
    .detach()
}

fn context_2d(
    canvas: &web_sys::HtmlCanvasElement,
) -> Result<web_sys::CanvasRenderingContext2d, FxError> {
    canvas
        .get_context("2d")
        .map_err(|_| FxError::Canvas("get_context threw"))?
        .ok_or(FxError::Canvas("missing 2d context"))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| FxError::Canvas("context is not 2d"))
}

impl CircuitView {
    /// Match the viewport and rebuild the graph from scratch.
    fn resize(&mut self) -> Result<(), FxError> {
        let window = dom::window()?;
        // Client width excludes the vertical scrollbar.
        let width = dom::document()?
            .document_element()
            .map(|el| f64::from(el.client_width()))
            .unwrap_or(0.0);
        let height = dom::inner_height(&window);

        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        self.graph = CircuitGraph::generate(width, height, &self.cfg, &mut self.rng);
        Ok(())
    }

    fn draw(&mut self) -> Result<(), FxError> {
        let CircuitView {
            canvas,
            ctx,
            cfg,
            rng,
            graph,
        } = self;

        if !canvas.is_connected() {
            return Err(FxError::Detached(CIRCUIT_CANVAS_ID));
        }

        let w = f64::from(canvas.width());
        let h = f64::from(canvas.height());
        ctx.clear_rect(0.0, 0.0, w, h);

        // Traces
        ctx.set_stroke_style(&JsValue::from_str(&cfg.trace_color));
        ctx.set_line_width(cfg.trace_width);
        for (from, to) in graph.edges() {
            let [a, b, c, d] = trace_path(from, to);
            ctx.begin_path();
            ctx.move_to(a.x, a.y);
            ctx.line_to(b.x, b.y);
            ctx.line_to(c.x, c.y);
            ctx.line_to(d.x, d.y);
            ctx.stroke();
        }

        // Nodes, flickering as they are drawn
        graph.flicker(rng, cfg.flicker_threshold);
        for node in graph.nodes() {
            let fill = if node.active {
                &cfg.active_color
            } else {
                &cfg.inactive_color
            };
            ctx.set_fill_style(&JsValue::from_str(fill));
            ctx.begin_path();
            let _ = ctx.arc(
                node.pos.x,
                node.pos.y,
                cfg.node_radius,
                0.0,
                std::f64::consts::PI * 2.0,
            );
            ctx.fill();
        }

        Ok(())
    }
}
