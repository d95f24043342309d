//! Canvas 2D surface and image loading for the browser

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::renderer::{AssetStore, Rect, Surface};

const FONT: &str = "20px sans-serif";

/// A [`Surface`] backed by a `<canvas>` 2D context.
///
/// Coordinates are CSS pixels; the backing store is scaled by the device
/// pixel ratio.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
    dpr: f64,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let mut surface = Self {
            canvas,
            ctx,
            width: 0.0,
            height: 0.0,
            dpr: 1.0,
        };
        surface.fit_to_client();
        Ok(surface)
    }

    /// Match the backing store to the canvas' on-screen size
    pub fn fit_to_client(&mut self) {
        let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let css_w = self.canvas.client_width().max(0);
        let css_h = self.canvas.client_height().max(0);
        self.canvas.set_width((css_w as f64 * dpr) as u32);
        self.canvas.set_height((css_h as f64 * dpr) as u32);
        self.width = css_w as f32;
        self.height = css_h as f32;
        self.dpr = dpr;
    }
}

fn warn_on_err(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("{what} failed: {e:?}");
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        warn_on_err(
            "set_transform",
            self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0),
        );
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str) {
        self.ctx.set_font(FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(color);
        warn_on_err("fill_text", self.ctx.fill_text(text, x as f64, y as f64));
    }

    fn measure_text(&self, text: &str) -> f32 {
        self.ctx.set_font(FONT);
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width() as f32,
            Err(_) => 0.0,
        }
    }

    fn draw_image(&mut self, image: &HtmlImageElement, rect: Rect) {
        warn_on_err(
            "draw_image",
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                rect.x as f64,
                rect.y as f64,
                rect.w as f64,
                rect.h as f64,
            ),
        );
    }
}

struct LoadedImage {
    element: HtmlImageElement,
    ready: Rc<Cell<bool>>,
}

/// Images keyed by path. Each load runs in the background; a failed load
/// leaves the sprite invisible for the rest of the session.
#[derive(Default)]
pub struct ImageStore {
    images: HashMap<String, LoadedImage>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `path` unless it is already known
    pub fn load(&mut self, path: &str) {
        if self.images.contains_key(path) {
            return;
        }
        let element = match HtmlImageElement::new() {
            Ok(element) => element,
            Err(e) => {
                log::warn!("Could not create image for {path}: {e:?}");
                return;
            }
        };
        element.set_src(path);

        let ready = Rc::new(Cell::new(false));
        let decode = JsFuture::from(element.decode());
        let flag = ready.clone();
        let key = path.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            match decode.await {
                Ok(_) => {
                    flag.set(true);
                    log::debug!("Loaded {key}");
                }
                Err(e) => log::warn!("Failed to load {key}: {e:?}"),
            }
        });

        self.images
            .insert(path.to_string(), LoadedImage { element, ready });
    }

    pub fn load_all<'a>(&mut self, paths: impl IntoIterator<Item = &'a str>) {
        for path in paths {
            self.load(path);
        }
    }
}

impl AssetStore for ImageStore {
    type Image = HtmlImageElement;

    fn get(&self, key: &str) -> Option<&HtmlImageElement> {
        self.images
            .get(key)
            .filter(|image| image.ready.get())
            .map(|image| &image.element)
    }
}
