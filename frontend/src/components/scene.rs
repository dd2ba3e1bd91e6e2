use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlScriptElement};
use yew::prelude::*;

use crate::config;

const VIEWER_TAG: &str = "spline-viewer";
const VIEWER_SCRIPT_ID: &str = "spline-viewer-runtime";

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("no document to mount the scene into")]
    NoDocument,
    #[error("could not create <{tag}>: {reason}")]
    CreateElement { tag: &'static str, reason: String },
    #[error("could not attach scene: {0}")]
    Attach(String),
}

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Share of its container a scene occupies, in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerSize {
    pub width_percent: u8,
    pub height_percent: u8,
}

impl ContainerSize {
    pub const FILL: ContainerSize = ContainerSize {
        width_percent: 100,
        height_percent: 100,
    };

    pub fn css(&self) -> String {
        format!(
            "display: block; width: {}%; height: {}%;",
            self.width_percent, self.height_percent
        )
    }
}

/// An embeddable 3D scene. The page only decides where it goes and how big
/// it is; loading and rendering belong to the implementation.
pub trait SceneWidget {
    fn mount(&mut self, container: &HtmlElement, size: ContainerSize) -> Result<(), SceneError>;
    fn dispose(&mut self);
}

/// Spline scene rendered through the `<spline-viewer>` web component.
#[derive(Clone, Debug, PartialEq)]
pub struct SplineViewer {
    scene_url: AttrValue,
    element: Option<Element>,
}

impl SplineViewer {
    pub fn new(scene_url: impl Into<AttrValue>) -> Self {
        Self {
            scene_url: scene_url.into(),
            element: None,
        }
    }

    pub fn scene_url(&self) -> &str {
        &self.scene_url
    }
}

impl SceneWidget for SplineViewer {
    fn mount(&mut self, container: &HtmlElement, size: ContainerSize) -> Result<(), SceneError> {
        self.dispose();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(SceneError::NoDocument)?;
        ensure_viewer_runtime(&document)?;

        let viewer = document
            .create_element(VIEWER_TAG)
            .map_err(|e| SceneError::CreateElement {
                tag: VIEWER_TAG,
                reason: js_reason(&e),
            })?;
        viewer
            .set_attribute("url", &self.scene_url)
            .and_then(|_| viewer.set_attribute("style", &size.css()))
            .map_err(|e| SceneError::Attach(js_reason(&e)))?;
        container
            .append_child(&viewer)
            .map_err(|e| SceneError::Attach(js_reason(&e)))?;

        debug!("mounted scene {}", self.scene_url());
        self.element = Some(viewer);
        Ok(())
    }

    fn dispose(&mut self) {
        if let Some(viewer) = self.element.take() {
            viewer.remove();
            debug!("disposed scene {}", self.scene_url());
        }
    }
}

/// Adds the viewer runtime to `<head>` once per document. A runtime that
/// fails to load leaves `<spline-viewer>` as an inert empty element.
fn ensure_viewer_runtime(document: &Document) -> Result<(), SceneError> {
    if document.get_element_by_id(VIEWER_SCRIPT_ID).is_some() {
        return Ok(());
    }

    let script = document
        .create_element("script")
        .map_err(|e| SceneError::CreateElement {
            tag: "script",
            reason: js_reason(&e),
        })?
        .dyn_into::<HtmlScriptElement>()
        .map_err(|_| SceneError::Attach("script element has unexpected type".to_string()))?;
    script.set_id(VIEWER_SCRIPT_ID);
    script.set_type("module");
    script.set_src(config::SCENE_VIEWER_SCRIPT);

    let on_error = Closure::<dyn Fn()>::new(|| {
        warn!("scene viewer runtime failed to load, hero stays empty");
    });
    script.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();

    let head = document
        .head()
        .ok_or_else(|| SceneError::Attach("document has no <head>".to_string()))?;
    head.append_child(&script)
        .map_err(|e| SceneError::Attach(js_reason(&e)))?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct SceneEmbedProps<W: SceneWidget + Clone + PartialEq + 'static> {
    pub widget: W,
    #[prop_or(ContainerSize::FILL)]
    pub size: ContainerSize,
}

/// Hosts any [`SceneWidget`] in a container that fills its parent. The
/// widget is mounted after the container exists and disposed on unmount
/// or when the widget/size props change.
#[function_component(SceneEmbed)]
pub fn scene_embed<W>(props: &SceneEmbedProps<W>) -> Html
where
    W: SceneWidget + Clone + PartialEq + 'static,
{
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        use_effect_with_deps(
            move |(widget, size): &(W, ContainerSize)| {
                let mut widget = widget.clone();
                match container_ref.cast::<HtmlElement>() {
                    Some(container) => {
                        if let Err(e) = widget.mount(&container, *size) {
                            warn!("scene failed to mount: {}", e);
                        }
                    }
                    None => warn!("scene container missing at mount"),
                }
                move || widget.dispose()
            },
            (props.widget.clone(), props.size),
        );
    }

    html! {
        <div ref={container_ref} class="scene-embed"></div>
    }
}
