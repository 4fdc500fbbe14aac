//! DOM-backed implementations of the controller seams.

use gloo_timers::callback::Timeout;
use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, HtmlElement, HtmlMediaElement};
use yew::NodeRef;

use crate::controllers::media::MediaSink;
use crate::controllers::scheduler::{Scheduler, Task};
use crate::controllers::typewriter::TitleSink;
use crate::error::{describe_js, PageError};

pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Task) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn cancel(&self, handle: Timeout) {
        drop(handle);
    }
}

pub struct DocumentTitle;

impl TitleSink for DocumentTitle {
    fn set_title(&self, title: &str) -> Result<(), PageError> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or(PageError::SinkUnavailable("document"))?;
        document.set_title(title);
        Ok(())
    }
}

/// A `<video>` or `<audio>` element reached through a yew `NodeRef`.
pub struct HtmlMediaSink {
    node: NodeRef,
    label: &'static str,
}

impl HtmlMediaSink {
    pub fn new(node: NodeRef, label: &'static str) -> Self {
        Self { node, label }
    }

    fn element(&self) -> Result<HtmlMediaElement, PageError> {
        self.node
            .cast::<HtmlMediaElement>()
            .ok_or(PageError::SinkUnavailable(self.label))
    }
}

impl MediaSink for HtmlMediaSink {
    fn play(&self) -> Result<(), PageError> {
        let promise = self
            .element()?
            .play()
            .map_err(|err| PageError::PlayRejected(describe_js(&err)))?;
        // Autoplay rejections arrive asynchronously through the promise.
        let label = self.label;
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                error!("{} play failed: {}", label, describe_js(&err));
            }
        });
        Ok(())
    }

    fn apply_volume(&self, level: f64, muted: bool) -> Result<(), PageError> {
        let element = self.element()?;
        element.set_volume(level);
        element.set_muted(muted);
        Ok(())
    }

    fn set_muted(&self, muted: bool) -> Result<(), PageError> {
        self.element()?.set_muted(muted);
        Ok(())
    }
}

const INTERACTION_EVENTS: [&str; 2] = ["click", "touchstart"];

/// Click/touch listeners on the document body, removed on drop.
pub struct InteractionListener {
    body: HtmlElement,
    callback: Closure<dyn FnMut()>,
}

impl InteractionListener {
    pub fn attach(on_interaction: impl Fn() + 'static) -> Result<Self, PageError> {
        let body = window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .ok_or(PageError::SinkUnavailable("document body"))?;
        let listener = Self {
            body,
            callback: Closure::wrap(Box::new(on_interaction) as Box<dyn FnMut()>),
        };
        for event in INTERACTION_EVENTS {
            listener
                .body
                .add_event_listener_with_callback(event, listener.callback.as_ref().unchecked_ref())
                .map_err(|err| PageError::Listener(describe_js(&err)))?;
        }
        Ok(listener)
    }
}

impl Drop for InteractionListener {
    fn drop(&mut self) {
        for event in INTERACTION_EVENTS {
            let _ = self
                .body
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}
