use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Event, EventTarget, Node};

use super::server::AppError;

fn window() -> Result<web_sys::Window, AppError> {
  web_sys::window().ok_or_else(|| AppError::WasmError("no global window".into()))
}

fn media_matches(query: &str) -> bool {
  web_sys::window()
    .and_then(|w| w.match_media(query).ok().flatten())
    .is_some_and(|mql| mql.matches())
}

pub fn prefers_reduced_motion() -> bool {
  media_matches("(prefers-reduced-motion: reduce)")
}

/// `false` on touch-first devices, where dropdowns open on click instead of hover.
pub fn hover_capable() -> bool {
  media_matches("(hover: hover)")
}

pub fn document_hidden() -> bool {
  web_sys::window()
    .and_then(|w| w.document())
    .is_some_and(|d| d.hidden())
}

pub fn location_search() -> String {
  web_sys::window()
    .and_then(|w| w.location().search().ok())
    .unwrap_or_default()
}

pub fn location_href() -> String {
  web_sys::window()
    .and_then(|w| w.location().href().ok())
    .unwrap_or_default()
}

pub fn location_origin() -> Result<String, AppError> {
  window()?
    .location()
    .origin()
    .map_err(|e| AppError::WasmError(format!("location.origin: {:?}", e)))
}

pub fn referrer() -> String {
  web_sys::window()
    .and_then(|w| w.document())
    .map(|d| d.referrer())
    .unwrap_or_default()
}

pub fn user_agent() -> String {
  web_sys::window()
    .and_then(|w| w.navigator().user_agent().ok())
    .unwrap_or_default()
}

pub fn browser_language() -> Option<String> {
  web_sys::window().and_then(|w| w.navigator().language())
}

/// IANA zone reported by `Intl.DateTimeFormat`, e.g. `Europe/Istanbul`.
pub fn browser_timezone() -> Option<String> {
  let options = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new()).resolved_options();
  js_sys::Reflect::get(&options, &JsValue::from_str("timeZone"))
    .ok()
    .and_then(|tz| tz.as_string())
    .filter(|tz| !tz.is_empty())
}

/// True when the event target sits inside the element with `id`.
pub fn event_within(event: &Event, id: &str) -> bool {
  let Some(container) = web_sys::window()
    .and_then(|w| w.document())
    .and_then(|d| d.get_element_by_id(id))
  else {
    return false;
  };
  event
    .target()
    .and_then(|t| t.dyn_into::<Node>().ok())
    .is_some_and(|node| container.contains(Some(&node)))
}

pub fn local_storage() -> Result<web_sys::Storage, AppError> {
  window()?
    .local_storage()
    .map_err(|e| AppError::WasmError(format!("localStorage: {:?}", e)))?
    .ok_or_else(|| AppError::WasmError("localStorage unavailable".into()))
}

pub fn session_storage() -> Result<web_sys::Storage, AppError> {
  window()?
    .session_storage()
    .map_err(|e| AppError::WasmError(format!("sessionStorage: {:?}", e)))?
    .ok_or_else(|| AppError::WasmError("sessionStorage unavailable".into()))
}

/// Whether `key` was set earlier in this browser session.
pub fn session_flag(key: &str) -> bool {
  session_storage()
    .ok()
    .and_then(|s| s.get_item(key).ok().flatten())
    .is_some()
}

pub fn set_session_flag(key: &str) -> Result<(), AppError> {
  session_storage()?
    .set_item(key, "1")
    .map_err(|e| AppError::WasmError(format!("sessionStorage.setItem: {:?}", e)))
}

/// A DOM event listener that is removed when the guard is dropped.
/// Components hold one in a hook so unmounting releases the listener.
pub struct ListenerGuard {
  target: EventTarget,
  event: &'static str,
  callback: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
  pub fn new(target: EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Result<Self, AppError> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
      .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
      .map_err(|e| AppError::WasmError(format!("addEventListener({}): {:?}", event, e)))?;
    Ok(Self { target, event, callback })
  }

  pub fn on_document(event: &'static str, handler: impl FnMut(Event) + 'static) -> Result<Self, AppError> {
    let document = window()?
      .document()
      .ok_or_else(|| AppError::WasmError("no document".into()))?;
    Self::new(document.into(), event, handler)
  }
}

impl Drop for ListenerGuard {
  fn drop(&mut self) {
    let _ = self
      .target
      .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
  }
}
