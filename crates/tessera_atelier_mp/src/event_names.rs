//! Platform event attribute names.
//!
//! Framework event names are mapped to mini-program attribute names:
//! `click` becomes `bindtap`, `foo-bar` becomes `bind:foo-bar`.

use phf::{phf_map, phf_set};
use tessera_carton::String;

/// Framework event name -> platform event name
static MP_EVENT_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "click" => "tap",
};

/// VNode lifecycle hooks, hyphenated and camelized.
static VNODE_HOOKS: phf::Set<&'static str> = phf_set! {
    "vnode-before-mount",
    "vnode-mounted",
    "vnode-before-update",
    "vnode-updated",
    "vnode-before-unmount",
    "vnode-unmounted",
    "vnodeBeforeMount",
    "vnodeMounted",
    "vnodeBeforeUpdate",
    "vnodeUpdated",
    "vnodeBeforeUnmount",
    "vnodeUnmounted",
};

/// Binding family selected by the modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Bind,
    Catch,
    CaptureBind,
    CaptureCatch,
}

impl EventType {
    pub fn new(is_catch: bool, is_capture: bool) -> Self {
        match (is_catch, is_capture) {
            (false, false) => Self::Bind,
            (true, false) => Self::Catch,
            (false, true) => Self::CaptureBind,
            (true, true) => Self::CaptureCatch,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bind => "bind",
            Self::Catch => "catch",
            Self::CaptureBind => "capture-bind",
            Self::CaptureCatch => "capture-catch",
        }
    }
}

/// Whether `event` keeps its casing behind a `bind:` separator.
pub fn is_separated_event(event: &str) -> bool {
    event.contains('-') || VNODE_HOOKS.contains(event)
}

/// Platform event name for a framework event name.
pub fn platform_event_name(event: &str) -> &str {
    MP_EVENT_NAMES.get(event).copied().unwrap_or(event)
}

/// Format the attribute name for a static event.
pub fn format_event_attr(event: &str, event_type: EventType) -> String {
    let prefix = event_type.as_str();
    let mut attr = String::with_capacity(prefix.len() + event.len() + 1);
    attr.push_str(prefix);
    if is_separated_event(event) {
        attr.push(':');
        attr.push_str(event);
    } else {
        attr.push_str(platform_event_name(event));
    }
    attr
}

/// Format the attribute name for a dynamic (`v-on:[exp]`) event.
pub fn format_dynamic_event_attr(exp: &str, event_type: EventType) -> String {
    let mut attr = String::from(event_type.as_str());
    attr.push_str(":{{");
    attr.push_str(exp);
    attr.push_str("}}");
    attr
}
