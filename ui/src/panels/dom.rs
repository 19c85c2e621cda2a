use anyhow::{Result, anyhow};
use leptos::html;
use leptos::leptos_dom::helpers::request_animation_frame;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, Node};

use super::anchors::{self, AnchorTree, focus_target};
use super::controller::{FocusTask, PageChrome, PanelController};
use super::state::{Anchor, Panel, ScrollStyle};

const FOCUSABLE: &str = "a[href], button, [tabindex]:not([tabindex='-1'])";

/// Ref slots the header binds with `node_ref=`.
#[derive(Clone, Copy)]
pub struct PanelRefs {
    pub menu_panel: NodeRef<html::Div>,
    pub menu_toggle: NodeRef<html::Button>,
    pub search_panel: NodeRef<html::Div>,
    pub search_toggle: NodeRef<html::Button>,
    pub search_input: NodeRef<html::Input>,
}

impl PanelRefs {
    pub fn new() -> Self {
        Self {
            menu_panel: NodeRef::new(),
            menu_toggle: NodeRef::new(),
            search_panel: NodeRef::new(),
            search_toggle: NodeRef::new(),
            search_input: NodeRef::new(),
        }
    }

    /// Unmounted anchors contain nothing.
    pub fn contains(&self, anchor: Anchor, target: &Node) -> bool {
        anchors::contains(self, anchor, target)
    }

    fn focus(&self, anchor: Anchor) -> Result<()> {
        let Some(target) = focus_target(self, anchor)? else {
            return Ok(());
        };
        target.focus().map_err(|e| anyhow!("focus failed: {e:?}"))
    }
}

impl AnchorTree for PanelRefs {
    type Element = HtmlElement;
    type Node = Node;

    fn element(&self, anchor: Anchor) -> Option<HtmlElement> {
        match anchor {
            Anchor::MenuPanel => self.menu_panel.get_untracked().map(Into::into),
            Anchor::MenuToggle => self.menu_toggle.get_untracked().map(Into::into),
            Anchor::SearchPanel => self.search_panel.get_untracked().map(Into::into),
            Anchor::SearchToggle => self.search_toggle.get_untracked().map(Into::into),
            Anchor::SearchInput => self.search_input.get_untracked().map(Into::into),
        }
    }

    fn first_focusable(&self, el: &HtmlElement) -> Result<Option<HtmlElement>> {
        Ok(el
            .query_selector(FOCUSABLE)
            .map_err(|e| anyhow!("query_selector failed: {e:?}"))?
            .and_then(|first| first.dyn_into::<HtmlElement>().ok()))
    }

    fn encloses(&self, el: &HtmlElement, target: &Node) -> bool {
        el.contains(Some(target))
    }
}

impl Default for PanelRefs {
    fn default() -> Self {
        Self::new()
    }
}

struct DismissHandlers {
    key: Closure<dyn FnMut(KeyboardEvent)>,
    pointer: Closure<dyn FnMut(MouseEvent)>,
}

/// `PageChrome` over the live document.
///
/// The wasm closures behind the document listeners are created once in
/// [`DomChrome::bind`] and only registered or unregistered afterwards, so a
/// listener can unregister itself while it is running.
pub struct DomChrome {
    refs: PanelRefs,
    handlers: Option<DismissHandlers>,
    listening: bool,
}

impl DomChrome {
    pub fn new(refs: PanelRefs) -> Self {
        Self {
            refs,
            handlers: None,
            listening: false,
        }
    }

    pub fn bind(
        &mut self,
        on_key: impl FnMut(KeyboardEvent) + 'static,
        on_pointer: impl FnMut(MouseEvent) + 'static,
    ) {
        self.stop_listening();
        self.handlers = Some(DismissHandlers {
            key: Closure::wrap(Box::new(on_key) as Box<dyn FnMut(_)>),
            pointer: Closure::wrap(Box::new(on_pointer) as Box<dyn FnMut(_)>),
        });
    }

    fn body() -> Option<HtmlElement> {
        web_sys::window()?.document()?.body()
    }

    fn toggle_listeners(&self, on: bool) -> Result<()> {
        let Some(handlers) = &self.handlers else {
            return Ok(());
        };
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| anyhow!("no document"))?;

        let key = handlers.key.as_ref().unchecked_ref();
        let pointer = handlers.pointer.as_ref().unchecked_ref();
        let res = if on {
            document
                .add_event_listener_with_callback("keydown", key)
                .and_then(|_| document.add_event_listener_with_callback("mousedown", pointer))
        } else {
            document
                .remove_event_listener_with_callback("keydown", key)
                .and_then(|_| document.remove_event_listener_with_callback("mousedown", pointer))
        };
        res.map_err(|e| anyhow!("document listener update failed: {e:?}"))
    }
}

impl PageChrome for DomChrome {
    fn scroll_style(&self) -> ScrollStyle {
        let Some(body) = Self::body() else {
            return ScrollStyle::default();
        };
        let style = body.style();
        ScrollStyle {
            overflow: style.get_property_value("overflow").unwrap_or_default(),
            touch_action: style.get_property_value("touch-action").unwrap_or_default(),
        }
    }

    fn set_scroll_style(&mut self, scroll: &ScrollStyle) {
        let Some(body) = Self::body() else { return };
        let style = body.style();
        if let Err(e) = style
            .set_property("overflow", &scroll.overflow)
            .and_then(|_| style.set_property("touch-action", &scroll.touch_action))
        {
            log::warn!("scroll lock update failed: {e:?}");
        }
    }

    fn listen_for_dismissal(&mut self) {
        if self.listening {
            return;
        }
        match self.toggle_listeners(true) {
            Ok(()) => self.listening = true,
            Err(e) => log::warn!("{e}"),
        }
    }

    fn stop_listening(&mut self) {
        if !self.listening {
            return;
        }
        self.listening = false;
        if let Err(e) = self.toggle_listeners(false) {
            log::warn!("{e}");
        }
    }

    fn focus(&mut self, anchor: Anchor) {
        if let Err(e) = self.refs.focus(anchor) {
            log::debug!("{anchor:?}: {e}");
        }
    }

    fn defer_focus(&mut self, task: FocusTask) {
        let refs = self.refs;
        request_animation_frame(move || {
            if !task.is_current() {
                return;
            }
            if let Err(e) = refs.focus(task.anchor()) {
                log::debug!("{:?}: {e}", task.anchor());
            }
        });
    }
}

impl Drop for DomChrome {
    fn drop(&mut self) {
        self.stop_listening();
    }
}

/// Reactive handle the header view talks to. Every operation goes through
/// the controller and then republishes its state to the view signals.
pub struct PanelHandle<C: PageChrome = DomChrome> {
    controller: StoredValue<PanelController<C>, LocalStorage>,
    current: RwSignal<Option<Panel>>,
    query: RwSignal<String>,
    refs: PanelRefs,
}

impl<C: PageChrome> Clone for PanelHandle<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: PageChrome> Copy for PanelHandle<C> {}

impl<C: PageChrome + 'static> PanelHandle<C> {
    fn new(controller: PanelController<C>, refs: PanelRefs) -> Self {
        let current = controller.current();
        let query = controller.search_query().to_owned();
        Self {
            controller: StoredValue::new_local(controller),
            current: RwSignal::new(current),
            query: RwSignal::new(query),
            refs,
        }
    }

    pub fn refs(&self) -> PanelRefs {
        self.refs
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        self.current.get() == Some(panel)
    }

    pub fn query(&self) -> String {
        self.query.get()
    }

    /// Run `op` on the controller, then publish the new state.
    ///
    /// The controller is borrowed for the whole of `op`, and focus moves
    /// synchronously inside it. Never call this from a `focus`, `blur`,
    /// `focusin` or `focusout` handler: the nested call would find the
    /// controller already borrowed.
    pub fn dispatch(&self, op: impl FnOnce(&mut PanelController<C>)) {
        self.controller.update_value(op);
        self.publish();
    }

    pub fn toggle_menu(&self) {
        self.dispatch(PanelController::toggle_menu);
    }

    pub fn toggle_search(&self) {
        self.dispatch(PanelController::toggle_search);
    }

    pub fn close_search(&self) {
        self.dispatch(PanelController::close_search);
    }

    pub fn navigate(&self) {
        self.dispatch(PanelController::navigate);
    }

    pub fn set_search_query(&self, text: String) {
        self.dispatch(move |c| c.set_search_query(text));
    }

    fn publish(&self) {
        let mut snapshot = None;
        self.controller
            .with_value(|c| snapshot = Some((c.current(), c.search_query().to_owned())));
        let Some((current, query)) = snapshot else { return };

        if self.current.get_untracked() != current {
            self.current.set(current);
        }
        if self.query.with_untracked(|q| *q != query) {
            self.query.set(query);
        }
    }
}

/// Build the panel controller for one header instance and wire its document
/// listeners. The page is restored when the owning component unmounts.
pub fn use_panels() -> PanelHandle {
    let refs = PanelRefs::new();
    let handle = PanelHandle::new(PanelController::new(DomChrome::new(refs)), refs);

    let on_key = move |ev: KeyboardEvent| {
        let mut dismissed = false;
        handle.dispatch(|c| dismissed = c.key_down(&ev.key()));
        if dismissed {
            ev.prevent_default();
        }
    };

    let on_pointer = move |ev: MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        handle.dispatch(|c| c.pointer_down(|anchor| refs.contains(anchor, &target)));
    };

    handle
        .controller
        .update_value(|c| c.chrome_mut().bind(on_key, on_pointer));

    let controller = handle.controller;
    on_cleanup(move || {
        controller.try_update_value(|c| c.teardown());
    });

    handle
}
