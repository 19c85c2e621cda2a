use std::cell::Cell;
use std::rc::Rc;

use super::state::{Anchor, Panel, ScrollStyle};

/// Page-wide side effects the controller drives. The controller is the sole
/// writer of the scroll setting while a panel is open, but it never assumes it
/// was the only writer before that.
pub trait PageChrome {
    fn scroll_style(&self) -> ScrollStyle;
    fn set_scroll_style(&mut self, style: &ScrollStyle);

    /// Register the document-wide Escape and pointer-down listeners.
    /// Calling it while already listening must not add a second pair.
    fn listen_for_dismissal(&mut self);
    fn stop_listening(&mut self);

    /// Focus an anchor now. `MenuPanel` resolves to its first focusable
    /// descendant, or the container itself. A missing element is a no-op.
    fn focus(&mut self, anchor: Anchor);

    /// Focus on the next paint frame, unless the task went stale meanwhile.
    fn defer_focus(&mut self, task: FocusTask);
}

/// Transition counter shared between the controller and the focus tasks it
/// has handed out.
#[derive(Clone, Debug, Default)]
pub struct Generation(Rc<Cell<u64>>);

impl Generation {
    pub fn current(&self) -> u64 {
        self.0.get()
    }

    fn bump(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }
}

/// A focus request waiting for the next frame.
#[derive(Clone, Debug)]
pub struct FocusTask {
    anchor: Anchor,
    issued: u64,
    live: Generation,
}

impl FocusTask {
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// False once any transition happened after this task was issued.
    pub fn is_current(&self) -> bool {
        self.live.current() == self.issued
    }
}

/// Open/close state machine for a header's menu and search panels.
pub struct PanelController<C: PageChrome> {
    current: Option<Panel>,
    search_query: String,
    chrome: C,
    saved_scroll: Option<ScrollStyle>,
    opened: [bool; 2],
    generation: Generation,
}

impl<C: PageChrome> PanelController<C> {
    pub fn new(chrome: C) -> Self {
        Self {
            current: None,
            search_query: String::new(),
            chrome,
            saved_scroll: None,
            opened: [false; 2],
            generation: Generation::default(),
        }
    }

    pub fn current(&self) -> Option<Panel> {
        self.current
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        self.current == Some(panel)
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn chrome(&self) -> &C {
        &self.chrome
    }

    pub fn chrome_mut(&mut self) -> &mut C {
        &mut self.chrome
    }

    pub fn toggle_menu(&mut self) {
        self.toggle(Panel::Menu);
    }

    pub fn toggle_search(&mut self) {
        self.toggle(Panel::Search);
    }

    pub fn close_menu(&mut self) {
        self.close(Panel::Menu);
    }

    pub fn close_search(&mut self) {
        self.close(Panel::Search);
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    /// A navigation link was followed. The router does the actual work.
    pub fn navigate(&mut self) {
        self.transition(None);
    }

    /// Returns true when the key dismissed a panel, so the caller can stop
    /// the browser's default handling.
    pub fn key_down(&mut self, key: &str) -> bool {
        if key != "Escape" || self.current.is_none() {
            return false;
        }
        self.transition(None);
        true
    }

    /// `inside` answers whether the pointer target lies within an anchor.
    /// Anchors that are not mounted should answer false.
    pub fn pointer_down(&mut self, inside: impl Fn(Anchor) -> bool) {
        let Some(panel) = self.current else { return };
        if !inside(panel.region()) && !inside(panel.toggle()) {
            self.close(panel);
        }
    }

    /// Put the page back the way it was found. Used when the header unmounts
    /// with a panel still open.
    pub fn teardown(&mut self) {
        self.chrome.stop_listening();
        if let Some(saved) = self.saved_scroll.take() {
            self.chrome.set_scroll_style(&saved);
        }
        self.generation.bump();
        self.current = None;
        self.opened = [false; 2];
    }

    fn toggle(&mut self, panel: Panel) {
        let next = if self.current == Some(panel) {
            None
        } else {
            Some(panel)
        };
        self.transition(next);
    }

    fn close(&mut self, panel: Panel) {
        if self.current == Some(panel) {
            self.transition(None);
        }
    }

    fn transition(&mut self, next: Option<Panel>) {
        let prev = self.current;
        if prev == next {
            return;
        }
        self.current = next;
        let issued = self.generation.bump();
        log::debug!("panels: {prev:?} -> {next:?} (gen {issued})");

        self.apply_scroll_lock(prev, next);
        if let Some(opened) = next {
            self.focus_in(opened, issued);
        }
        if let Some(closed) = prev {
            self.focus_out(closed);
        }
        self.apply_listeners(prev, next);
    }

    fn apply_scroll_lock(&mut self, prev: Option<Panel>, next: Option<Panel>) {
        match (prev, next) {
            (None, Some(_)) => {
                self.saved_scroll = Some(self.chrome.scroll_style());
                self.chrome.set_scroll_style(&ScrollStyle::locked());
            }
            (Some(_), None) => {
                let saved = self.saved_scroll.take().unwrap_or_default();
                self.chrome.set_scroll_style(&saved);
            }
            _ => {}
        }
    }

    fn focus_in(&mut self, panel: Panel, issued: u64) {
        self.opened[panel.index()] = true;
        self.chrome.defer_focus(FocusTask {
            anchor: panel.focus_target(),
            issued,
            live: self.generation.clone(),
        });
    }

    fn focus_out(&mut self, panel: Panel) {
        if std::mem::take(&mut self.opened[panel.index()]) {
            self.chrome.focus(panel.toggle());
        }
    }

    fn apply_listeners(&mut self, prev: Option<Panel>, next: Option<Panel>) {
        match (prev, next) {
            (None, Some(_)) => self.chrome.listen_for_dismissal(),
            (Some(_), None) => self.chrome.stop_listening(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Effect {
        SetScroll(ScrollStyle),
        Listen,
        StopListening,
        Focus(Anchor),
        DeferFocus(Anchor),
    }

    #[derive(Default)]
    struct FakeChrome {
        style: ScrollStyle,
        listening: bool,
        effects: Vec<Effect>,
        pending: Vec<FocusTask>,
        focused: Option<Anchor>,
    }

    impl FakeChrome {
        fn run_frame(&mut self) {
            for task in std::mem::take(&mut self.pending) {
                if task.is_current() {
                    self.focused = Some(task.anchor());
                }
            }
        }
    }

    impl PageChrome for FakeChrome {
        fn scroll_style(&self) -> ScrollStyle {
            self.style.clone()
        }

        fn set_scroll_style(&mut self, style: &ScrollStyle) {
            self.style = style.clone();
            self.effects.push(Effect::SetScroll(style.clone()));
        }

        fn listen_for_dismissal(&mut self) {
            assert!(!self.listening, "listeners registered twice");
            self.listening = true;
            self.effects.push(Effect::Listen);
        }

        fn stop_listening(&mut self) {
            self.listening = false;
            self.effects.push(Effect::StopListening);
        }

        fn focus(&mut self, anchor: Anchor) {
            self.focused = Some(anchor);
            self.effects.push(Effect::Focus(anchor));
        }

        fn defer_focus(&mut self, task: FocusTask) {
            self.effects.push(Effect::DeferFocus(task.anchor()));
            self.pending.push(task);
        }
    }

    fn controller() -> PanelController<FakeChrome> {
        PanelController::new(FakeChrome::default())
    }

    #[test]
    fn starts_closed_with_empty_query() {
        let c = controller();
        assert_eq!(c.current(), None);
        assert_eq!(c.search_query(), "");
        assert!(c.chrome().effects.is_empty());
    }

    #[test]
    fn toggle_twice_returns_to_closed() {
        let mut c = controller();
        c.toggle_menu();
        assert!(c.is_open(Panel::Menu));
        c.toggle_menu();
        assert_eq!(c.current(), None);

        c.toggle_search();
        assert!(c.is_open(Panel::Search));
        c.toggle_search();
        assert_eq!(c.current(), None);
    }

    #[test]
    fn opening_one_panel_closes_the_other() {
        let mut c = controller();
        c.toggle_search();
        c.toggle_menu();
        assert_eq!(c.current(), Some(Panel::Menu));
        c.toggle_search();
        assert_eq!(c.current(), Some(Panel::Search));
    }

    #[test]
    fn close_is_conditional() {
        let mut c = controller();
        c.toggle_menu();
        c.close_search();
        assert_eq!(c.current(), Some(Panel::Menu));
        c.close_menu();
        assert_eq!(c.current(), None);

        let before = c.chrome().effects.len();
        c.close_menu();
        assert_eq!(c.chrome().effects.len(), before);
    }

    #[test]
    fn open_side_effects_fire_in_order() {
        let mut c = controller();
        c.toggle_menu();
        assert_eq!(
            c.chrome().effects,
            vec![
                Effect::SetScroll(ScrollStyle::locked()),
                Effect::DeferFocus(Anchor::MenuPanel),
                Effect::Listen,
            ]
        );
    }

    #[test]
    fn close_restores_scroll_and_focus_then_unlistens() {
        let mut c = controller();
        c.toggle_search();
        c.chrome_mut().effects.clear();
        c.toggle_search();
        assert_eq!(
            c.chrome().effects,
            vec![
                Effect::SetScroll(ScrollStyle::default()),
                Effect::Focus(Anchor::SearchToggle),
                Effect::StopListening,
            ]
        );
    }

    #[test]
    fn restores_pre_existing_scroll_value_verbatim() {
        let mut c = controller();
        let custom = ScrollStyle {
            overflow: "clip".to_owned(),
            touch_action: "pan-y".to_owned(),
        };
        c.chrome_mut().style = custom.clone();

        c.toggle_menu();
        assert_eq!(c.chrome().style, ScrollStyle::locked());
        c.toggle_search();
        assert_eq!(c.chrome().style, ScrollStyle::locked());
        c.close_search();
        assert_eq!(c.chrome().style, custom);
    }

    #[test]
    fn switching_panels_keeps_lock_and_listeners() {
        let mut c = controller();
        c.toggle_menu();
        c.chrome_mut().effects.clear();
        c.toggle_search();
        assert_eq!(
            c.chrome().effects,
            vec![
                Effect::DeferFocus(Anchor::SearchInput),
                Effect::Focus(Anchor::MenuToggle),
            ]
        );
        assert!(c.chrome().listening);
    }

    #[test]
    fn escape_closes_open_panel_only() {
        let mut c = controller();
        assert!(!c.key_down("Escape"));

        c.toggle_menu();
        assert!(!c.key_down("Enter"));
        assert_eq!(c.current(), Some(Panel::Menu));
        assert!(c.key_down("Escape"));
        assert_eq!(c.current(), None);
        assert!(!c.chrome().listening);
    }

    #[test]
    fn pointer_inside_panel_or_toggle_keeps_it_open() {
        let mut c = controller();
        c.toggle_search();

        c.pointer_down(|a| a == Anchor::SearchPanel);
        assert!(c.is_open(Panel::Search));
        c.pointer_down(|a| a == Anchor::SearchToggle);
        assert!(c.is_open(Panel::Search));

        // inside the menu does not count for the search panel
        c.pointer_down(|a| a == Anchor::MenuPanel);
        assert_eq!(c.current(), None);
    }

    #[test]
    fn pointer_with_unmounted_refs_closes() {
        let mut c = controller();
        c.toggle_menu();
        c.pointer_down(|_| false);
        assert_eq!(c.current(), None);
    }

    #[test]
    fn pointer_while_closed_is_noop() {
        let mut c = controller();
        c.pointer_down(|_| false);
        assert!(c.chrome().effects.is_empty());
    }

    #[test]
    fn navigate_closes_everything() {
        let mut c = controller();
        c.navigate();
        assert!(c.chrome().effects.is_empty());

        c.toggle_search();
        c.navigate();
        assert_eq!(c.current(), None);
        assert_eq!(c.chrome().focused, Some(Anchor::SearchToggle));
    }

    #[test]
    fn stale_focus_task_is_skipped() {
        let mut c = controller();
        c.toggle_menu();
        c.toggle_menu();
        c.chrome_mut().run_frame();
        assert_eq!(c.chrome().focused, Some(Anchor::MenuToggle));
    }

    #[test]
    fn fresh_focus_task_runs() {
        let mut c = controller();
        c.toggle_search();
        c.chrome_mut().run_frame();
        assert_eq!(c.chrome().focused, Some(Anchor::SearchInput));
    }

    #[test]
    fn open_then_close_same_tick_leaves_no_listener() {
        let mut c = controller();
        for _ in 0..5 {
            c.toggle_menu();
            c.toggle_menu();
        }
        assert!(!c.chrome().listening);
        let listens = c
            .chrome()
            .effects
            .iter()
            .filter(|e| **e == Effect::Listen)
            .count();
        assert_eq!(listens, 5);
    }

    #[test]
    fn search_query_is_stored_verbatim() {
        let mut c = controller();
        c.set_search_query("gel <b>manicure</b> & pedi");
        assert_eq!(c.search_query(), "gel <b>manicure</b> & pedi");
        c.set_search_query("");
        assert_eq!(c.search_query(), "");
    }

    #[test]
    fn teardown_restores_page() {
        let mut c = controller();
        c.chrome_mut().style.overflow = "auto".to_owned();
        c.toggle_menu();
        c.teardown();
        assert_eq!(c.chrome().style.overflow, "auto");
        assert!(!c.chrome().listening);
        assert_eq!(c.current(), None);
        c.chrome_mut().run_frame();
        assert_eq!(c.chrome().focused, None);
    }
}
