/// The two overlay panels a header owns. At most one is open at a time, so
/// the controller's state is an `Option<Panel>` where `None` means closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    Menu,
    Search,
}

impl Panel {
    /// Region whose contents count as "inside" for outside-click dismissal.
    pub fn region(self) -> Anchor {
        match self {
            Panel::Menu => Anchor::MenuPanel,
            Panel::Search => Anchor::SearchPanel,
        }
    }

    /// Control that opens and closes this panel; focus returns here on close.
    pub fn toggle(self) -> Anchor {
        match self {
            Panel::Menu => Anchor::MenuToggle,
            Panel::Search => Anchor::SearchToggle,
        }
    }

    /// Where focus lands once the panel has painted.
    pub fn focus_target(self) -> Anchor {
        match self {
            Panel::Menu => Anchor::MenuPanel,
            Panel::Search => Anchor::SearchInput,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Panel::Menu => 0,
            Panel::Search => 1,
        }
    }

    pub fn dom_id(self) -> &'static str {
        match self {
            Panel::Menu => "site-menu",
            Panel::Search => "site-search-panel",
        }
    }
}

/// Ref slots the header view hands to its chrome.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    MenuPanel,
    MenuToggle,
    SearchPanel,
    SearchToggle,
    SearchInput,
}

/// Scroll setting of the page container, kept verbatim so a restore puts back
/// whatever was there, including values some other code set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollStyle {
    pub overflow: String,
    pub touch_action: String,
}

impl ScrollStyle {
    pub fn locked() -> Self {
        Self {
            overflow: "hidden".to_owned(),
            touch_action: "none".to_owned(),
        }
    }
}
