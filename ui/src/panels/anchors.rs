//! How an [`Anchor`] turns into a concrete element for focus and hit tests.
//! The rules are written against [`AnchorTree`] so they do not depend on a
//! live document.

use anyhow::Result;

use super::state::Anchor;

/// Element lookup behind the panel anchors.
pub trait AnchorTree {
    type Element;
    type Node;

    /// The mounted element for `anchor`, if the view has bound one.
    fn element(&self, anchor: Anchor) -> Option<Self::Element>;

    /// First focusable descendant of `el` in document order.
    fn first_focusable(&self, el: &Self::Element) -> Result<Option<Self::Element>>;

    /// Whether `target` is `el` itself or inside it.
    fn encloses(&self, el: &Self::Element, target: &Self::Node) -> bool;
}

/// Element that receives focus for `anchor`. The menu panel passes focus to
/// its first focusable child and keeps it when there is none. An unmounted
/// anchor yields `None`.
pub fn focus_target<T: AnchorTree>(tree: &T, anchor: Anchor) -> Result<Option<T::Element>> {
    let Some(el) = tree.element(anchor) else {
        return Ok(None);
    };
    if anchor != Anchor::MenuPanel {
        return Ok(Some(el));
    }
    Ok(Some(tree.first_focusable(&el)?.unwrap_or(el)))
}

/// Unmounted anchors contain nothing.
pub fn contains<T: AnchorTree>(tree: &T, anchor: Anchor, target: &T::Node) -> bool {
    tree.element(anchor)
        .is_some_and(|el| tree.encloses(&el, target))
}
