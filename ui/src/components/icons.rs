//! Inline 24x24 icons. All are decorative; the surrounding control carries
//! the accessible label.

use leptos::prelude::*;

#[component]
pub fn SearchIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" aria-hidden="true">
            <circle cx="11" cy="11" r="7" stroke="currentColor" stroke-width="2" fill="none"/>
            <line x1="16.5" y1="16.5" x2="21" y2="21" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
        </svg>
    }
}

#[component]
pub fn MenuIcon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" aria-hidden="true">
            <line x1="4" y1="7" x2="20" y2="7" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
            <line x1="6" y1="12" x2="20" y2="12" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
            <line x1="8" y1="17" x2="20" y2="17" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
        </svg>
    }
}

pub const FACEBOOK_GLYPH: &str =
    "M14.5 8.5h2.5V6h-2.5c-2.2 0-4 1.8-4 4v2H8v2.5h2.5V20h2.7v-5.5h2.4l.6-2.5h-3V10c0-.8.6-1.5 1.5-1.5z";
pub const GOOGLE_GLYPH: &str =
    "M12 3a9 9 0 0 0-9 9c0 3.6 2.2 6.7 5.4 8l-.4-2.9a5.9 5.9 0 0 1-2.5-5.1 6.4 6.4 0 0 1 6.5-6.4 6.1 6.1 0 0 1 4.3 1.8 5.7 5.7 0 0 1 1.6 4.1c0 2.7-1.6 4.8-3.9 5.4-1 .2-2.2 0-2.5-1 .7-1.8 1.2-3.7 1.2-5.3 0-1.2-.6-2.2-1.8-2.2-1.4 0-2.4 1.4-2.4 3.2 0 1.2.4 2 .4 2l-1.6 6.6c.6.2 1.3.3 2 .3a9 9 0 0 0 9-9 9 9 0 0 0-9-9Z";
pub const TIKTOK_GLYPH: &str =
    "M14 4c1.1 1.7 2.7 2.9 5 3v2.7c-1.9-.1-3.6-.8-5-2v6.5c0 3-2.4 5.3-5.4 5.3a5.3 5.3 0 0 1-5.3-5.3c0-2.9 2.4-5.3 5.3-5.3.4 0 .9.1 1.3.2v2.9a2.5 2.5 0 0 0-1.3-.4 2.6 2.6 0 0 0 0 5.2 2.6 2.6 0 0 0 2.6-2.6V4h2.8z";
pub const PHONE_GLYPH: &str =
    "M6.7 4.6c.4-.4 1-.5 1.5-.3l2.4 1a1.2 1.2 0 0 1 .7 1.6l-.8 2a13.2 13.2 0 0 0 5.6 5.6l2-.8a1.2 1.2 0 0 1 1.6.7l1 2.4c.2.5.1 1.1-.3 1.5l-1.3 1.3c-.6.6-1.5.8-2.3.7-7.6-1.3-13.7-7.4-15-15-.1-.8.1-1.7.7-2.3l1.2-1.1z";
pub const CALENDAR_GLYPH: &str =
    "M7 4a1 1 0 0 1 1 1v1h8V5a1 1 0 1 1 2 0v1h1a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h1V5a1 1 0 0 1 1-1zm12 8H5v6h14v-6z";
pub const PIN_GLYPH: &str =
    "M12 2c-3.6 0-6.5 2.9-6.5 6.5 0 4.9 6.5 12.9 6.5 12.9s6.5-8 6.5-12.9C18.5 4.9 15.6 2 12 2Zm0 8.6a2.1 2.1 0 1 1 0-4.2 2.1 2.1 0 0 1 0 4.2Z";
pub const CLOCK_GLYPH: &str =
    "M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18Zm.8 4.6v4.5l3.4 2.1a.8.8 0 0 1-.8 1.4l-3.8-2.4a.8.8 0 0 1-.4-.7V7.6a.8.8 0 0 1 1.6 0Z";

/// One filled path on the 24x24 grid.
#[component]
pub fn Glyph(d: &'static str) -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" aria-hidden="true">
            <path d=d fill="currentColor"/>
        </svg>
    }
}

#[component]
pub fn FacebookIcon() -> impl IntoView {
    view! { <Glyph d=FACEBOOK_GLYPH/> }
}

#[component]
pub fn TikTokIcon() -> impl IntoView {
    view! { <Glyph d=TIKTOK_GLYPH/> }
}

#[component]
pub fn PhoneIcon() -> impl IntoView {
    view! { <Glyph d=PHONE_GLYPH/> }
}

#[component]
pub fn CalendarIcon() -> impl IntoView {
    view! { <Glyph d=CALENDAR_GLYPH/> }
}

#[component]
pub fn PinIcon() -> impl IntoView {
    view! { <Glyph d=PIN_GLYPH/> }
}

#[component]
pub fn ClockIcon() -> impl IntoView {
    view! { <Glyph d=CLOCK_GLYPH/> }
}
