use leptos::prelude::*;

use crate::components::icons::{CalendarIcon, FacebookIcon, PhoneIcon, TikTokIcon};
use crate::config::{BOOKING_PATH, salon};

/// Floating bar of shortcuts: socials, a call link and booking.
#[component]
pub fn QuickActions() -> impl IntoView {
    let info = salon();
    let call_label = format!("Call {}", info.phone.display);

    view! {
        <aside class="quick-actions" aria-label="Quick actions">
            <a
                class="quick-actions__button"
                href=info.facebook_url
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Visit our Facebook page"
                title="Facebook"
            >
                <span class="quick-actions__icon" aria-hidden="true"><FacebookIcon/></span>
                <span class="quick-actions__label">"Facebook"</span>
            </a>

            <a
                class="quick-actions__button"
                href=info.tiktok_url
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Visit our TikTok page"
                title="TikTok"
            >
                <span class="quick-actions__icon" aria-hidden="true"><TikTokIcon/></span>
                <span class="quick-actions__label">"TikTok"</span>
            </a>

            <a
                class="quick-actions__button"
                href=info.phone.href()
                aria-label=call_label.clone()
                title=call_label
            >
                <span class="quick-actions__icon" aria-hidden="true"><PhoneIcon/></span>
                <span class="quick-actions__label">"Call"</span>
            </a>

            <a
                class="quick-actions__button quick-actions__button--primary"
                href=BOOKING_PATH
                aria-label="Book an appointment"
                title="Book"
            >
                <span class="quick-actions__icon" aria-hidden="true"><CalendarIcon/></span>
                <span class="quick-actions__label">"Book"</span>
            </a>
        </aside>
    }
}
