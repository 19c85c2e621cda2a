use leptos::prelude::ElementChild;
use leptos::prelude::ClassAttribute;
use leptos::component;
use leptos::IntoView;
use leptos::view;

use crate::config::{BOOKING_PATH, SALON_NAME};

#[component]
pub fn Home() -> impl IntoView {
    view! {
      <section class="page page--home">
        <h1 class="page__title">{SALON_NAME}</h1>
        <p class="page__lead">"Manicures, pedicures and spa care in Abbeville."</p>

        <div class="page__actions">
          <a href=BOOKING_PATH class="button button--primary">"Book an appointment"</a>
          <a href="/services" class="button">"See our services"</a>
        </div>
      </section>
    }
}
