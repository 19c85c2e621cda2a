use leptos::prelude::*;

#[component]
fn Placeholder(title: &'static str, #[prop(optional)] note: Option<&'static str>) -> impl IntoView {
    view! {
      <section class="page">
        <h1 class="page__title">{title}</h1>
        <p class="page__lead">{note.unwrap_or("Coming soon.")}</p>
      </section>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! { <Placeholder title="Services"/> }
}

#[component]
pub fn Gallery() -> impl IntoView {
    view! { <Placeholder title="Gallery"/> }
}

#[component]
pub fn Booking() -> impl IntoView {
    view! { <Placeholder title="Booking" note="Online booking is on its way. Call us to reserve a spot."/> }
}

#[component]
pub fn Policy() -> impl IntoView {
    view! { <Placeholder title="Policy"/> }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! { <Placeholder title="Contact" note="Find our phone number, address and hours below."/> }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <section class="page page--missing">
        <h1 class="page__title">"404 – not found"</h1>
        <a href="/" class="button">"Back home"</a>
      </section>
    }
}
