use leptos::prelude::*;
use crate::config::SALON_NAME;
use crate::routes::SiteRoutes;
use leptos_router::components::Router;

use leptos_meta::provide_meta_context;
use leptos_meta::Link;
use leptos_meta::Title;

const FAVICON: &str = "/assets/logo.png";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Title text=SALON_NAME/>
      <Link rel="icon" type_="image/png" href=FAVICON/>

      <Router>
        <SiteRoutes/>
      </Router>
    }
}
