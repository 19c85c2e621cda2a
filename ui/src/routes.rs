use leptos::IntoView;
use leptos::component;
use leptos::view;
use leptos_router::components::ParentRoute;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::components::layout::Layout;
use crate::pages::{
    home::Home,
    placeholder::{Booking, Contact, Gallery, NotFound, Policy, Services},
};

// keep in step with crate::nav::NAV_LINKS
#[component]
pub fn SiteRoutes() -> impl IntoView {
    view! {
      <Routes fallback=NotFound>
        <ParentRoute path=path!("") view=Layout>
          <Route path=path!("")          view=Home     />
          <Route path=path!("/services") view=Services />
          <Route path=path!("/gallery")  view=Gallery  />
          <Route path=path!("/booking")  view=Booking  />
          <Route path=path!("/policy")   view=Policy   />
          <Route path=path!("/contact")  view=Contact  />
        </ParentRoute>
      </Routes>
    }
}
