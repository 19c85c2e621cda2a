use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::quick_actions::QuickActions;

/// Chrome shared by every page; the matched route renders into the outlet.
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <Navbar/>
        <QuickActions/>
        <main class="site-main">
            <Outlet/>
        </main>
        <Footer/>
    }
}
