use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::icons::{MenuIcon, SearchIcon};
use crate::config::SALON_NAME;
use crate::nav::NAV_LINKS;
use crate::panels::Panel;
use crate::panels::dom::use_panels;

const LOGO_SRC: &str = "/assets/logo.png";

#[component]
pub fn Navbar() -> impl IntoView {
    let panels = use_panels();
    let refs = panels.refs();

    let location = use_location();
    let pathname = move || location.pathname.get();

    let menu_open = move || panels.is_open(Panel::Menu);
    let search_open = move || panels.is_open(Panel::Search);

    let desktop_links = NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <li>
                    <a
                        href=link.path
                        class=move || link.class("navbar__link", &pathname())
                        aria-current=move || link.is_active(&pathname()).then_some("page")
                        on:click=move |_| panels.close_search()
                    >
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    let menu_links = NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <li>
                    <a
                        href=link.path
                        class=move || link.class("menu-link", &pathname())
                        aria-current=move || link.is_active(&pathname()).then_some("page")
                        on:click=move |_| panels.navigate()
                    >
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="/" on:click=move |_| panels.navigate()>
                    <img class="navbar__logo" src=LOGO_SRC alt=SALON_NAME/>
                    <span class="navbar__brand-text">{SALON_NAME}</span>
                </a>

                <nav class="navbar__nav" aria-label="Primary">
                    <ul class="navbar__links">{desktop_links}</ul>
                </nav>

                <div class="navbar__actions">
                    <button
                        class="icon-button"
                        type="button"
                        aria-label=move || if search_open() { "Close search" } else { "Open search" }
                        aria-expanded=move || search_open().to_string()
                        aria-controls=Panel::Search.dom_id()
                        on:click=move |_| panels.toggle_search()
                        node_ref=refs.search_toggle
                    >
                        <SearchIcon/>
                    </button>
                    <button
                        class="menu-button"
                        type="button"
                        aria-label=move || if menu_open() { "Close menu" } else { "Open menu" }
                        aria-expanded=move || menu_open().to_string()
                        aria-controls=Panel::Menu.dom_id()
                        on:click=move |_| panels.toggle_menu()
                        node_ref=refs.menu_toggle
                    >
                        <MenuIcon/>
                    </button>
                </div>
            </div>

            <div
                class="navbar__dropdown"
                class=("is-open", menu_open)
                aria-hidden=move || (!menu_open()).to_string()
                id=Panel::Menu.dom_id()
            >
                <div class="menu-panel" tabindex="-1" node_ref=refs.menu_panel>
                    <nav aria-label="Mobile">
                        <ul class="menu-links">{menu_links}</ul>
                    </nav>
                </div>
            </div>

            <div
                class="navbar__search"
                class=("is-open", search_open)
                aria-hidden=move || (!search_open()).to_string()
                id=Panel::Search.dom_id()
                node_ref=refs.search_panel
            >
                <form
                    class="search-form"
                    role="search"
                    on:submit=move |ev| {
                        // no search backend yet
                        ev.prevent_default();
                        log::debug!("search submitted: {:?}", panels.query());
                    }
                >
                    <label class="sr-only" for="site-search">"Search services"</label>
                    <input
                        id="site-search"
                        type="search"
                        placeholder="Search services"
                        aria-label="Search services"
                        prop:value=move || panels.query()
                        on:input=move |ev| panels.set_search_query(event_target_value(&ev))
                        node_ref=refs.search_input
                    />
                </form>
            </div>
        </header>
    }
}
