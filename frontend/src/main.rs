use log::{info, Level};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod browser;
mod config;
mod content;
mod contact {
    pub mod controller;
    pub mod transport;
}
mod components {
    pub mod service_modal;
    pub mod toast;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod home;
    pub mod not_found;
    pub mod services;
    pub mod why_choose_us;
}

use components::toast::ToastProvider;
use content::{anchor, SECTION_CONTACT, SECTION_HOME, SECTION_LINKS};
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! {
                <>
                    <Nav />
                    <Home />
                </>
            }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 50.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Every nav entry closes the mobile menu before scrolling.
    let go_to = |section: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            browser::scroll_to_section(&anchor(section));
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.25rem 1.5rem;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 1.5rem;
                    background: rgba(11, 15, 26, 0.85);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }
                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    color: #fff;
                    text-decoration: none;
                    font-weight: 700;
                    font-size: 1.25rem;
                }
                .nav-logo span { color: #22d3ee; }
                .nav-right { display: flex; align-items: center; gap: 2rem; }
                .nav-link { color: #d1d5db; text-decoration: none; font-size: 0.95rem; }
                .nav-link:hover { color: #22d3ee; }
                .nav-cta {
                    padding: 0.6rem 1.25rem;
                    border-radius: 10px;
                    background: linear-gradient(45deg, #6366f1, #22d3ee);
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span { width: 24px; height: 2px; background: #fff; }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(11, 15, 26, 0.97);
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                "#}
            </style>
            <div class="nav-content">
                <a href={anchor(SECTION_HOME)} class="nav-logo" onclick={go_to(SECTION_HOME)}>
                    {"Forti"}<span>{"Secure"}</span>
                </a>
                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SECTION_LINKS.iter().map(|link| html! {
                        <a key={link.name} href={anchor(link.section)} class="nav-link" onclick={go_to(link.section)}>
                            {link.name}
                        </a>
                    }) }
                    <a href={anchor(SECTION_CONTACT)} class="nav-cta" onclick={go_to(SECTION_CONTACT)}>
                        {"Get Quote"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
