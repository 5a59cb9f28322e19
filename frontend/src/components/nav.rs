use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::theme::{use_theme, Theme};
use crate::Route;

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::DadTrack, "DadTrack"),
    (Route::Waitlist, "Waitlist"),
    (Route::Feedback, "Feedback"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let (theme, toggle_theme) = use_theme();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.document_element())
                        .map_or(0, |el| el.scroll_top());
                    is_scrolled.set(scroll_top > 8);
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let theme_icon = match theme {
        Theme::Light => "🌙",
        Theme::Dark => "☀️",
    };

    let links = |class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|(route, label)| {
                html! {
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={route.clone()} classes={classes!(class)}>
                            {*label}
                        </Link<Route>>
                    </div>
                }
            })
            .collect()
    };

    html! {
        <>
            <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <nav class="nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {"Ben Greene"}
                    </Link<Route>>

                    <div class="nav-links">
                        { links("nav-link") }
                    </div>

                    <div class="nav-actions">
                        <button
                            class="icon-button"
                            aria-label="Toggle dark mode"
                            onclick={toggle_theme}
                        >
                            {theme_icon}
                        </button>
                        <button
                            class="icon-button burger-menu"
                            aria-label="Open menu"
                            aria-expanded={menu_open.to_string()}
                            onclick={toggle_menu}
                        >
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    </div>
                </nav>
            </header>

            if *menu_open {
                <>
                <div class="mobile-menu-backdrop" onclick={close_menu.clone()}></div>
                <aside class="mobile-menu" aria-label="Mobile navigation">
                    <button class="icon-button mobile-menu-close" aria-label="Close menu" onclick={close_menu.clone()}>
                        {"✕"}
                    </button>
                    { links("mobile-menu-link") }
                </aside>
                </>
            }
        </>
    }
}
