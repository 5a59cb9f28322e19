use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod forms;
mod links;
mod theme;

mod components {
    pub mod confetti;
    pub mod contact_form;
    pub mod fields;
    pub mod footer;
    pub mod gallery;
    pub mod lightbox;
    pub mod nav;
}

mod pages {
    pub mod about;
    pub mod dadtrack;
    pub mod feedback;
    pub mod home;
    pub mod waitlist;
}

use components::{footer::Footer, nav::Nav};
use pages::{
    about::About,
    dadtrack::DadTrack,
    feedback::Feedback,
    home::Home,
    waitlist::Waitlist,
};
use theme::ThemeStore;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/dadtrack")]
    DadTrack,
    #[at("/feedback")]
    Feedback,
    #[at("/waitlist")]
    Waitlist,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::DadTrack => {
            info!("Rendering DadTrack page");
            html! { <DadTrack /> }
        }
        Route::Feedback => {
            info!("Rendering Feedback page");
            html! { <Feedback /> }
        }
        Route::Waitlist => {
            info!("Rendering Waitlist page");
            html! { <Waitlist /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <main class="page">
                    <section class="hero">
                        <h1>{"Page not found"}</h1>
                        <p class="hero-lead">{"That page doesn't exist, or it moved."}</p>
                        <div class="button-row">
                            <Link<Route> to={Route::Home} classes="button button-primary button-lg">
                                {"Back home"}
                            </Link<Route>>
                        </div>
                    </section>
                </main>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub theme: ThemeStore,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<ThemeStore> context={props.theme.clone()}>
            <BrowserRouter basename={config::router_basename()}>
                <div class="site">
                    <Nav />
                    <Switch<Route> render={switch} />
                    <Footer />
                </div>
            </BrowserRouter>
        </ContextProvider<ThemeStore>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");

    // Takes over from the inline theme script in index.html.
    let theme = ThemeStore::in_browser();
    yew::Renderer::<App>::with_props(AppProps { theme }).render();
}
