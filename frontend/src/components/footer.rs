use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::links;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-links">
                    <Link<Route> to={Route::About} classes="footer-link">{"About"}</Link<Route>>
                    <Link<Route> to={Route::DadTrack} classes="footer-link">{"DadTrack"}</Link<Route>>
                    <Link<Route> to={Route::Feedback} classes="footer-link">{"Feedback"}</Link<Route>>
                    <a class="footer-link" href={links::app_store_tracked()} target="_blank" rel="noopener noreferrer">
                        {"App Store"}
                    </a>
                    <a class="footer-link" href={links::google_play_tracked()} target="_blank" rel="noopener noreferrer">
                        {"Google Play"}
                    </a>
                </div>
                <p class="footer-copy">{format!("© {} Ben Greene. All rights reserved.", year)}</p>
            </div>
        </footer>
    }
}
