use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::gallery::{Gallery, Screenshot};
use crate::config;
use crate::links;
use crate::Route;

fn screenshots() -> Vec<Screenshot> {
    vec![
        Screenshot {
            src: config::asset_path("/images/dadtrack/1_homescreen_with_tip.png"),
            title: "AI-Powered Daily Tips".into(),
            description: "Get personalized parenting tips powered by AI, right in your timeline".into(),
            icon: None,
        },
        Screenshot {
            src: config::asset_path("/images/dadtrack/2_monthly_recap.png"),
            title: "Monthly AI Recaps".into(),
            description: "Beautiful narrative summaries of your journaling journey each month".into(),
            icon: None,
        },
        Screenshot {
            src: config::asset_path("/images/dadtrack/3_magazine_mode.png"),
            title: "Immersive Magazine Mode".into(),
            description: "Relive your moments with full-screen photos and dramatic typography".into(),
            icon: None,
        },
    ]
}

const EXPERIENCE: &[(&str, &str, &str)] = &[
    (
        "Senior Engineering Manager",
        "Arcadia • 2021 – Present",
        "Leading global teams building utility data platforms. Managing engineers from interns to senior staff, driving platform initiatives, and championing responsible AI driven development.",
    ),
    (
        "Engineering Manager",
        "Shift • 2020 – 2022",
        "Managed consumer fulfillment teams, advised CTO on technical direction, and built a team culture of learning and growth.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="page">
            <section class="hero fade-in">
                <h1>{"Ben Greene"}</h1>
                <p class="hero-subtitle">{"Engineering Leader & Builder"}</p>
                <p class="hero-lead">
                    {"Professional engineering leader passionate about building effective teams, shipping software, and mentoring engineers."}
                </p>
                <div class="button-row">
                    <Link<Route> to={Route::About} classes="button button-primary button-lg">
                        {"About Me"}
                    </Link<Route>>
                    <a class="button button-secondary button-lg" href="https://github.com/ben-edgar" target="_blank" rel="noopener noreferrer">
                        {"GitHub"}
                    </a>
                </div>
            </section>

            <section class="section section-muted">
                <h2 class="slide-up">{"Experience"}</h2>
                <div class="card-grid two-up">
                    { for EXPERIENCE.iter().map(|(role, place, summary)| html! {
                        <article class="card">
                            <h3>{*role}</h3>
                            <p class="card-accent">{*place}</p>
                            <p class="card-body">{*summary}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section class="section narrow center">
                <h2 class="slide-up">{"Current Project: DadTrack"}</h2>
                <p class="lead fade-in">
                    {"As an engineering leader and dad, I built DadTrack from a simple insight: parenting is one of the most meaningful journeys we take, yet the moments slip away too quickly. DadTrack helps dads capture the small, everyday moments (the moods, the memories, the milestones) so you can reflect on them, share them with family, and never lose sight of what matters most."}
                </p>
                <span class="pill pill-live">
                    <span class="pulse-dot"></span>
                    {"Now Available on iOS and Android!"}
                </span>
                <div class="button-row">
                    <Link<Route> to={Route::DadTrack} classes="button button-primary button-lg">
                        {"Learn More"}
                    </Link<Route>>
                    <a class="button button-secondary button-lg" href={links::google_play_tracked()} target="_blank" rel="noopener noreferrer">
                        {"🤖 Get it on Google Play"}
                    </a>
                </div>
            </section>

            <section class="section section-muted">
                <h2 class="slide-up">{"DadTrack in Action"}</h2>
                <Gallery items={screenshots()} grid_class="gallery-grid three-up" />
            </section>

            <section class="section center">
                <h2 class="slide-up">{"Let's Connect"}</h2>
                <p class="lead">{"Interested in DadTrack or want to connect? I'd love to hear from you."}</p>
                <div class="button-row">
                    <Link<Route> to={Route::Feedback} classes="button button-primary button-lg">
                        {"Share Feedback"}
                    </Link<Route>>
                    <a class="button button-secondary button-lg" href="https://www.linkedin.com/in/benjamin-greene/" target="_blank" rel="noopener noreferrer">
                        {"LinkedIn"}
                    </a>
                </div>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn screenshots_ship_with_the_site() {
        let public = Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for shot in screenshots() {
            let src = shot.src.strip_prefix(config::base_path()).unwrap_or(shot.src.as_str());
            assert!(public.join(src.trim_start_matches('/')).is_file(), "missing {}", src);
        }
    }
}
