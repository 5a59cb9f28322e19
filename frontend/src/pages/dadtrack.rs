use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::gallery::{Gallery, Screenshot};
use crate::config;
use crate::links;
use crate::Route;

const FEATURES: &[(&str, &str, &str, &str)] = &[
    (
        "Daily Dad Journal",
        "One entry per day to capture moments, moods, and memories. Support for multiple mood tags and up to 5 photos per entry.",
        "/images/dadtrack/add_journal_entry_screen.png",
        "📝",
    ),
    (
        "Multi-Child Support",
        "Manage multiple children with individual profiles. Switch between child timelines or view \"All kids\" in one stream.",
        "/images/dadtrack/home_screen.png",
        "👨‍👩‍👧‍👦",
    ),
    (
        "Magazine Mode",
        "Immersive, full-screen experience with large photos, dramatic typography, and hero animations for reliving your memories.",
        "/images/dadtrack/magazine_mode_journal_entry.png",
        "✨",
    ),
    (
        "Mood Tracking",
        "Create custom mood tags to personalize your journal entries. Track emotional patterns over time with advanced filtering.",
        "/images/dadtrack/manage_mood_screen.png",
        "😊",
    ),
    (
        "Advanced Filtering",
        "Find entries by text, date range, mood tags, specific children, or photo presence. Powerful search to relive any moment.",
        "/images/dadtrack/filter_screen.png",
        "🔍",
    ),
    (
        "Settings & Customization",
        "Configure journal reminders, dark mode, together-time windows, and more. Make the app work for your lifestyle.",
        "/images/dadtrack/settings_screen.png",
        "⚙️",
    ),
];

const KEY_POINTS: &[(&str, &str)] = &[
    (
        "Dad-Focused",
        "Built for dads, by a dad. Speaks in your voice and emphasizes bonding and memory-keeping.",
    ),
    (
        "Low Effort, High Impact",
        "Just take a photo, read a tip, jot a feeling. Over time, build a rich memory archive.",
    ),
    (
        "Family-Inclusive",
        "While dad-focused, includes features that benefit the whole family: sharing, data export, and more.",
    ),
];

const ROADMAP: &[(&str, &[&str])] = &[
    (
        "Milestone 3: Smart Parenting Support",
        &["Dad Tips Feed", "Milestone Tracker", "Family Photo Reminders"],
    ),
    (
        "Milestone 4: Enhanced Experience",
        &["Monthly Memory Highlights", "Advanced Analytics"],
    ),
    (
        "Milestone 5: Platform Expansion",
        &["Wear OS Watch App", "Dad Community Feed"],
    ),
    (
        "Milestone 6: Practical Parenting Tools",
        &["Child Information Hub", "Shopping & Development Guide"],
    ),
];

fn feature_screenshots() -> Vec<Screenshot> {
    FEATURES
        .iter()
        .map(|(title, description, image, icon)| Screenshot {
            src: config::asset_path(image),
            title: AttrValue::Static(*title),
            description: AttrValue::Static(*description),
            icon: Some(*icon),
        })
        .collect()
}

#[function_component(DadTrack)]
pub fn dadtrack() -> Html {
    html! {
        <main class="page">
            <section class="hero fade-in">
                <h1>{"DadTrack"}</h1>
                <p class="hero-subtitle">{"Track the journey, one memory at a time"}</p>
                <p class="hero-lead">
                    {"A daily dad life companion app designed to help you capture moments, moods, and milestones with your kids. One journal entry, some photos, a mood tag, and over time you build a rich archive of memories."}
                </p>
                <div class="button-row">
                    <a class="button button-primary button-lg" href={links::app_store_tracked()} target="_blank" rel="noopener noreferrer">
                        {"🍎 Download on the App Store"}
                    </a>
                    <a class="button button-secondary button-lg" href={links::google_play_tracked()} target="_blank" rel="noopener noreferrer">
                        {"🤖 Get it on Google Play"}
                    </a>
                </div>
            </section>

            <section class="section bordered">
                <h2 class="slide-up">{"What's Included"}</h2>
                <Gallery items={feature_screenshots()} grid_class="gallery-grid two-up" />
            </section>

            <section class="section bordered">
                <h2 class="slide-up">{"Why DadTrack Is Different"}</h2>
                <div class="card-grid three-up">
                    { for KEY_POINTS.iter().map(|(title, description)| html! {
                        <article class="card card-tinted">
                            <h3 class="card-accent">{*title}</h3>
                            <p class="card-body">{*description}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section class="section bordered">
                <h2 class="slide-up">{"Coming Soon"}</h2>
                <div class="card-grid two-up">
                    { for ROADMAP.iter().map(|(milestone, items)| html! {
                        <article class="card">
                            <h3>{*milestone}</h3>
                            <ul class="roadmap-list">
                                { for items.iter().map(|item| html! { <li>{*item}</li> }) }
                            </ul>
                        </article>
                    }) }
                </div>
            </section>

            <section class="section bordered narrow center">
                <h2 class="slide-up">{"Join the Journey"}</h2>
                <p class="lead">
                    {"Help us build the best dad life companion. Early feedback shapes the future of DadTrack."}
                </p>
                <div class="button-row">
                    <Link<Route> to={Route::Waitlist} classes="button button-primary button-lg">
                        {"Join the Waitlist"}
                    </Link<Route>>
                    <Link<Route> to={Route::Feedback} classes="button button-secondary button-lg">
                        {"Send Feedback"}
                    </Link<Route>>
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
        for shot in feature_screenshots() {
            let src = shot.src.strip_prefix(config::base_path()).unwrap_or(shot.src.as_str());
            assert!(public.join(src.trim_start_matches('/')).is_file(), "missing {}", src);
        }
    }
}
