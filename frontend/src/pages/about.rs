use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const SKILLS: &[&str] = &[
    "Flutter & Dart",
    "React & TypeScript",
    "Next.js",
    "Node.js",
    "Java & Spring Boot",
    "Go",
    "Ruby on Rails",
    "Python",
    "Snowflake",
    "GraphQL",
    "SQL & Databases",
    "Team Leadership",
    "AI-Driven Development",
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <main class="page">
            <section class="section narrow">
                <h1 class="fade-in">{"About Me"}</h1>
                <p class="lead">
                    {"I'm an engineering leader passionate about building effective teams, shipping great software, and mentoring engineers at all levels."}
                </p>
                <p class="lead">
                    {"Beyond work, I'm a dad building DadTrack, an app to help other dads capture and reflect on the precious moments with their kids."}
                </p>
            </section>

            <section class="section narrow section-muted">
                <h2 class="slide-up">{"Why DadTrack?"}</h2>
                <p>
                    {"Becoming a dad fundamentally changed how I see the world. The moments, a laugh, a milestone, a quiet cuddle, are precious but fleeting. I built DadTrack to help dads like me capture these moments, not just to remember them, but to reflect on the journey and share it with friends and family."}
                </p>
                <p>
                    {"It's a low-effort, high-impact app designed with the busy dad in mind. One daily journal entry, some photos, a mood tag, and over time you build a rich archive of memories. That's the magic."}
                </p>
                <Link<Route> to={Route::DadTrack} classes="button button-secondary">
                    {"See DadTrack"}
                </Link<Route>>
            </section>

            <section class="section narrow">
                <h2 class="slide-up">{"Technical Expertise"}</h2>
                <ul class="skill-list">
                    { for SKILLS.iter().map(|skill| html! { <li class="pill">{*skill}</li> }) }
                </ul>
            </section>

            <section class="section narrow">
                <h2 class="slide-up">{"Education"}</h2>
                <article class="card">
                    <h3>{"University of Virginia"}</h3>
                    <p class="card-accent">{"Bachelor of Science in Computer Science"}</p>
                    <p class="card-body">{"Engineering Business Minor • Graduated May 2015"}</p>
                </article>
            </section>
        </main>
    }
}
