use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::forms::FormKind;

#[function_component(Feedback)]
pub fn feedback() -> Html {
    html! {
        <main class="page">
            <section class="section narrow">
                <div class="form-intro">
                    <h1>{"Share Your Feedback"}</h1>
                    <p class="hero-subtitle">{"Help us build the best dad life companion"}</p>
                    <p class="lead">
                        {"Your thoughts and ideas shape DadTrack. Whether it's a feature request, bug report, or general feedback, we want to hear from you."}
                    </p>
                </div>

                <ContactForm
                    kind={FormKind::Feedback}
                    comment_label="Your Feedback"
                    comment_placeholder="Share your thoughts, feature requests, or bug reports..."
                    submit_label="Submit Feedback"
                />

                <div class="form-outro">
                    <p>{"We read every piece of feedback and appreciate your input."}</p>
                    <p class="muted">{"We'll get back to you as soon as possible."}</p>
                </div>
            </section>
        </main>
    }
}
