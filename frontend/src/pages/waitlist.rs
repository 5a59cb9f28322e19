use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::forms::FormKind;

#[function_component(Waitlist)]
pub fn waitlist() -> Html {
    html! {
        <main class="page">
            <section class="section narrow">
                <div class="form-intro">
                    <h1>{"Join the DadTrack Waitlist"}</h1>
                    <p class="hero-subtitle">{"Be first in line for new features and platforms"}</p>
                    <p class="lead">
                        {"Tell us which phone you use and we'll reach out when DadTrack's next release lands there."}
                    </p>
                </div>

                <ContactForm
                    kind={FormKind::Waitlist}
                    comment_label="Anything you'd like to see? (optional)"
                    comment_placeholder="Features you're excited about, ideas, questions..."
                    submit_label="Join the Waitlist"
                />

                <div class="form-outro">
                    <p class="muted">{"We'll only email you about DadTrack. No spam, ever."}</p>
                </div>
            </section>
        </main>
    }
}
