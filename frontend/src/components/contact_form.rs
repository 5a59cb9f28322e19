use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::confetti;
use crate::components::fields::{Honeypot, PlatformPicker, TextArea, TextInput};
use crate::config;
use crate::forms::state::{FormState, Status, SubmitBlocked};
use crate::forms::submit::{submit, WebhookTransport};
use crate::forms::{Field, FormKind, Platform};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub kind: FormKind,
    pub comment_label: AttrValue,
    #[prop_or_default]
    pub comment_placeholder: AttrValue,
    pub submit_label: AttrValue,
}

/// Name/email/comment form wired to the webhook. Used by both the feedback
/// and the waitlist page.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let kind = props.kind;
    // Held in a RefCell so the in-flight flag flips synchronously on submit.
    let form = use_mut_ref(move || FormState::new(kind));
    let redraw = use_force_update();

    let on_field = |field: Field| {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |value: String| {
            form.borrow_mut().edit(field, value);
            redraw.force_update();
        })
    };

    let on_platform = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |platform: Platform| {
            form.borrow_mut()
                .edit(Field::Platform, platform.as_str().to_string());
            redraw.force_update();
        })
    };

    let onsubmit = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let attempt = form.borrow_mut().begin_submit();
            redraw.force_update();
            let payload = match attempt {
                Ok(payload) => payload,
                Err(SubmitBlocked::Bot) => {
                    info!("Dropped {:?} submission with honeypot filled", kind);
                    return;
                }
                Err(SubmitBlocked::Invalid) => {
                    let state = form.borrow();
                    let fields: Vec<&str> = state.errors.fields().map(Field::as_str).collect();
                    info!("{} field(s) need attention: {:?}", state.errors.len(), fields);
                    return;
                }
                Err(SubmitBlocked::InFlight) => return,
            };

            let form = form.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                let outcome = submit(config::webhook_url(), &payload, &WebhookTransport).await;
                let success = outcome.success;
                form.borrow_mut().finish(outcome);
                redraw.force_update();
                if success {
                    confetti::celebrate();
                }
            });
        })
    };

    let state = form.borrow().clone();
    let submitting = state.is_submitting();
    let error_of = |field: Field| state.error(field).map(|m| AttrValue::from(m.to_string()));

    html! {
        <form class="contact-form" onsubmit={onsubmit} novalidate={true}>
            <TextInput
                label="Name"
                name={Field::Name.as_str()}
                placeholder="Your name"
                value={state.fields.value(Field::Name).to_string()}
                on_input={on_field(Field::Name)}
                error={error_of(Field::Name)}
                required={true}
                disabled={submitting}
            />
            <TextInput
                label="Email"
                name={Field::Email.as_str()}
                input_type="email"
                placeholder="your@email.com"
                value={state.fields.value(Field::Email).to_string()}
                on_input={on_field(Field::Email)}
                error={error_of(Field::Email)}
                required={true}
                disabled={submitting}
            />
            if kind.requires_platform() {
                <PlatformPicker
                    selected={state.fields.platform}
                    on_select={on_platform}
                    error={error_of(Field::Platform)}
                />
            }
            <TextArea
                label={props.comment_label.clone()}
                name={Field::Comment.as_str()}
                placeholder={props.comment_placeholder.clone()}
                value={state.fields.value(Field::Comment).to_string()}
                on_input={on_field(Field::Comment)}
                error={error_of(Field::Comment)}
                rows={6}
                required={kind.requires_comment()}
                disabled={submitting}
            />
            <Honeypot
                value={state.fields.value(Field::Honeypot).to_string()}
                on_input={on_field(Field::Honeypot)}
            />

            {
                match &state.status {
                    Some(Status::Success(message)) => html! {
                        <div class="status-banner success" role="status">
                            <p>{message.clone()}</p>
                        </div>
                    },
                    Some(Status::Error(message)) => html! {
                        <div class="status-banner error" role="alert">
                            <p>{message.clone()}</p>
                        </div>
                    },
                    None => html! {},
                }
            }

            <button
                type="submit"
                class={classes!("button", "button-primary", "button-lg", "button-full", submitting.then(|| "busy"))}
                disabled={submitting}
            >
                { if submitting { "Submitting...".to_string() } else { props.submit_label.to_string() } }
            </button>
        </form>
    }
}
