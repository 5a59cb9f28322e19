use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::forms::Platform;

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub label: AttrValue,
    pub name: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <div class="field">
            <label for={props.name.clone()}>
                {props.label.to_string()}
                if props.required {
                    <span class="required">{"*"}</span>
                }
            </label>
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                disabled={props.disabled}
                class={classes!("field-input", props.error.is_some().then(|| "invalid"))}
                oninput={oninput}
            />
            if let Some(error) = &props.error {
                <p class="field-error">{error.to_string()}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub label: AttrValue,
    pub name: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or(4)]
    pub rows: u32,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit(area.value());
        })
    };

    html! {
        <div class="field">
            <label for={props.name.clone()}>
                {props.label.to_string()}
                if props.required {
                    <span class="required">{"*"}</span>
                }
            </label>
            <textarea
                id={props.name.clone()}
                name={props.name.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                rows={props.rows.to_string()}
                disabled={props.disabled}
                class={classes!("field-input", props.error.is_some().then(|| "invalid"))}
                oninput={oninput}
            />
            if let Some(error) = &props.error {
                <p class="field-error">{error.to_string()}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlatformPickerProps {
    pub selected: Option<Platform>,
    pub on_select: Callback<Platform>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

/// Large radio cards for choosing a phone platform.
#[function_component(PlatformPicker)]
pub fn platform_picker(props: &PlatformPickerProps) -> Html {
    html! {
        <fieldset class="field platform-picker" aria-invalid={props.error.is_some().to_string()}>
            <legend>{"Which phone do you use?"}<span class="required">{"*"}</span></legend>
            <div role="radiogroup" class="platform-options">
                { for Platform::ALL.into_iter().map(|platform| {
                    let checked = props.selected == Some(platform);
                    let onchange = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: Event| on_select.emit(platform))
                    };
                    html! {
                        <label class={classes!("platform-option", checked.then(|| "selected"))}>
                            <input
                                type="radio"
                                name="platform"
                                class="sr-only"
                                value={platform.as_str()}
                                checked={checked}
                                onchange={onchange}
                            />
                            <span class="platform-icon">{platform.icon()}</span>
                            <span class="platform-label">{platform.label()}</span>
                        </label>
                    }
                }) }
            </div>
            if let Some(error) = &props.error {
                <p class="field-error" role="alert">{error.to_string()}</p>
            }
        </fieldset>
    }
}

#[derive(Properties, PartialEq)]
pub struct HoneypotProps {
    pub value: AttrValue,
    pub on_input: Callback<String>,
}

/// Field hidden from people. Anything typed here marks the sender as a bot.
#[function_component(Honeypot)]
pub fn honeypot(props: &HoneypotProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <input
            type="text"
            name="website"
            value={props.value.clone()}
            style="display: none;"
            tabindex="-1"
            autocomplete="off"
            aria-hidden="true"
            oninput={oninput}
        />
    }
}
