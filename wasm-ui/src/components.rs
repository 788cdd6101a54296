//! Playground and registration widgets.

use crawlic::{ApiResult, Endpoint, Status};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// CSS class for the response badge.
pub fn badge_class(status: Status) -> &'static str {
    match status {
        Status::Success => "badge badge-success",
        Status::Error => "badge badge-error",
    }
}

/// Button caption: `busy` while a request is outstanding.
pub fn button_label(loading: bool, idle: &'static str, busy: &'static str) -> &'static str {
    if loading { busy } else { idle }
}

/// Single-line input that reports every edit.
#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or("text")]
    pub input_type: &'static str,
    #[prop_or_default]
    pub placeholder: &'static str,
    #[prop_or_default]
    pub mono: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    html! {
        <input
            type={props.input_type}
            class={classes!("text-field", props.mono.then_some("mono"))}
            placeholder={props.placeholder}
            value={props.value.clone()}
            oninput={on_input}
        />
    }
}

/// "Get Your API Key" card.
#[derive(Properties, PartialEq)]
pub struct RegistrationCardProps {
    pub name: String,
    pub email: String,
    pub loading: bool,
    pub free_tier_note: &'static str,
    pub on_name: Callback<String>,
    pub on_email: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(RegistrationCard)]
pub fn registration_card(props: &RegistrationCardProps) -> Html {
    let on_click = props.on_submit.reform(|_: MouseEvent| ());

    html! {
        <section id="get-key" class="section narrow">
            <div class="card card-large">
                <div class="card-intro">
                    <div class="icon icon-large accent-yellow">{ "\u{1F511}" }</div>
                    <h2>{ "Get Your API Key" }</h2>
                    <p class="muted">{ props.free_tier_note }</p>
                </div>
                <div class="stack">
                    <TextField
                        value={props.name.clone()}
                        placeholder="Your Name"
                        on_change={props.on_name.clone()}
                    />
                    <TextField
                        value={props.email.clone()}
                        input_type="email"
                        placeholder="your@email.com"
                        on_change={props.on_email.clone()}
                    />
                    <button class="button primary wide" onclick={on_click} disabled={props.loading}>
                        { button_label(props.loading, "Generate API Key", "Generating...") }
                    </button>
                </div>
            </div>
        </section>
    }
}

/// Endpoint list; the active one is highlighted and check-marked.
#[derive(Properties, PartialEq)]
pub struct EndpointPickerProps {
    pub selected: Endpoint,
    pub on_select: Callback<Endpoint>,
}

#[function_component(EndpointPicker)]
pub fn endpoint_picker(props: &EndpointPickerProps) -> Html {
    html! {
        <div class="card">
            <label class="field-label">{ "Select Endpoint" }</label>
            <div class="endpoint-list">
                { for Endpoint::ALL.iter().map(|&endpoint| {
                    let active = endpoint == props.selected;
                    let onclick = props.on_select.reform(move |_: MouseEvent| endpoint);
                    html! {
                        <button
                            key={endpoint.id()}
                            class={classes!("endpoint", active.then_some("active"))}
                            {onclick}
                        >
                            <div class="endpoint-text">
                                <div class="endpoint-name">{ endpoint.name() }</div>
                                <div class="endpoint-description">{ endpoint.description() }</div>
                            </div>
                            if active {
                                <span class="check">{ "\u{2713}" }</span>
                            }
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

/// Response pane: status badge plus the response as indented JSON.
#[derive(Properties, PartialEq)]
pub struct ResponsePanelProps {
    pub result: Option<ApiResult>,
}

#[function_component(ResponsePanel)]
pub fn response_panel(props: &ResponsePanelProps) -> Html {
    html! {
        <div class="card response-panel">
            <div class="response-header">
                <h3>{ "Response" }</h3>
                if let Some(result) = &props.result {
                    <span class={badge_class(result.status())}>{ result.status().label() }</span>
                }
            </div>
            <div class="response-body">
                if let Some(result) = &props.result {
                    <pre class="response-json">{ result.pretty() }</pre>
                } else {
                    <div class="response-placeholder">
                        { "Response will appear here after testing" }
                    </div>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_badge_follows_success_field() {
        let ok = ApiResult::new(json!({ "success": true, "html": "<html></html>" }));
        let err = ApiResult::failure("Failed to fetch");
        assert_eq!(badge_class(ok.status()), "badge badge-success");
        assert_eq!(badge_class(err.status()), "badge badge-error");
    }

    #[wasm_bindgen_test]
    fn test_button_label() {
        assert_eq!(button_label(false, "Test Endpoint", "Testing..."), "Test Endpoint");
        assert_eq!(button_label(true, "Test Endpoint", "Testing..."), "Testing...");
    }
}
