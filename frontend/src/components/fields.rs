use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::form::options::Choice;

/// `(id, label)` pairs for every option of `T`.
pub fn choice_options<T: Choice>() -> Vec<(&'static str, &'static str)> {
    T::all().into_iter().map(|item| (item.id(), item.label())).collect()
}

fn label_text(label: &'static str, required: bool, optional_hint: bool) -> Html {
    html! {
        <>
            {label}
            if required {
                <span class="required-mark">{" *"}</span>
            } else if optional_hint {
                <span class="optional-mark">{" (Optional)"}</span>
            }
        </>
    }
}

fn error_line(error: &Option<String>) -> Html {
    match error {
        Some(message) => html! { <p class="error-message">{message}</p> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
    #[prop_or_default]
    pub placeholder: &'static str,
    #[prop_or("text")]
    pub kind: &'static str,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_input: Callback<String>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <div class="field">
            <label for={props.id} class="input-label">{label_text(props.label, props.required, !props.required)}</label>
            <input
                id={props.id}
                type={props.kind}
                class={classes!("input", props.error.is_some().then_some("input-error"))}
                placeholder={props.placeholder}
                value={props.value.clone()}
                {oninput}
            />
            {error_line(&props.error)}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
    #[prop_or_default]
    pub placeholder: &'static str,
    #[prop_or(4)]
    pub rows: u32,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_input: Callback<String>,
}

#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <div class="field">
            <label for={props.id} class="input-label">{label_text(props.label, props.required, !props.required)}</label>
            <textarea
                id={props.id}
                class={classes!("input", props.error.is_some().then_some("input-error"))}
                placeholder={props.placeholder}
                rows={props.rows.to_string()}
                value={props.value.clone()}
                {oninput}
            />
            {error_line(&props.error)}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    /// `(id, label)` pairs.
    pub options: Vec<(&'static str, &'static str)>,
    pub value: String,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_change: Callback<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div class="field">
            <label for={props.id} class="input-label">{label_text(props.label, props.required, false)}</label>
            <select
                id={props.id}
                class={classes!("input", props.error.is_some().then_some("input-error"))}
                {onchange}
            >
                <option value="" disabled={true} selected={props.value.is_empty()}>{props.placeholder}</option>
                { for props.options.iter().map(|(id, label)| html! {
                    <option value={*id} selected={props.value == *id}>{*label}</option>
                }) }
            </select>
            {error_line(&props.error)}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RadioGroupProps {
    pub name: &'static str,
    pub label: &'static str,
    pub options: Vec<(&'static str, &'static str)>,
    pub value: String,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_change: Callback<String>,
}

#[function_component(RadioGroup)]
pub fn radio_group(props: &RadioGroupProps) -> Html {
    html! {
        <div class="field">
            <span class="input-label">{label_text(props.label, true, false)}</span>
            <div class="radio-row">
                { for props.options.iter().map(|(id, label)| {
                    let on_change = props.on_change.clone();
                    let value = id.to_string();
                    let input_id = format!("{}-{}", props.name, id);
                    html! {
                        <label class="radio-option" for={input_id.clone()}>
                            <input
                                type="radio"
                                id={input_id}
                                name={props.name}
                                value={*id}
                                checked={props.value == *id}
                                onchange={Callback::from(move |_: Event| on_change.emit(value.clone()))}
                            />
                            {*label}
                        </label>
                    }
                }) }
            </div>
            {error_line(&props.error)}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckboxGroupProps {
    pub label: &'static str,
    /// `(id, label, checked)` triples.
    pub options: Vec<(&'static str, &'static str, bool)>,
    #[prop_or("checkbox-grid")]
    pub grid_class: &'static str,
    pub on_toggle: Callback<(&'static str, bool)>,
}

#[function_component(CheckboxGroup)]
pub fn checkbox_group(props: &CheckboxGroupProps) -> Html {
    html! {
        <div class="field">
            <span class="input-label">{label_text(props.label, false, true)}</span>
            <div class={props.grid_class}>
                { for props.options.iter().map(|(id, label, checked)| {
                    let on_toggle = props.on_toggle.clone();
                    let id = *id;
                    html! {
                        <label class="checkbox-option" for={id}>
                            <input
                                type="checkbox"
                                id={id}
                                checked={*checked}
                                onchange={Callback::from(move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    on_toggle.emit((id, input.checked()));
                                })}
                            />
                            {*label}
                        </label>
                    }
                }) }
            </div>
        </div>
    }
}
