use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: String,
    pub oninput: Callback<InputEvent>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    /// Validation message for this field, if any
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Labelled input with an inline error slot.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let class = classes!("form-field", props.error.is_some().then_some("has-error"));

    html! {
        <label class={class}>
            <span class="form-label">{ &props.label }</span>
            <input
                name={props.name.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                oninput={props.oninput.clone()}
                disabled={props.disabled}
            />
            if let Some(error) = &props.error {
                <span class="form-error">{ error }</span>
            }
        </label>
    }
}
