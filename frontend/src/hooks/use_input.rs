//! Hook for a controlled text input.

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Return value from the use_input hook.
pub struct UseInput {
    /// Current text
    pub value: String,
    /// Wire to the input's `oninput`
    pub oninput: Callback<InputEvent>,
}

/// Track the text of an `<input>`, starting empty.
///
/// # Example
/// ```ignore
/// let user_id = use_input();
/// html! { <input value={user_id.value.clone()} oninput={user_id.oninput.clone()} /> }
/// ```
#[hook]
pub fn use_input() -> UseInput {
    let state = use_state(String::new);

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    UseInput {
        value: (*state).clone(),
        oninput,
    }
}
