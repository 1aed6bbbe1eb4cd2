use leptos::prelude::*;

/// Binds one `String` field of a form signal to an input.
pub fn bind<T>(
    form: RwSignal<T>,
    get: fn(&T) -> &String,
    set: fn(&mut T, String),
) -> (Signal<String>, Callback<String>)
where
    T: Send + Sync + 'static,
{
    (
        Signal::derive(move || form.with(|value| get(value).clone())),
        Callback::new(move |value: String| form.update(|form| set(form, value))),
    )
}

/// Like [`bind`], but passes each edit through `format`. A rejected edit
/// re-renders the previous value so the input does not drift.
pub fn bind_formatted<T>(
    form: RwSignal<T>,
    get: fn(&T) -> &String,
    set: fn(&mut T, String),
    format: fn(&str) -> Option<String>,
) -> (Signal<String>, Callback<String>)
where
    T: Send + Sync + 'static,
{
    (
        Signal::derive(move || form.with(|value| get(value).clone())),
        Callback::new(move |raw: String| match format(&raw) {
            Some(value) => form.update(|form| set(form, value)),
            None => form.update(|_| {}),
        }),
    )
}

/// Labelled text input.
#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] optional: bool,
    #[prop(optional)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                class="field-input"
                type=input_type.unwrap_or("text")
                name=name
                placeholder=placeholder.unwrap_or_default()
                required=!optional
                disabled=move || disabled.is_some_and(|disabled| disabled.get())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

#[cfg(test)]
mod tests {
    use pretty_shop::payment::format_cvv;

    use super::*;

    #[derive(Debug, Default)]
    struct Form {
        cvv: String,
    }

    #[test]
    fn bind_writes_through_to_form() {
        let form = RwSignal::new(Form::default());
        let (value, on_input) = bind(form, |form| &form.cvv, |form, value| form.cvv = value);

        on_input.run("12".to_string());

        assert_eq!(value.get_untracked(), "12");
    }

    #[test]
    fn bind_formatted_keeps_previous_value_on_rejected_edit() {
        let form = RwSignal::new(Form::default());
        let (value, on_input) =
            bind_formatted(form, |form| &form.cvv, |form, value| form.cvv = value, format_cvv);

        on_input.run("1234".to_string());
        on_input.run("12345".to_string());

        assert_eq!(value.get_untracked(), "1234");
    }
}
