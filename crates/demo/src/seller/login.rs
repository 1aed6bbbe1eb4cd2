use jiff::Timestamp;
use leptos::{ev::SubmitEvent, prelude::*};
use pretty_shop::prelude::*;

use crate::fields::{TextField, bind};

/// Modal heading and submit text for each mode.
pub fn mode_copy(mode: LoginMode) -> (&'static str, &'static str, &'static str) {
    match mode {
        LoginMode::Login => ("Seller Login", "Login", "Don't have an account? Register"),
        LoginMode::Register => ("Create Seller Account", "Register", "Already have an account? Login"),
    }
}

/// Seller login and registration modal.
#[component]
pub fn SellerLoginModal(store: RwSignal<Storefront>) -> impl IntoView {
    let is_open = Memo::new(move |_| store.with(Storefront::is_seller_login_open));
    let form = RwSignal::new(SellerLoginForm::default());
    let error = RwSignal::new(None::<String>);
    let mode = Memo::new(move |_| form.with(|form| form.mode));

    let (name, on_name) = bind(form, |f| &f.name, |f, v| f.name = v);
    let (email, on_email) = bind(form, |f| &f.email, |f, v| f.email = v);
    let (password, on_password) = bind(form, |f| &f.password, |f, v| f.password = v);
    let (store_name, on_store_name) = bind(form, |f| &f.store_name, |f, v| f.store_name = v);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let submitted = form.get_untracked();

        let Some(result) = store.try_update(|store| {
            store
                .login_seller(submitted, Timestamp::now())
                .map(|_account| ())
        }) else {
            return;
        };

        match result {
            Ok(()) => {
                error.set(None);
                form.set(SellerLoginForm::default());
            }
            Err(validation) => error.set(Some(validation.to_string())),
        }
    };

    move || {
        if !is_open.get() {
            return ().into_any();
        }

        view! {
            <div class="modal-backdrop">
                <div class="modal" role="dialog" aria-modal="true">
                    <div class="modal-header">
                        <h2 class="modal-title">{move || mode_copy(mode.get()).0}</h2>
                        <button
                            type="button"
                            class="icon-button"
                            aria-label="Close"
                            on:click=move |_| {
                                error.set(None);
                                store.update(Storefront::close_seller_login);
                            }
                        >
                            "×"
                        </button>
                    </div>
                    <form class="modal-body" on:submit=on_submit>
                        {move || {
                            (mode.get() == LoginMode::Register)
                                .then(|| {
                                    view! {
                                        <TextField label="Full Name" name="name" value=name on_input=on_name />
                                    }
                                })
                        }}
                        <TextField
                            label="Email"
                            name="email"
                            input_type="email"
                            value=email
                            on_input=on_email
                        />
                        <TextField
                            label="Password"
                            name="password"
                            input_type="password"
                            value=password
                            on_input=on_password
                        />
                        {move || {
                            (mode.get() == LoginMode::Register)
                                .then(|| {
                                    view! {
                                        <TextField
                                            label="Store Name"
                                            name="storeName"
                                            value=store_name
                                            on_input=on_store_name
                                        />
                                    }
                                })
                        }}
                        {move || error.get().map(|message| view! { <p class="error-text">{message}</p> })}
                        <button type="submit" class="button button-primary button-block">
                            {move || mode_copy(mode.get()).1}
                        </button>
                        <button
                            type="button"
                            class="button button-link"
                            on:click=move |_| {
                                error.set(None);
                                form.update(|form| form.mode = form.mode.toggled());
                            }
                        >
                            {move || mode_copy(mode.get()).2}
                        </button>
                    </form>
                </div>
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_mode_copy() {
        let (title, submit, _) = mode_copy(LoginMode::Register);

        assert_eq!(title, "Create Seller Account");
        assert_eq!(submit, "Register");
    }

    #[test]
    fn login_mode_offers_registration() {
        assert_eq!(mode_copy(LoginMode::Login).2, "Don't have an account? Register");
    }
}
