use leptos::{ev::SubmitEvent, prelude::*};
use pretty_shop::prelude::*;

use crate::{
    fields::{TextField, bind},
    report,
    summary::OrderSummaryCard,
};

/// Shipping form, pre-filled when returning from the payment step.
#[component]
pub fn CheckoutPage(
    store: RwSignal<Storefront>,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let form = RwSignal::new(
        store
            .with_untracked(|store| store.shipping().cloned())
            .unwrap_or_default(),
    );

    let (full_name, on_full_name) = bind(form, |f| &f.full_name, |f, v| f.full_name = v);
    let (email, on_email) = bind(form, |f| &f.email, |f, v| f.email = v);
    let (phone, on_phone) = bind(form, |f| &f.phone, |f, v| f.phone = v);
    let (address, on_address) = bind(form, |f| &f.address, |f, v| f.address = v);
    let (city, on_city) = bind(form, |f| &f.city, |f, v| f.city = v);
    let (state, on_state) = bind(form, |f| &f.state, |f, v| f.state = v);
    let (zip_code, on_zip_code) = bind(form, |f| &f.zip_code, |f, v| f.zip_code = v);
    let (country, on_country) = bind(form, |f| &f.country, |f, v| f.country = v);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let info = form.get_untracked();

        if let Some(result) = store.try_update(|store| store.submit_shipping(info)) {
            report(notice, result);
        }
    };

    view! {
        <div class="page">
            <header class="page-header">
                <button
                    type="button"
                    class="button button-ghost"
                    on:click=move |_| {
                        if let Some(result) = store.try_update(Storefront::back) {
                            report(notice, result);
                        }
                    }
                >
                    "← Back to Cart"
                </button>
            </header>
            <div class="page-columns">
                <form class="form-card" on:submit=on_submit>
                    <h2 class="form-title">"Shipping Information"</h2>
                    <div class="form-row">
                        <TextField label="Full Name" name="fullName" value=full_name on_input=on_full_name />
                        <TextField
                            label="Email"
                            name="email"
                            input_type="email"
                            value=email
                            on_input=on_email
                        />
                    </div>
                    <TextField
                        label="Phone Number"
                        name="phone"
                        input_type="tel"
                        value=phone
                        on_input=on_phone
                    />
                    <TextField label="Street Address" name="address" value=address on_input=on_address />
                    <div class="form-row form-row-3">
                        <TextField label="City" name="city" value=city on_input=on_city />
                        <TextField label="State" name="state" value=state on_input=on_state />
                        <TextField label="ZIP Code" name="zipCode" value=zip_code on_input=on_zip_code />
                    </div>
                    <TextField label="Country" name="country" value=country on_input=on_country />
                    <button type="submit" class="button button-primary button-block">
                        "Continue to Payment"
                    </button>
                </form>
                <OrderSummaryCard store=store />
            </div>
        </div>
    }
}
