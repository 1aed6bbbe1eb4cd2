use leptos::{ev::SubmitEvent, prelude::*};
use pretty_shop::prelude::*;
use pretty_shop::prelude::View;

use crate::{
    fields::{TextField, bind, bind_formatted},
    report,
    summary::OrderSummaryCard,
    timers::drive_payment,
};

/// Label for the submit button in each payment stage.
pub fn submit_label(stage: PaymentStage, total: &str) -> String {
    match stage {
        PaymentStage::Entry => format!("Pay {total}"),
        PaymentStage::Processing => "Processing...".to_string(),
        PaymentStage::Succeeded => "Paid".to_string(),
    }
}

fn payment_stage(store: &Storefront) -> PaymentStage {
    match store.view() {
        View::Payment(stage) => stage,
        View::Shop | View::Checkout => PaymentStage::Entry,
    }
}

#[component]
fn PaymentSucceeded(email: String) -> impl IntoView {
    view! {
        <div class="page page-centered">
            <div class="success-card">
                <span class="success-mark" aria-hidden="true">"✓"</span>
                <h2 class="success-title">"Payment Successful!"</h2>
                <p>"Thank you for your order"</p>
                <p class="success-detail">
                    "Order confirmation has been sent to " <strong>{email}</strong>
                </p>
            </div>
        </div>
    }
}

#[component]
fn ShippingAddress(info: ShippingInfo) -> impl IntoView {
    view! {
        <div class="address-card">
            <h3 class="summary-title">"Shipping to"</h3>
            <p>{info.full_name.clone()}</p>
            <p>{info.address.clone()}</p>
            <p>{info.locality_line()}</p>
            <p>{info.country}</p>
        </div>
    }
}

/// Card form with the simulated payment.
#[component]
pub fn PaymentPage(
    store: RwSignal<Storefront>,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let form = RwSignal::new(PaymentForm::default());
    let stage = Memo::new(move |_| store.with(payment_stage));
    let succeeded = Memo::new(move |_| stage.get() == PaymentStage::Succeeded);
    let locked = Signal::derive(move || stage.get() != PaymentStage::Entry);
    let shipping = Memo::new(move |_| store.with(|store| store.shipping().cloned()));
    let total = Memo::new(move |_| {
        store.with(|store| format_money(store.totals().total, store.config().currency))
    });

    let (card_number, on_card_number) = bind_formatted(
        form,
        |f| &f.card_number,
        |f, v| f.card_number = v,
        format_card_number,
    );
    let (card_name, on_card_name) = bind(form, |f| &f.card_name, |f, v| f.card_name = v);
    let (expiry_date, on_expiry_date) = bind_formatted(
        form,
        |f| &f.expiry_date,
        |f, v| f.expiry_date = v,
        format_expiry,
    );
    let (cvv, on_cvv) = bind_formatted(form, |f| &f.cvv, |f, v| f.cvv = v, format_cvv);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let card = form.get_untracked();

        let Some(result) = store.try_update(|store| store.submit_payment(&card)) else {
            return;
        };

        match result {
            Ok(ticket) => {
                notice.set(None);
                drive_payment(store, ticket);
            }
            Err(error) => report(notice, Err::<(), _>(error)),
        }
    };

    move || {
        if succeeded.get() {
            let email = shipping.with_untracked(|info| info.as_ref().map(|info| info.email.clone()));

            return view! { <PaymentSucceeded email=email.unwrap_or_default() /> }.into_any();
        }

        view! {
            <div class="page">
                <header class="page-header">
                    <button
                        type="button"
                        class="button button-ghost"
                        disabled=move || locked.get()
                        on:click=move |_| {
                            if let Some(result) = store.try_update(Storefront::back) {
                                report(notice, result);
                            }
                        }
                    >
                        "← Back to Shipping"
                    </button>
                </header>
                <div class="page-columns">
                    <form class="form-card" on:submit=on_submit>
                        <h2 class="form-title">"Payment Details"</h2>
                        <TextField
                            label="Card Number"
                            name="cardNumber"
                            placeholder="1234 5678 9012 3456"
                            value=card_number
                            on_input=on_card_number
                            disabled=locked
                        />
                        <TextField
                            label="Cardholder Name"
                            name="cardName"
                            placeholder="John Doe"
                            value=card_name
                            on_input=on_card_name
                            disabled=locked
                        />
                        <div class="form-row">
                            <TextField
                                label="Expiry Date"
                                name="expiryDate"
                                placeholder="MM/YY"
                                value=expiry_date
                                on_input=on_expiry_date
                                disabled=locked
                            />
                            <TextField
                                label="CVV"
                                name="cvv"
                                placeholder="123"
                                value=cvv
                                on_input=on_cvv
                                disabled=locked
                            />
                        </div>
                        <p class="secure-note">
                            "Secure Payment: your payment information is encrypted and secure"
                        </p>
                        <button
                            type="submit"
                            class="button button-primary button-block"
                            disabled=move || locked.get()
                        >
                            {move || total.with(|total| submit_label(stage.get(), total))}
                        </button>
                        {move || {
                            (stage.get() == PaymentStage::Processing)
                                .then(|| {
                                    view! {
                                        <button
                                            type="button"
                                            class="button button-ghost button-block"
                                            on:click=move |_| {
                                                if let Some(result) = store
                                                    .try_update(Storefront::cancel_payment)
                                                {
                                                    report(notice, result);
                                                }
                                            }
                                        >
                                            "Cancel"
                                        </button>
                                    }
                                })
                        }}
                    </form>
                    <div class="summary-column">
                        {move || shipping.get().map(|info| view! { <ShippingAddress info=info /> })}
                        <OrderSummaryCard store=store />
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
