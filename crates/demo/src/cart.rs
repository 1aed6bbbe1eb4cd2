use leptos::prelude::*;
use pretty_shop::prelude::*;

use crate::report;

/// UI model for a cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub unit_price: String,
    pub quantity: u32,
}

/// Line models in cart order.
pub fn cart_lines(store: &Storefront) -> Vec<CartLineView> {
    store
        .cart()
        .iter()
        .map(|line| CartLineView {
            id: line.id(),
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            unit_price: format_money(line.product.price, store.config().currency),
            quantity: line.quantity.get(),
        })
        .collect()
}

#[component]
fn CartLine(line: CartLineView, store: RwSignal<Storefront>) -> impl IntoView {
    let id = line.id;
    let remove_label = format!("Remove {} from cart", line.name);

    view! {
        <li class="cart-line">
            <img class="cart-line-image" src=line.image alt=line.name.clone() />
            <div class="cart-line-body">
                <p class="cart-line-name">{line.name}</p>
                <p class="cart-line-price">{line.unit_price}</p>
                <div class="cart-line-controls">
                    <button
                        type="button"
                        class="button button-outline button-small"
                        aria-label="Decrease quantity"
                        on:click=move |_| store.update(|store| store.decrement_quantity(id))
                    >
                        "-"
                    </button>
                    <span class="cart-line-quantity">{line.quantity}</span>
                    <button
                        type="button"
                        class="button button-outline button-small"
                        aria-label="Increase quantity"
                        on:click=move |_| store.update(|store| store.increment_quantity(id))
                    >
                        "+"
                    </button>
                    <button
                        type="button"
                        class="icon-button cart-line-remove"
                        aria-label=remove_label
                        on:click=move |_| store.update(|store| store.remove_from_cart(id))
                    >
                        "×"
                    </button>
                </div>
            </div>
        </li>
    }
}

/// Slide-over cart panel.
#[component]
pub fn CartPanel(
    store: RwSignal<Storefront>,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let is_open = Memo::new(move |_| store.with(Storefront::is_cart_open));
    let lines = Memo::new(move |_| store.with(cart_lines));
    let subtotal = Memo::new(move |_| {
        store.with(|store| format_money(store.totals().subtotal, store.config().currency))
    });

    move || {
        if !is_open.get() {
            return ().into_any();
        }

        view! {
            <div class="cart-backdrop" on:click=move |_| store.update(Storefront::close_cart)></div>
            <aside class="cart-panel" aria-label="Shopping Cart">
                <div class="cart-header">
                    <h2 class="cart-title">"Shopping Cart"</h2>
                    <button
                        type="button"
                        class="icon-button"
                        aria-label="Close cart"
                        on:click=move |_| store.update(Storefront::close_cart)
                    >
                        "×"
                    </button>
                </div>
                {move || {
                    if lines.with(Vec::is_empty) {
                        view! {
                            <div class="cart-empty">
                                <p>"Your cart is empty"</p>
                                <p class="cart-empty-hint">"Add some beautiful items!"</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <ul class="cart-lines">
                                <For
                                    each=move || lines.get()
                                    key=|line| (line.id, line.quantity)
                                    children=move |line| view! { <CartLine line=line store=store /> }
                                />
                            </ul>
                            <div class="cart-footer">
                                <p class="summary-row summary-row-total">
                                    <span>"Total"</span>
                                    <span>{move || subtotal.get()}</span>
                                </p>
                                <button
                                    type="button"
                                    class="button button-primary button-block"
                                    on:click=move |_| {
                                        let result = store.try_update(Storefront::begin_checkout);

                                        if let Some(result) = result {
                                            report(notice, result);
                                        }
                                    }
                                >
                                    "Checkout"
                                </button>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </aside>
        }
        .into_any()
    }
}
