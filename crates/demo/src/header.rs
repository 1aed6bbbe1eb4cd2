use leptos::prelude::*;
use pretty_shop::prelude::*;

/// Badge text for the cart button; hidden when the cart is empty.
pub fn cart_badge(count: u32) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

/// Shop header with the seller entry point and the cart button.
#[component]
pub fn Header(store: RwSignal<Storefront>) -> impl IntoView {
    let badge = Memo::new(move |_| cart_badge(store.with(Storefront::cart_item_count)));

    view! {
        <header class="shop-header">
            <div class="brand">
                <span class="brand-mark" aria-hidden="true">"♥"</span>
                <div>
                    <h1 class="brand-title">"Pretty Shop"</h1>
                    <p class="brand-tagline">"Your beauty destination"</p>
                </div>
            </div>
            <div class="header-actions">
                <button
                    type="button"
                    class="button button-outline"
                    on:click=move |_| store.update(Storefront::open_seller_login)
                >
                    "Sell"
                </button>
                <button
                    type="button"
                    class="button button-outline cart-button"
                    aria-label=move || {
                        badge
                            .get()
                            .map_or_else(|| "Open cart".to_string(), |count| format!("Open cart ({count} items)"))
                    }
                    on:click=move |_| store.update(Storefront::open_cart)
                >
                    "Cart"
                    {move || {
                        badge
                            .get()
                            .map(|count| view! { <span class="cart-badge">{count}</span> })
                    }}
                </button>
            </div>
        </header>
    }
}
