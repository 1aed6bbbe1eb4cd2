use leptos::prelude::*;
use pretty_shop::prelude::*;

use crate::{report, timers::flash};

/// How long the "Added!" confirmation stays on the button.
const ADDED_FLASH_MS: i32 = 600;

/// UI model for a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardItem {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub description: String,
}

impl ProductCardItem {
    pub fn new(product: &Product, config: &StoreConfig) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: format_money(product.price, config.currency),
            image: product.image.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
        }
    }
}

/// Card models for every listed product, in listing order.
pub fn product_cards(store: &Storefront) -> Vec<ProductCardItem> {
    store
        .catalog()
        .iter()
        .map(|product| ProductCardItem::new(product, store.config()))
        .collect()
}

#[component]
fn ProductCard(
    product: ProductCardItem,
    store: RwSignal<Storefront>,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let favorite = RwSignal::new(false);
    let added = RwSignal::new(0_u64);

    let id = product.id;
    let add_label = format!("Add {} ({}) to cart", product.name, product.price);
    let favorite_label = format!("Favorite {}", product.name);

    view! {
        <article class="product-card">
            <div class="product-media">
                <img class="product-image" src=product.image alt=product.name.clone() />
                <button
                    type="button"
                    aria-label=favorite_label
                    aria-pressed=move || favorite.get().to_string()
                    class=move || {
                        if favorite.get() {
                            "favorite-button favorite-button-active"
                        } else {
                            "favorite-button"
                        }
                    }
                    on:click=move |_| favorite.update(|on| *on = !*on)
                >
                    "♥"
                </button>
                <span class="product-category">{product.category}</span>
            </div>
            <div class="product-body">
                <h3 class="product-name">{product.name}</h3>
                <p class="product-description">{product.description}</p>
                <div class="product-footer">
                    <span class="product-price">{product.price}</span>
                    <button
                        type="button"
                        aria-label=add_label
                        class=move || {
                            if added.get() == 0 {
                                "button button-primary"
                            } else {
                                "button button-primary button-pressed"
                            }
                        }
                        on:click=move |_| {
                            let result = store.try_update(|store| store.add_to_cart(id));

                            if let Some(result) = result {
                                if result.is_ok() {
                                    flash(added, ADDED_FLASH_MS);
                                }

                                report(notice, result);
                            }
                        }
                    >
                        {move || if added.get() == 0 { "Add" } else { "Added!" }}
                    </button>
                </div>
            </div>
        </article>
    }
}

/// Featured product grid.
#[component]
pub fn ProductGrid(
    store: RwSignal<Storefront>,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let cards = Memo::new(move |_| store.with(product_cards));

    view! {
        <main class="shop">
            <div class="shop-intro">
                <h2 class="shop-title">"Featured Collection"</h2>
                <p class="shop-subtitle">
                    "Discover our carefully curated beauty and fashion essentials"
                </p>
            </div>
            <div class="product-grid">
                <For
                    each=move || cards.get()
                    key=|card| card.id
                    children=move |card| {
                        view! { <ProductCard product=card store=store notice=notice /> }
                    }
                />
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn cards_follow_catalog_order_with_formatted_prices() -> TestResult {
        let store = Storefront::demo()?;
        let cards = product_cards(&store);

        let first = cards.first().ok_or("no cards")?;

        assert_eq!(cards.len(), 6);
        assert_eq!(first.name, "Rose Glow Serum");
        assert_eq!(first.price, "$45.99");
        assert_eq!(first.category, "Skincare");

        let last = cards.last().ok_or("no cards")?;

        assert_eq!(last.price, "$52.00");

        Ok(())
    }
}
