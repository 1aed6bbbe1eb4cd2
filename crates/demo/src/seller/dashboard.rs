use jiff::Timestamp;
use leptos::{ev::SubmitEvent, prelude::*};
use pretty_shop::prelude::*;

use crate::{
    fields::{TextField, bind},
    products::ProductCardItem,
    report,
};

/// Formatted dashboard figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub products: String,
    pub total_value: String,
    pub sales: String,
}

impl StatsView {
    pub fn new(stats: &DashboardStats, config: &StoreConfig) -> Self {
        Self {
            products: stats.product_count.to_string(),
            total_value: format_money(stats.total_value, config.currency),
            sales: stats.sales.to_string(),
        }
    }
}

/// Heading line for the logged-in seller.
pub fn welcome_line(account: &SellerAccount) -> String {
    format!("Welcome back, {}", account.name)
}

#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <strong class="stat-value">{move || value.get()}</strong>
        </div>
    }
}

#[component]
fn AddProductPanel(
    store: RwSignal<Storefront>,
    notice: RwSignal<Option<String>>,
    open: RwSignal<bool>,
) -> impl IntoView {
    let form = RwSignal::new(ProductForm::default());

    let (name, on_name) = bind(form, |f| &f.name, |f, v| f.name = v);
    let (price, on_price) = bind(form, |f| &f.price, |f, v| f.price = v);
    let (category, on_category) = bind(form, |f| &f.category, |f, v| f.category = v);
    let (description, on_description) =
        bind(form, |f| &f.description, |f, v| f.description = v);
    let (image_url, on_image_url) = bind(form, |f| &f.image_url, |f, v| f.image_url = v);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let submitted = form.get_untracked();

        let Some(result) = store.try_update(|store| store.add_product(submitted, Timestamp::now()))
        else {
            return;
        };

        let added = result.is_ok();

        report(notice, result.map(|_id| ()));

        if added {
            form.set(ProductForm::default());
            open.set(false);
        }
    };

    view! {
        <form class="panel add-product" on:submit=on_submit>
            <h3 class="panel-title">"Add New Product"</h3>
            <div class="form-grid">
                <TextField label="Product Name" name="name" value=name on_input=on_name />
                <TextField
                    label="Price"
                    name="price"
                    input_type="number"
                    placeholder="0.00"
                    value=price
                    on_input=on_price
                />
                <TextField label="Category" name="category" value=category on_input=on_category />
                <TextField
                    label="Image URL"
                    name="image"
                    input_type="url"
                    optional=true
                    value=image_url
                    on_input=on_image_url
                />
            </div>
            <TextField
                label="Description"
                name="description"
                value=description
                on_input=on_description
            />
            <div class="form-actions">
                <button type="submit" class="button button-primary">
                    "Add Product"
                </button>
                <button type="button" class="button" on:click=move |_| open.set(false)>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

#[component]
fn SellerProductRow(product: ProductCardItem) -> impl IntoView {
    view! {
        <li class="seller-product">
            <img class="seller-product-image" src=product.image alt=product.name.clone() />
            <div class="seller-product-info">
                <h4 class="seller-product-name">{product.name}</h4>
                <span class="product-category">{product.category}</span>
            </div>
            <span class="seller-product-price">{product.price}</span>
            <div class="seller-product-actions">
                <button type="button" class="button" disabled=true>
                    "Edit"
                </button>
                <button type="button" class="button button-danger" disabled=true>
                    "Delete"
                </button>
            </div>
        </li>
    }
}

/// Seller dashboard shown while a seller is logged in.
#[component]
pub fn SellerDashboard(
    store: RwSignal<Storefront>,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let adding = RwSignal::new(false);

    let stats = Memo::new(move |_| {
        store.with(|store| StatsView::new(&store.dashboard_stats(), store.config()))
    });

    let account = Memo::new(move |_| store.with(|store| store.seller().cloned()));

    let products = Memo::new(move |_| {
        store.with(|store| {
            store
                .seller_products()
                .map(|product| ProductCardItem::new(product, store.config()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <main class="dashboard">
            <header class="dashboard-header">
                <div>
                    <h1 class="brand-title">"Seller Dashboard"</h1>
                    <p class="brand-subtitle">
                        {move || account.get().map(|account| account.store_name)}
                    </p>
                </div>
                <div class="dashboard-account">
                    <span>{move || account.get().as_ref().map(welcome_line)}</span>
                    <button
                        type="button"
                        class="button"
                        on:click=move |_| {
                            notice.set(None);
                            store.update(Storefront::logout_seller);
                        }
                    >
                        "Logout"
                    </button>
                </div>
            </header>

            <section class="stats" aria-label="Store statistics">
                <StatCard label="Products" value=Signal::derive(move || stats.get().products) />
                <StatCard
                    label="Total Value"
                    value=Signal::derive(move || stats.get().total_value)
                />
                <StatCard label="Sales" value=Signal::derive(move || stats.get().sales) />
            </section>

            <section class="seller-products">
                <div class="section-header">
                    <h2 class="section-title">"My Products"</h2>
                    <button
                        type="button"
                        class="button button-primary"
                        on:click=move |_| adding.update(|open| *open = !*open)
                    >
                        "Add Product"
                    </button>
                </div>

                {move || {
                    adding
                        .get()
                        .then(|| view! { <AddProductPanel store=store notice=notice open=adding /> })
                }}

                {move || {
                    if products.with(Vec::is_empty) {
                        view! {
                            <div class="empty-state">
                                <p class="empty-title">"No products yet"</p>
                                <p class="empty-hint">"Click \"Add Product\" to get started"</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <ul class="seller-product-list">
                                <For
                                    each=move || products.get()
                                    key=|product| product.id
                                    children=move |product| view! { <SellerProductRow product=product /> }
                                />
                            </ul>
                        }
                        .into_any()
                    }
                }}
            </section>
        </main>
    }
}
