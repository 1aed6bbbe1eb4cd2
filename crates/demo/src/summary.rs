use leptos::prelude::*;
use pretty_shop::prelude::*;
use rust_decimal::Decimal;
use rusty_money::iso::Currency;

/// One label/amount row of an order summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
    pub total: bool,
}

impl SummaryRow {
    fn new(label: impl Into<String>, value: String) -> Self {
        Self {
            label: label.into(),
            value,
            total: false,
        }
    }
}

/// "Name × qty" rows with line totals.
pub fn line_rows(cart: &Cart, currency: &'static Currency) -> Vec<SummaryRow> {
    cart.iter()
        .map(|line| {
            SummaryRow::new(
                format!("{} × {}", line.product.name, line.quantity),
                format_money(line.line_total(), currency),
            )
        })
        .collect()
}

/// Subtotal, shipping, tax and total rows.
pub fn total_rows(totals: &CartTotals, config: &StoreConfig) -> Vec<SummaryRow> {
    let shipping = if totals.shipping_is_free() {
        "FREE".to_string()
    } else {
        format_money(totals.shipping, config.currency)
    };

    let tax_percent = (config.tax_fraction() * Decimal::ONE_HUNDRED)
        .round_dp(2)
        .normalize();

    vec![
        SummaryRow::new("Subtotal", format_money(totals.subtotal, config.currency)),
        SummaryRow::new("Shipping", shipping),
        SummaryRow::new(
            format!("Tax ({tax_percent}%)"),
            format_money(totals.tax, config.currency),
        ),
        SummaryRow {
            total: true,
            ..SummaryRow::new("Total", format_money(totals.total, config.currency))
        },
    ]
}

fn render_rows(rows: Vec<SummaryRow>) -> impl IntoView {
    rows.into_iter()
        .map(|row| {
            let class = if row.total {
                "summary-row summary-row-total"
            } else {
                "summary-row"
            };

            view! {
                <p class=class>
                    <span>{row.label}</span>
                    <span>{row.value}</span>
                </p>
            }
        })
        .collect_view()
}

/// Cart lines and totals, kept in sync with the store.
#[component]
pub fn OrderSummaryCard(store: RwSignal<Storefront>) -> impl IntoView {
    view! {
        <aside class="summary-card">
            <h3 class="summary-title">"Order Summary"</h3>
            <div class="summary-lines">
                {move || {
                    render_rows(store.with(|store| line_rows(store.cart(), store.config().currency)))
                }}
            </div>
            <div class="summary-totals">
                {move || render_rows(store.with(|store| total_rows(&store.totals(), store.config())))}
            </div>
        </aside>
    }
}
