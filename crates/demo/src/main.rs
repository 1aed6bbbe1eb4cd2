//! Pretty Shop Demo Application

use leptos::prelude::*;
use pretty_shop::prelude::*;

mod cart;
mod checkout;
mod fields;
mod header;
mod logging;
mod payment;
mod products;
mod seller;
mod summary;
mod timers;

/// Top-level page. Payment stages share one page so the card form survives
/// a cancelled payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Dashboard,
    Shop,
    Checkout,
    Payment,
}

impl From<Screen> for Page {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Dashboard => Self::Dashboard,
            Screen::Shop => Self::Shop,
            Screen::Checkout => Self::Checkout,
            Screen::Payment(_) => Self::Payment,
        }
    }
}

/// Main demo app shell.
#[component]
fn App() -> impl IntoView {
    match Storefront::demo() {
        Ok(storefront) => {
            let store = RwSignal::new(storefront);
            let notice = RwSignal::new(None::<String>);
            let page = Memo::new(move |_| Page::from(store.with(Storefront::screen)));

            view! {
                <div class="app">
                    <p class="notice" role="status" aria-live="polite" aria-atomic="true">
                        {move || notice.get()}
                    </p>
                    {move || match page.get() {
                        Page::Dashboard => view! {
                            <seller::SellerDashboard store=store notice=notice />
                        }
                        .into_any(),
                        Page::Shop => view! {
                            <header::Header store=store />
                            <products::ProductGrid store=store notice=notice />
                            <cart::CartPanel store=store notice=notice />
                            <seller::SellerLoginModal store=store />
                        }
                        .into_any(),
                        Page::Checkout => view! {
                            <checkout::CheckoutPage store=store notice=notice />
                        }
                        .into_any(),
                        Page::Payment => view! {
                            <payment::PaymentPage store=store notice=notice />
                        }
                        .into_any(),
                    }}
                </div>
            }
            .into_any()
        }
        Err(error) => view! {
            <main class="app app-error">
                <h1 class="brand-title">"Pretty Shop"</h1>
                <p class="error-text">{format!("Failed to load the store: {error}")}</p>
            </main>
        }
        .into_any(),
    }
}

/// Main entry point
fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    leptos::mount::mount_to_body(App);
}

/// Runs a store operation and reports its error, if any, as the notice.
fn report<E: std::fmt::Display>(notice: RwSignal<Option<String>>, result: Result<(), E>) {
    match result {
        Ok(()) => notice.set(None),
        Err(error) => {
            tracing::warn!(%error, "storefront action rejected");
            notice.set(Some(error.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_stages_share_one_page() {
        assert_eq!(Page::from(Screen::Payment(PaymentStage::Entry)), Page::Payment);
        assert_eq!(Page::from(Screen::Payment(PaymentStage::Processing)), Page::Payment);
        assert_eq!(Page::from(Screen::Payment(PaymentStage::Succeeded)), Page::Payment);
    }

    #[test]
    fn dashboard_screen_maps_to_dashboard_page() {
        assert_eq!(Page::from(Screen::Dashboard), Page::Dashboard);
        assert_eq!(Page::from(Screen::Shop), Page::Shop);
    }

    #[test]
    fn report_sets_and_clears_notice() {
        let notice = RwSignal::new(None::<String>);

        report(notice, Err::<(), _>("Cannot Back from Shop"));

        assert_eq!(notice.get_untracked().as_deref(), Some("Cannot Back from Shop"));

        report::<String>(notice, Ok(()));

        assert_eq!(notice.get_untracked(), None);
    }
}
