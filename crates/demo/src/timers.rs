use std::time::Duration;

use leptos::{prelude::*, task};
use pretty_shop::prelude::*;

/// Runs a submitted payment to completion: waits out each ticket's delay and
/// hands it back to the store. Stale tickets are ignored by the store.
pub fn drive_payment(store: RwSignal<Storefront>, processing: PaymentTicket) {
    task::spawn_local(async move {
        wait_for(processing.delay()).await;

        let Some(confirmation) = store
            .try_update(|store| store.payment_processed(processing))
            .flatten()
        else {
            return;
        };

        wait_for(confirmation.delay()).await;

        store.update(|store| {
            store.complete_payment(confirmation);
        });
    });
}

/// Sets `flag` and clears it again after `delay_ms`, unless it was re-armed.
pub fn flash(flag: RwSignal<u64>, delay_ms: i32) {
    flag.update(|generation| *generation = generation.saturating_add(1));

    let armed = flag.get_untracked();

    task::spawn_local(async move {
        wait_for_timeout(delay_ms).await;

        if flag.try_get_untracked() == Some(armed) {
            flag.set(0);
        }
    });
}

/// Converts a delay to the millisecond count `setTimeout` takes.
pub fn timeout_ms(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

async fn wait_for(delay: Duration) {
    wait_for_timeout(timeout_ms(delay)).await;
}

/// Resolves once `window.setTimeout` fires after `delay_ms`.
#[cfg(target_arch = "wasm32")]
async fn wait_for_timeout(delay_ms: i32) {
    use js_sys::{Function, Promise};
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use wasm_bindgen_futures::JsFuture;

    let mut executor = move |resolve: Function, _reject: Function| {
        let Some(window) = web_sys::window() else {
            _ = resolve.call0(&JsValue::NULL);
            return;
        };

        let callback = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });

        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    };

    let promise = Promise::new(&mut executor);
    _ = JsFuture::from(promise).await;
}

/// Native builds have no browser timer; yield once instead.
#[cfg(not(target_arch = "wasm32"))]
async fn wait_for_timeout(_delay_ms: i32) {
    task::tick().await;
}
