//! Checkout flow
//!
//! The shopper moves `Shop → Checkout → Payment` and back. Payment has its own
//! stages while the simulated payment runs; completing it returns to `Shop`.

use thiserror::Error;
use tracing::info;

use crate::{
    config::PaymentTimings,
    payment::{PaymentForm, PaymentPhase, PaymentSimulation, PaymentTicket},
    validation::ValidationError,
};

pub mod shipping;

pub use shipping::ShippingInfo;

/// Stage of the payment screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentStage {
    /// Card form is editable.
    #[default]
    Entry,

    /// Payment is being "processed"; the form is locked.
    Processing,

    /// Payment went through; the success screen is showing.
    Succeeded,
}

/// Shopper-facing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Product listing.
    #[default]
    Shop,

    /// Shipping form.
    Checkout,

    /// Payment form and its stages.
    Payment(PaymentStage),
}

/// Flow actions, used when reporting a rejected transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    /// Leave the cart for the shipping form.
    BeginCheckout,

    /// Go back one step.
    Back,

    /// Submit the shipping form.
    SubmitShipping,

    /// Submit the payment form.
    SubmitPayment,

    /// Abandon a running payment.
    CancelPayment,
}

/// Errors raised by checkout flow transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// The action is not available from the current view.
    #[error("Cannot {action:?} from {from:?}")]
    InvalidTransition {
        /// View the flow was in
        from: View,

        /// Rejected action
        action: FlowAction,
    },

    /// Navigation is locked while a payment is being processed.
    #[error("Payment is in progress")]
    PaymentInProgress,

    /// A submitted form was incomplete.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Checkout flow state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutFlow {
    view: View,
    shipping: Option<ShippingInfo>,
    cart_open: bool,
    payment: PaymentSimulation,
}

impl CheckoutFlow {
    /// Current view.
    pub fn view(&self) -> View {
        self.view
    }

    /// Shipping details submitted for this checkout, if any.
    pub fn shipping(&self) -> Option<&ShippingInfo> {
        self.shipping.as_ref()
    }

    /// Payment simulation state.
    pub fn payment(&self) -> &PaymentSimulation {
        &self.payment
    }

    /// Whether the cart panel is open.
    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Opens the cart panel.
    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    /// Closes the cart panel.
    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// `Shop → Checkout`, closing the cart panel.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidTransition`] outside the shop view.
    pub fn begin_checkout(&mut self) -> Result<(), FlowError> {
        self.require_view(View::Shop, FlowAction::BeginCheckout)?;

        self.cart_open = false;
        self.transition(View::Checkout);

        Ok(())
    }

    /// Goes back one step.
    ///
    /// `Checkout → Shop` reopens the cart and discards shipping details.
    /// `Payment → Checkout` keeps them so the form stays filled in.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::PaymentInProgress`] once a payment was submitted, or
    /// [`FlowError::InvalidTransition`] from the shop view.
    pub fn back(&mut self) -> Result<(), FlowError> {
        match self.view {
            View::Checkout => {
                self.shipping = None;
                self.cart_open = true;
                self.transition(View::Shop);

                Ok(())
            }
            View::Payment(PaymentStage::Entry) => {
                self.transition(View::Checkout);

                Ok(())
            }
            View::Payment(PaymentStage::Processing | PaymentStage::Succeeded) => {
                Err(FlowError::PaymentInProgress)
            }
            View::Shop => Err(FlowError::InvalidTransition {
                from: self.view,
                action: FlowAction::Back,
            }),
        }
    }

    /// `Checkout → Payment` with validated shipping details.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Validation`] for blank fields, or
    /// [`FlowError::InvalidTransition`] outside the checkout view.
    pub fn submit_shipping(&mut self, info: ShippingInfo) -> Result<(), FlowError> {
        self.require_view(View::Checkout, FlowAction::SubmitShipping)?;

        info.validate()?;

        self.shipping = Some(info);
        self.transition(View::Payment(PaymentStage::Entry));

        Ok(())
    }

    /// Submits the payment form and starts the simulated processing.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Validation`] for blank fields,
    /// [`FlowError::PaymentInProgress`] if a payment is already running, or
    /// [`FlowError::InvalidTransition`] outside the payment view.
    pub fn submit_payment(
        &mut self,
        form: &PaymentForm,
        timings: &PaymentTimings,
    ) -> Result<PaymentTicket, FlowError> {
        if matches!(
            self.view,
            View::Payment(PaymentStage::Processing | PaymentStage::Succeeded)
        ) {
            return Err(FlowError::PaymentInProgress);
        }

        self.require_view(View::Payment(PaymentStage::Entry), FlowAction::SubmitPayment)?;

        form.validate()?;

        let ticket = self.payment.start(timings);
        self.transition(View::Payment(PaymentStage::Processing));

        Ok(ticket)
    }

    /// Delivers the processing ticket; returns the confirmation ticket if it was current.
    pub fn payment_processed(
        &mut self,
        ticket: PaymentTicket,
        timings: &PaymentTimings,
    ) -> Option<PaymentTicket> {
        let next = self.payment.succeed(ticket, timings)?;

        self.transition(View::Payment(PaymentStage::Succeeded));

        Some(next)
    }

    /// Delivers the confirmation ticket. When current, returns to the shop and
    /// drops the shipping details; the caller empties the cart.
    pub fn complete_payment(&mut self, ticket: PaymentTicket) -> bool {
        if !self.payment.complete(ticket) {
            return false;
        }

        self.shipping = None;
        self.transition(View::Shop);

        true
    }

    /// Abandons a payment that is still processing and unlocks the form.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidTransition`] unless a payment is processing.
    pub fn cancel_payment(&mut self) -> Result<(), FlowError> {
        self.require_view(
            View::Payment(PaymentStage::Processing),
            FlowAction::CancelPayment,
        )?;

        self.payment.cancel();
        self.transition(View::Payment(PaymentStage::Entry));

        Ok(())
    }

    /// Returns to the shop, abandoning any checkout in progress.
    pub fn reset(&mut self) {
        if matches!(
            self.payment.phase(),
            PaymentPhase::Processing | PaymentPhase::Succeeded
        ) {
            self.payment.cancel();
        }

        self.shipping = None;
        self.transition(View::Shop);
    }

    fn require_view(&self, view: View, action: FlowAction) -> Result<(), FlowError> {
        if self.view == view {
            Ok(())
        } else {
            Err(FlowError::InvalidTransition {
                from: self.view,
                action,
            })
        }
    }

    fn transition(&mut self, to: View) {
        if self.view != to {
            info!(from = ?self.view, to = ?to, "checkout view changed");
        }

        self.view = to;
    }
}
