//! Simulated payment
//!
//! Payment never talks to a processor. Submitting the form starts a two-phase
//! simulation: after the processing delay the payment "succeeds", and after the
//! confirmation delay the order completes. The host schedules each phase by
//! waiting [`PaymentTicket::delay`] and handing the ticket back.
//!
//! Every run gets a new generation. Tickets from an older generation are
//! ignored, which is how a run is cancelled.

use std::time::Duration;

use tracing::{debug, info};

use crate::{
    config::PaymentTimings,
    validation::{ValidationError, require_fields},
};

pub mod format;

pub use format::{format_card_number, format_cvv, format_expiry};

/// Card details captured by the payment form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentForm {
    /// Card number, grouped in fours
    pub card_number: String,

    /// Cardholder name
    pub card_name: String,

    /// Expiry as `MM/YY`
    pub expiry_date: String,

    /// Security code
    pub cvv: String,
}

impl PaymentForm {
    /// Checks every field is filled in. The values themselves are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] naming the blank fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_fields([
            ("card_number", self.card_number.as_str()),
            ("card_name", self.card_name.as_str()),
            ("expiry_date", self.expiry_date.as_str()),
            ("cvv", self.cvv.as_str()),
        ])
    }
}

/// Phase of the payment simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentPhase {
    /// Nothing submitted.
    #[default]
    Idle,

    /// Waiting for the processing delay.
    Processing,

    /// Payment accepted; waiting for the confirmation delay.
    Succeeded,

    /// Order completed.
    Completed,
}

/// Scheduled step of a payment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentTicket {
    generation: u64,
    due: PaymentPhase,
    delay: Duration,
}

impl PaymentTicket {
    /// How long the host should wait before handing the ticket back.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Phase the simulation enters when this ticket is delivered.
    pub fn due(&self) -> PaymentPhase {
        self.due
    }

    /// Run this ticket belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Two-phase payment simulation with cancellation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentSimulation {
    phase: PaymentPhase,
    generation: u64,
}

impl PaymentSimulation {
    /// Current phase.
    pub fn phase(&self) -> PaymentPhase {
        self.phase
    }

    /// Current run generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a new run, superseding any earlier one.
    pub fn start(&mut self, timings: &PaymentTimings) -> PaymentTicket {
        self.generation = self.generation.wrapping_add(1);
        self.phase = PaymentPhase::Processing;

        info!(generation = self.generation, "payment processing started");

        self.ticket(PaymentPhase::Succeeded, timings.processing)
    }

    /// Delivers the processing ticket, returning the confirmation ticket.
    ///
    /// Returns `None` for stale or out-of-order tickets.
    pub fn succeed(
        &mut self,
        ticket: PaymentTicket,
        timings: &PaymentTimings,
    ) -> Option<PaymentTicket> {
        if !self.accepts(ticket, PaymentPhase::Processing, PaymentPhase::Succeeded) {
            return None;
        }

        self.phase = PaymentPhase::Succeeded;

        info!(generation = self.generation, "payment succeeded");

        Some(self.ticket(PaymentPhase::Completed, timings.confirmation))
    }

    /// Delivers the confirmation ticket. Returns whether the run completed.
    pub fn complete(&mut self, ticket: PaymentTicket) -> bool {
        if !self.accepts(ticket, PaymentPhase::Succeeded, PaymentPhase::Completed) {
            return false;
        }

        self.phase = PaymentPhase::Completed;

        info!(generation = self.generation, "payment completed");

        true
    }

    /// Abandons the current run; its outstanding tickets become stale.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.phase = PaymentPhase::Idle;

        debug!(generation = self.generation, "payment run cancelled");
    }

    fn accepts(&self, ticket: PaymentTicket, from: PaymentPhase, to: PaymentPhase) -> bool {
        let accepted = ticket.generation == self.generation && self.phase == from && ticket.due == to;

        if !accepted {
            debug!(
                ticket_generation = ticket.generation,
                generation = self.generation,
                phase = ?self.phase,
                "ignored stale payment ticket"
            );
        }

        accepted
    }

    fn ticket(&self, due: PaymentPhase, delay: Duration) -> PaymentTicket {
        PaymentTicket {
            generation: self.generation,
            due,
            delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn timings() -> PaymentTimings {
        PaymentTimings {
            processing: Duration::from_millis(10),
            confirmation: Duration::from_millis(20),
        }
    }

    #[test]
    fn form_requires_every_field() {
        let form = PaymentForm {
            card_number: "4111 1111 1111 1111".to_string(),
            ..PaymentForm::default()
        };

        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingFields(vec![
                "card_name",
                "expiry_date",
                "cvv"
            ]))
        );
    }

    #[test]
    fn form_accepts_unchecked_card_details() {
        let form = PaymentForm {
            card_number: "0000".to_string(),
            card_name: "Jane Doe".to_string(),
            expiry_date: "99/99".to_string(),
            cvv: "1".to_string(),
        };

        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn simulation_runs_both_phases() -> TestResult {
        let mut simulation = PaymentSimulation::default();

        let processing = simulation.start(&timings());

        assert_eq!(simulation.phase(), PaymentPhase::Processing);
        assert_eq!(processing.delay(), Duration::from_millis(10));
        assert_eq!(processing.due(), PaymentPhase::Succeeded);

        let confirmation = simulation
            .succeed(processing, &timings())
            .ok_or("processing ticket rejected")?;

        assert_eq!(simulation.phase(), PaymentPhase::Succeeded);
        assert_eq!(confirmation.delay(), Duration::from_millis(20));

        assert!(simulation.complete(confirmation));
        assert_eq!(simulation.phase(), PaymentPhase::Completed);

        Ok(())
    }

    #[test]
    fn cancelled_run_ignores_its_tickets() {
        let mut simulation = PaymentSimulation::default();
        let processing = simulation.start(&timings());

        simulation.cancel();

        assert_eq!(simulation.succeed(processing, &timings()), None);
        assert_eq!(simulation.phase(), PaymentPhase::Idle);
    }

    #[test]
    fn restarted_run_ignores_previous_tickets() {
        let mut simulation = PaymentSimulation::default();
        let first = simulation.start(&timings());
        let second = simulation.start(&timings());

        assert_eq!(simulation.succeed(first, &timings()), None);
        assert!(simulation.succeed(second, &timings()).is_some());
    }

    #[test]
    fn confirmation_ticket_cannot_skip_processing() {
        let mut simulation = PaymentSimulation::default();
        let processing = simulation.start(&timings());

        let forged = PaymentTicket {
            due: PaymentPhase::Completed,
            ..processing
        };

        assert!(!simulation.complete(forged));
        assert_eq!(simulation.phase(), PaymentPhase::Processing);
    }

    #[test]
    fn ticket_cannot_be_delivered_twice() -> TestResult {
        let mut simulation = PaymentSimulation::default();
        let processing = simulation.start(&timings());

        simulation
            .succeed(processing, &timings())
            .ok_or("processing ticket rejected")?;

        assert_eq!(simulation.succeed(processing, &timings()), None);

        Ok(())
    }
}
