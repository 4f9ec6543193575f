use super::{Validate, ValidationErrors};
use crate::i18n::Locale;
use crate::submission::{SubmissionError, SubmissionReceipt, Submitter};
use serde::Serialize;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form has invalid fields: {0}")]
    Invalid(ValidationErrors),

    #[error(transparent)]
    Delivery(#[from] SubmissionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    /// Success indicator visible until `until`; fields reset afterwards
    Succeeded { until: Instant },
}

/// Client-side state of one form: current values, live errors and the
/// submit/success cycle.
#[derive(Debug, Clone)]
pub struct FormController<F> {
    form: F,
    errors: ValidationErrors,
    phase: FormPhase,
    success_display: Duration,
}

impl<F> FormController<F>
where
    F: Validate + Serialize + Default + Clone,
{
    /// Empty form with no errors shown yet.
    pub fn new(success_display: Duration) -> Self {
        Self {
            form: F::default(),
            errors: ValidationErrors::new(),
            phase: FormPhase::Editing,
            success_display,
        }
    }

    /// Start from already-filled values; errors are computed immediately.
    pub fn with_form(form: F, success_display: Duration) -> Self {
        let errors = form.validate().err().unwrap_or_default();
        Self {
            form,
            errors,
            phase: FormPhase::Editing,
            success_display,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn success_display(&self) -> Duration {
        self.success_display
    }

    pub fn is_success_visible(&self) -> bool {
        matches!(self.phase, FormPhase::Succeeded { .. })
    }

    /// Update a field and re-run validation. Edits are ignored while a
    /// submission is in flight.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        if self.phase == FormPhase::Submitting {
            return false;
        }
        if !self.form.set_field(name, value.into()) {
            return false;
        }
        self.errors = self.form.validate().err().unwrap_or_default();
        true
    }

    /// Move to `Submitting` and hand back the values to send. Calling it
    /// again while already submitting re-validates and restarts.
    pub fn begin_submit(&mut self) -> Result<F, SubmitError> {
        if let Err(errors) = self.form.validate() {
            self.errors = errors.clone();
            self.phase = FormPhase::Editing;
            return Err(SubmitError::Invalid(errors));
        }
        self.phase = FormPhase::Submitting;
        Ok(self.form.clone())
    }

    /// Record the outcome of a submission started with `begin_submit`.
    pub fn complete_submit(&mut self, succeeded: bool, now: Instant) {
        self.phase = if succeeded {
            FormPhase::Succeeded {
                until: now + self.success_display,
            }
        } else {
            FormPhase::Editing
        };
    }

    /// Abandon an in-flight submission, keeping the entered values.
    pub fn cancel(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Editing;
        }
    }

    /// Validate and hand the form to `submitter`. Dropping the future
    /// before it resolves puts the form back into `Editing`.
    pub async fn submit(
        &mut self,
        submitter: &Submitter,
        locale: Locale,
    ) -> Result<SubmissionReceipt, SubmitError> {
        let data = self.begin_submit()?;
        debug!(form = F::KIND.as_str(), "Submitting form");

        let in_flight = InFlight(&mut self.phase);
        let result = submitter.submit(F::KIND, &data, locale).await;
        in_flight.finish(match result {
            Ok(_) => FormPhase::Succeeded {
                until: Instant::now() + self.success_display,
            },
            Err(_) => FormPhase::Editing,
        });

        let receipt = result?;
        info!(form = F::KIND.as_str(), "Form submitted");
        Ok(receipt)
    }

    /// Advance the clock. Once the success window has passed, fields are
    /// cleared and the form returns to editing. Returns `true` on reset.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            FormPhase::Succeeded { until } if now >= until => {
                self.form = F::default();
                self.errors = ValidationErrors::new();
                self.phase = FormPhase::Editing;
                true
            }
            _ => false,
        }
    }
}

/// Resets a `Submitting` phase to `Editing` unless `finish` ran first.
struct InFlight<'a>(&'a mut FormPhase);

impl InFlight<'_> {
    fn finish(mut self, next: FormPhase) {
        *self.0 = next;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if *self.0 == FormPhase::Submitting {
            *self.0 = FormPhase::Editing;
        }
    }
}
