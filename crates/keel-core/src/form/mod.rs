//! Form objects: validate incoming parameters and hand back processing-ready attributes.
//!
//! A form behaves like a model without storage: it collects attribute-level errors in
//! [`FormErrors`] and exposes the final payload through [`Form::attributes`].

pub mod validations;

use keel_model::FormErrors;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FormError;

pub trait Form {
    /// Payload handed to processors once the form is valid.
    type Attributes;

    /// Record every problem with the form's fields into `errors`. No validations by default.
    fn validate(&self, _errors: &mut FormErrors) {}

    /// Final attributes produced by the form.
    fn attributes(&self) -> Self::Attributes;
}

/// A form together with the outcome of its validation.
#[derive(Debug, Clone)]
pub struct Checked<F> {
    form: F,
    errors: FormErrors,
}

impl<F: Form> Checked<F> {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    #[inline]
    pub fn form(&self) -> &F {
        &self.form
    }

    #[inline]
    pub fn attributes(&self) -> F::Attributes {
        self.form.attributes()
    }

    /// Attributes when valid, the collected errors otherwise.
    pub fn into_result(self) -> Result<F::Attributes, FormErrors> {
        if self.is_valid() {
            Ok(self.form.attributes())
        } else {
            Err(self.errors)
        }
    }
}

/// Validate a form once.
pub fn check<F: Form>(form: F) -> Checked<F> {
    let mut errors = FormErrors::new();
    form.validate(&mut errors);
    if !errors.is_empty() {
        debug!(
            target: "keel_core::form",
            form = std::any::type_name::<F>(),
            errors = errors.len(),
            "form is invalid"
        );
    }
    Checked { form, errors }
}

/// Build a form from raw parameters and validate it.
///
/// Parameters that do not fit the form's shape are a [`FormError::Params`]; parameters that fit
/// but break a rule end up in [`Checked::errors`].
pub fn check_params<F>(params: serde_json::Value) -> Result<Checked<F>, FormError>
where
    F: Form + DeserializeOwned,
{
    let form: F = serde_json::from_value(params)?;
    Ok(check(form))
}
