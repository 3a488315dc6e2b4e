//! Service objects: a unit of business logic with a uniform perform/result contract.
//!
//! A service assumes its inputs are already valid (validate them with a [`Form`](crate::Form)
//! first). Failures inside `action` are surfaced as the service's own error type.

use tracing::{debug, trace};

/// A unit of business logic.
pub trait Service {
    /// Result payload exposed after the service ran.
    type Data;
    /// Failure raised by [`Service::action`].
    type Error;

    /// Main logic. Returns whether the service succeeded.
    fn action(&mut self) -> Result<bool, Self::Error>;

    /// Data produced by the service; return an empty value when there is nothing to report.
    fn data(&self) -> Self::Data;
}

/// Drives a [`Service`] so that `action` runs at most once.
pub struct Performer<S: Service> {
    service: S,
    success: Option<bool>,
}

impl<S: Service> Performer<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            success: None,
        }
    }

    /// Run the service's `action` on first call and return its data.
    ///
    /// Later calls skip `action` and only return `data`. If `action` fails, the error is returned
    /// and the service stays unperformed.
    pub fn perform(&mut self) -> Result<S::Data, S::Error> {
        if self.success.is_none() {
            let success = self.service.action()?;
            debug!(
                target: "keel_core::service",
                service = std::any::type_name::<S>(),
                success,
                "service performed"
            );
            self.success = Some(success);
        } else {
            trace!(
                target: "keel_core::service",
                service = std::any::type_name::<S>(),
                "service already performed; returning data"
            );
        }
        Ok(self.service.data())
    }

    /// Returns `true` once `action` has completed.
    #[inline]
    pub fn performed(&self) -> bool {
        self.success.is_some()
    }

    /// Outcome of `action`; `None` until the service has been performed.
    #[inline]
    pub fn success(&self) -> Option<bool> {
        self.success
    }

    #[inline]
    pub fn service(&self) -> &S {
        &self.service
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.service
    }
}

/// Perform a service once and return its data.
pub fn perform<S: Service>(service: S) -> Result<S::Data, S::Error> {
    Performer::new(service).perform()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sums its inputs; fails on an empty input; counts how often `action` ran.
    struct Sum {
        inputs: Vec<i64>,
        total: i64,
        runs: u32,
    }

    impl Sum {
        fn of(inputs: &[i64]) -> Self {
            Self {
                inputs: inputs.to_vec(),
                total: 0,
                runs: 0,
            }
        }
    }

    #[derive(Debug, PartialEq)]
    struct EmptyInput;

    impl Service for Sum {
        type Data = i64;
        type Error = EmptyInput;

        fn action(&mut self) -> Result<bool, EmptyInput> {
            self.runs += 1;
            if self.inputs.is_empty() {
                return Err(EmptyInput);
            }
            self.total += self.inputs.iter().sum::<i64>();
            Ok(self.total > 0)
        }

        fn data(&self) -> i64 {
            self.total
        }
    }

    #[test]
    fn unperformed_service_has_no_status() {
        let performer = Performer::new(Sum::of(&[1]));
        assert!(!performer.performed());
        assert_eq!(performer.success(), None);
    }

    #[test]
    fn perform_returns_data_and_records_success() {
        let mut performer = Performer::new(Sum::of(&[1, 2, 3]));

        assert_eq!(performer.perform(), Ok(6));
        assert!(performer.performed());
        assert_eq!(performer.success(), Some(true));
    }

    #[test]
    fn falsy_action_records_failure() {
        let mut performer = Performer::new(Sum::of(&[-5, 2]));

        assert_eq!(performer.perform(), Ok(-3));
        assert_eq!(performer.success(), Some(false));
    }

    #[test]
    fn action_runs_only_once() {
        let mut performer = Performer::new(Sum::of(&[2, 2]));

        assert_eq!(performer.perform(), Ok(4));
        assert_eq!(performer.perform(), Ok(4));
        assert_eq!(performer.service().runs, 1);
    }

    #[test]
    fn action_error_leaves_service_unperformed() {
        let mut performer = Performer::new(Sum::of(&[]));

        assert_eq!(performer.perform(), Err(EmptyInput));
        assert!(!performer.performed());
        assert_eq!(performer.success(), None);

        assert_eq!(performer.perform(), Err(EmptyInput));
        assert_eq!(performer.into_inner().runs, 2);
    }

    #[test]
    fn one_shot_perform() {
        assert_eq!(perform(Sum::of(&[10, 5])), Ok(15));
    }
}
