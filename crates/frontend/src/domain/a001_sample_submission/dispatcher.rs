//! Submission dispatcher
//!
//! `Idle -> Submitting -> Submitted | Idle (with notice)`.
//! The state flips to `Submitting` and the payload is captured in one atomic
//! update before the request starts, so a second `submit` issued while the
//! first is in flight finds the guard set and returns without sending.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::domain::a001_sample_submission::SubmissionBatch;

use super::api::SubmissionTransport;
use super::error::SubmitError;
use super::state::FormState;

/// Holder of the form state that the dispatcher can update atomically.
/// `None` means the state is gone (e.g. the component was unmounted).
pub trait FormStore {
    fn modify<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R>;
}

impl FormStore for Rc<RefCell<FormState>> {
    fn modify<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Result of `FormState::begin_submit`
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStart {
    /// Guard taken, send this payload
    Dispatch(SubmissionBatch),
    /// Already submitting or submitted
    Ignored,
    /// Nothing sent; notice set
    Invalid(SubmitError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Submitted { count: usize },
    Ignored,
    Invalid(SubmitError),
    Failed(SubmitError),
}

impl FormState {
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.submitting || self.submitted {
            return SubmitStart::Ignored;
        }
        match self.build_batch() {
            Ok(batch) => {
                self.submitting = true;
                self.notice = None;
                SubmitStart::Dispatch(batch)
            }
            Err(e) => {
                self.notice = Some(e.user_notice());
                SubmitStart::Invalid(e)
            }
        }
    }

    /// Rows and factory name are left alone on failure so the user can retry
    pub fn finish_submit(&mut self, result: &Result<(), SubmitError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.submitted = true;
                self.notice = None;
            }
            Err(e) => self.notice = Some(e.user_notice()),
        }
    }
}

/// Validate, send the whole batch once, and record the outcome
pub async fn submit<S, T>(store: &S, transport: &T) -> SubmitOutcome
where
    S: FormStore,
    T: SubmissionTransport + ?Sized,
{
    let batch = match store.modify(FormState::begin_submit) {
        Some(SubmitStart::Dispatch(batch)) => batch,
        Some(SubmitStart::Invalid(e)) => {
            log::warn!("Submission blocked: {}", e);
            return SubmitOutcome::Invalid(e);
        }
        Some(SubmitStart::Ignored) | None => {
            log::debug!("Submit ignored: a batch is already in flight or accepted");
            return SubmitOutcome::Ignored;
        }
    };

    let count = batch.len();
    log::info!("Submitting batch of {} sample(s)", count);

    let result = transport.post_batch(&batch).await;
    match &result {
        Ok(()) => log::info!("Batch of {} sample(s) accepted", count),
        Err(e) => log::error!("Batch submission failed: {}", e),
    }

    store.modify(|state| state.finish_submit(&result));

    match result {
        Ok(()) => SubmitOutcome::Submitted { count },
        Err(e) => SubmitOutcome::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sample_submission::error::GENERIC_FAILURE_NOTICE;
    use crate::domain::a001_sample_submission::state::RowField;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    /// Pending on first poll, ready on the second
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    /// Records every batch and answers with a fixed result
    struct FakeTransport {
        calls: RefCell<Vec<SubmissionBatch>>,
        response: Result<(), SubmitError>,
    }

    impl FakeTransport {
        fn answering(response: Result<(), SubmitError>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                response,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl SubmissionTransport for FakeTransport {
        async fn post_batch(&self, batch: &SubmissionBatch) -> Result<(), SubmitError> {
            self.calls.borrow_mut().push(batch.clone());
            YieldOnce(false).await;
            self.response.clone()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn filled_store() -> Rc<RefCell<FormState>> {
        let mut state = FormState::new(today());
        state.set_factory_name("Acme Mills");
        state.set_field(0, RowField::StyleNumber, "ST-1");
        state.set_field(0, RowField::TrackingNumber, "TRK1");
        Rc::new(RefCell::new(state))
    }

    #[test]
    fn test_end_to_end_single_row() {
        let store = filled_store();
        let transport = FakeTransport::answering(Ok(()));

        let outcome = block_on(submit(&store, &transport));
        assert_eq!(outcome, SubmitOutcome::Submitted { count: 1 });

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 1);
        let record = &calls[0][0];
        assert_eq!(record.factory, "Acme Mills");
        assert_eq!(record.style_number, "ST-1");
        assert_eq!(record.tracking_number, "TRK1");
        assert_eq!(
            serde_json::to_value(record).unwrap()["status"],
            serde_json::json!("New")
        );

        let state = store.borrow();
        assert!(state.submitted);
        assert!(!state.submitting);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_empty_factory_name_sends_nothing() {
        let store = filled_store();
        store.borrow_mut().set_factory_name("");
        let before = store.borrow().clone();
        let transport = FakeTransport::answering(Ok(()));

        let outcome = block_on(submit(&store, &transport));
        assert_eq!(outcome, SubmitOutcome::Invalid(SubmitError::MissingFactoryName));
        assert_eq!(transport.call_count(), 0);

        let state = store.borrow();
        assert_eq!(state.notice.as_deref(), Some("Please enter a Factory Name"));
        assert_eq!(state.rows, before.rows);
        assert_eq!(state.factory_name, before.factory_name);
        assert!(!state.submitting);
        assert!(!state.submitted);
    }

    #[test]
    fn test_double_submit_sends_once() {
        let store = filled_store();
        let transport = FakeTransport::answering(Ok(()));

        let (first, second) = block_on(async {
            futures::join!(submit(&store, &transport), submit(&store, &transport))
        });

        assert_eq!(first, SubmitOutcome::Submitted { count: 1 });
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn test_submit_after_success_is_ignored() {
        let store = filled_store();
        let transport = FakeTransport::answering(Ok(()));

        block_on(submit(&store, &transport));
        let outcome = block_on(submit(&store, &transport));
        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn test_success_waits_for_explicit_reset() {
        let store = filled_store();
        let transport = FakeTransport::answering(Ok(()));

        block_on(submit(&store, &transport));
        {
            let state = store.borrow();
            assert!(state.submitted);
            assert_eq!(state.factory_name, "Acme Mills");
            assert_eq!(state.rows[0].style_number, "ST-1");
        }

        assert!(store.borrow_mut().reset(today()));
        let state = store.borrow();
        assert!(!state.submitted);
        assert_eq!(state.factory_name, "");
        assert_eq!(state.rows.len(), 1);
        assert!(state.rows[0].style_number.is_empty());
    }

    #[test]
    fn test_rejection_keeps_data_for_retry() {
        let store = filled_store();
        store.borrow_mut().add_row(today());
        store.borrow_mut().set_field(1, RowField::StyleNumber, "ST-2");
        store.borrow_mut().set_field(1, RowField::TrackingNumber, "TRK2");
        let before = store.borrow().clone();
        let transport = FakeTransport::answering(Err(SubmitError::Rejected(500)));

        let outcome = block_on(submit(&store, &transport));
        assert_eq!(outcome, SubmitOutcome::Failed(SubmitError::Rejected(500)));

        let state = store.borrow();
        assert!(!state.submitted);
        assert!(!state.submitting);
        assert_eq!(state.rows, before.rows);
        assert_eq!(state.factory_name, before.factory_name);
        assert_eq!(state.notice.as_deref(), Some(GENERIC_FAILURE_NOTICE));
    }

    #[test]
    fn test_transport_error_then_retry_succeeds() {
        let store = filled_store();
        let failing = FakeTransport::answering(Err(SubmitError::Transport("offline".into())));

        let outcome = block_on(submit(&store, &failing));
        assert!(matches!(outcome, SubmitOutcome::Failed(SubmitError::Transport(_))));
        assert_eq!(store.borrow().notice.as_deref(), Some(GENERIC_FAILURE_NOTICE));
        assert!(!store.borrow().submitting);

        let working = FakeTransport::answering(Ok(()));
        let outcome = block_on(submit(&store, &working));
        assert_eq!(outcome, SubmitOutcome::Submitted { count: 1 });
        assert!(store.borrow().notice.is_none());
        assert_eq!(working.calls.borrow()[0][0].style_number, "ST-1");
    }

    #[test]
    fn test_edit_during_flight_does_not_change_payload() {
        let store = filled_store();
        let transport = FakeTransport::answering(Err(SubmitError::Rejected(503)));

        block_on(async {
            futures::join!(submit(&store, &transport), async {
                store
                    .borrow_mut()
                    .set_field(0, RowField::StyleNumber, "ST-EDITED");
            })
        });

        assert_eq!(transport.calls.borrow()[0][0].style_number, "ST-1");
        assert_eq!(store.borrow().rows[0].style_number, "ST-EDITED");
    }

    #[test]
    fn test_submitting_flag_set_while_in_flight() {
        let store = filled_store();
        assert!(matches!(
            store.borrow_mut().begin_submit(),
            SubmitStart::Dispatch(_)
        ));
        assert!(store.borrow().submitting);
        assert_eq!(store.borrow_mut().begin_submit(), SubmitStart::Ignored);

        store.borrow_mut().finish_submit(&Err(SubmitError::Rejected(400)));
        assert!(!store.borrow().submitting);
        assert!(matches!(
            store.borrow_mut().begin_submit(),
            SubmitStart::Dispatch(_)
        ));
    }
}
