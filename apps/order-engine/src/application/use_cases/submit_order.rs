//! Submit Order Use Case
//!
//! The unit of asynchronous work: place one NBN order with the external
//! endpoint and record the terminal outcome on the application. Failures of
//! any kind are contained here - they are logged and resolved to the
//! `OrderFailed` status, never propagated to sibling tasks or the
//! coordinator.

use std::sync::Arc;

use crate::application::ports::{OrderingError, OrderingPort, PlaceOrderRequest};
use crate::domain::order_processing::aggregate::Application;
use crate::domain::order_processing::repository::ApplicationRepository;
use crate::domain::order_processing::services::ApplicationStateMachine;
use crate::domain::order_processing::value_objects::ApplicationStatus;
use crate::domain::shared::OrderId;
use crate::observability::record_submission_outcome;

/// Terminal outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Order placed; the application is now `Complete`.
    Completed {
        /// Order identifier assigned by the endpoint.
        order_id: OrderId,
    },
    /// Order placement failed; the application is now `OrderFailed`.
    Failed,
}

/// Use case for submitting a single application's order.
///
/// Each invocation is a single attempt: one outbound call, one persisted
/// state update. The dispatch contract guarantees the application was
/// selected in `AwaitingOrder`; the status is not re-read here.
pub struct SubmitOrderUseCase<N, R>
where
    N: OrderingPort,
    R: ApplicationRepository,
{
    ordering: Arc<N>,
    application_repo: Arc<R>,
}

impl<N, R> SubmitOrderUseCase<N, R>
where
    N: OrderingPort,
    R: ApplicationRepository,
{
    /// Create a new SubmitOrderUseCase.
    pub const fn new(ordering: Arc<N>, application_repo: Arc<R>) -> Self {
        Self {
            ordering,
            application_repo,
        }
    }

    /// Execute the use case for one application.
    ///
    /// Never returns an error: every failure path resolves to
    /// [`SubmissionOutcome::Failed`] after being logged.
    pub async fn execute(&self, application: Application) -> SubmissionOutcome {
        let application_id = application.id();

        // The snapshot must still admit both terminal transitions; a breach
        // of the dispatch contract is logged and left untouched.
        if let Err(e) = ApplicationStateMachine::validate_transition(
            application.status(),
            ApplicationStatus::Complete,
        ) {
            tracing::error!(
                application_id = %application_id,
                status = %application.status(),
                error = %e,
                "Application dispatched in non-submittable status, skipping"
            );
            record_submission_outcome("skipped");
            return SubmissionOutcome::Failed;
        }

        let request = Self::build_request(&application);

        tracing::info!(
            application_id = %application_id,
            plan_name = %request.plan_name,
            "Submitting NBN order"
        );

        match self.ordering.place_order(request).await {
            Ok(placement) => self.record_completion(&application, placement.order_id).await,
            Err(e) => {
                self.record_failure(&application, &e).await;
                SubmissionOutcome::Failed
            }
        }
    }

    /// Build the submission payload from the application snapshot.
    fn build_request(application: &Application) -> PlaceOrderRequest {
        let address = application.address();
        PlaceOrderRequest {
            address_1: address.address_1().to_string(),
            address_2: address.address_2().map(ToString::to_string),
            city: address.city().to_string(),
            state: address.state().to_string(),
            postcode: address.postcode().to_string(),
            plan_name: application.plan().name().to_string(),
        }
    }

    /// Persist the success outcome: status `Complete` plus the order id,
    /// in a single atomic write.
    async fn record_completion(
        &self,
        application: &Application,
        order_id: OrderId,
    ) -> SubmissionOutcome {
        let application_id = application.id();

        if let Err(e) = self
            .application_repo
            .mark_completed(application_id, &order_id)
            .await
        {
            tracing::error!(
                application_id = %application_id,
                order_id = %order_id,
                error = %e,
                "Order placed but completion could not be recorded"
            );
            record_submission_outcome("failed");
            if let Err(e) = self.application_repo.mark_order_failed(application_id).await {
                tracing::error!(
                    application_id = %application_id,
                    error = %e,
                    "Failed to record order failure"
                );
            }
            return SubmissionOutcome::Failed;
        }

        tracing::info!(
            application_id = %application_id,
            order_id = %order_id,
            "NBN order placed"
        );
        record_submission_outcome("complete");

        SubmissionOutcome::Completed { order_id }
    }

    /// Persist the failure outcome: status `OrderFailed`, order id untouched,
    /// in a single atomic write.
    async fn record_failure(&self, application: &Application, cause: &OrderingError) {
        let application_id = application.id();

        tracing::error!(
            application_id = %application_id,
            transport = cause.is_transport(),
            error = %cause,
            "NBN order processing failed"
        );
        record_submission_outcome("failed");

        if let Err(e) = self.application_repo.mark_order_failed(application_id).await {
            tracing::error!(
                application_id = %application_id,
                error = %e,
                "Failed to record order failure"
            );
        }
    }
}
