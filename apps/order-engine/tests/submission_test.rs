//! Submission worker tests against a mocked B2B endpoint.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use order_engine::domain::order_processing::aggregate::{
    Application, ReconstitutedApplicationParams,
};
use order_engine::{
    ApplicationId, ApplicationRepository, ApplicationStatus, B2bConfig, B2bOrderingAdapter,
    Customer, CustomerId, InMemoryApplicationRepository, Money, OrderId, Plan, PlanId, PlanType,
    ServiceAddress, SubmissionOutcome, SubmitOrderUseCase,
};

fn awaiting_application(id: i64, address_1: &str) -> Application {
    Application::reconstitute(ReconstitutedApplicationParams {
        id: ApplicationId::new(id),
        customer: Customer::new(CustomerId::new(id), "Jane", Some("Citizen".to_string())),
        address: ServiceAddress::new(
            address_1,
            Some("Unit 5".to_string()),
            "Melbourne",
            "VIC",
            "3000",
        ),
        plan: Plan::new(
            PlanId::new(1),
            PlanType::Nbn,
            "NBN 100/20",
            Money::from_cents(5999),
        ),
        status: ApplicationStatus::AwaitingOrder,
        order_id: None,
        created_at: Utc::now(),
    })
    .unwrap()
}

fn worker_for(
    server: &MockServer,
    repo: &Arc<InMemoryApplicationRepository>,
) -> SubmitOrderUseCase<B2bOrderingAdapter, InMemoryApplicationRepository> {
    let config = B2bConfig::new(format!("{}/orders", server.uri()));
    let adapter = B2bOrderingAdapter::new(&config).unwrap();
    SubmitOrderUseCase::new(Arc::new(adapter), Arc::clone(repo))
}

#[tokio::test]
async fn sends_exact_payload_to_b2b_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(body_json(json!({
            "address_1": "123 Main St",
            "address_2": "Unit 5",
            "city": "Melbourne",
            "state": "VIC",
            "postcode": "3000",
            "plan name": "NBN 100/20",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "Successful",
            "id": "ORD000000000000",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repo = Arc::new(InMemoryApplicationRepository::new());
    let application = awaiting_application(1, "123 Main St");
    repo.add(application.clone());

    let worker = worker_for(&server, &repo);
    let outcome = worker.execute(application).await;

    assert_eq!(
        outcome,
        SubmissionOutcome::Completed {
            order_id: OrderId::new("ORD000000000000")
        }
    );
}

#[tokio::test]
async fn successful_response_completes_the_application() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "Successful",
            "id": "ORD000000000000",
        })))
        .mount(&server)
        .await;

    let repo = Arc::new(InMemoryApplicationRepository::new());
    let application = awaiting_application(1, "123 Main St");
    repo.add(application.clone());

    let worker = worker_for(&server, &repo);
    worker.execute(application).await;

    let stored = repo
        .find_by_id(ApplicationId::new(1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status(), ApplicationStatus::Complete);
    assert_eq!(
        stored.order_id().map(OrderId::as_str),
        Some("ORD000000000000")
    );
}

#[tokio::test]
async fn failed_status_token_marks_order_failed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "Failed",
            "message": "No NBN service available at this address",
        })))
        .mount(&server)
        .await;

    let repo = Arc::new(InMemoryApplicationRepository::new());
    let application = awaiting_application(1, "123 Main St");
    repo.add(application.clone());

    let worker = worker_for(&server, &repo);
    let outcome = worker.execute(application).await;

    assert_eq!(outcome, SubmissionOutcome::Failed);
    let stored = repo
        .find_by_id(ApplicationId::new(1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status(), ApplicationStatus::OrderFailed);
    assert!(stored.order_id().is_none());
}

#[tokio::test]
async fn http_503_marks_order_failed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let repo = Arc::new(InMemoryApplicationRepository::new());
    let application = awaiting_application(1, "123 Main St");
    repo.add(application.clone());

    let worker = worker_for(&server, &repo);
    let outcome = worker.execute(application).await;

    assert_eq!(outcome, SubmissionOutcome::Failed);
    let stored = repo
        .find_by_id(ApplicationId::new(1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status(), ApplicationStatus::OrderFailed);
}

#[tokio::test]
async fn malformed_body_marks_order_failed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let repo = Arc::new(InMemoryApplicationRepository::new());
    let application = awaiting_application(1, "123 Main St");
    repo.add(application.clone());

    let worker = worker_for(&server, &repo);
    let outcome = worker.execute(application).await;

    assert_eq!(outcome, SubmissionOutcome::Failed);
    let stored = repo
        .find_by_id(ApplicationId::new(1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status(), ApplicationStatus::OrderFailed);
}

#[tokio::test]
async fn timeout_marks_order_failed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "Successful", "id": "ORD000000000000"}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let repo = Arc::new(InMemoryApplicationRepository::new());
    let application = awaiting_application(1, "123 Main St");
    repo.add(application.clone());

    let config = B2bConfig::new(format!("{}/orders", server.uri()))
        .with_timeout(Duration::from_millis(100));
    let adapter = B2bOrderingAdapter::new(&config).unwrap();
    let worker = SubmitOrderUseCase::new(Arc::new(adapter), Arc::clone(&repo));

    let outcome = worker.execute(application).await;

    assert_eq!(outcome, SubmissionOutcome::Failed);
    let stored = repo
        .find_by_id(ApplicationId::new(1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status(), ApplicationStatus::OrderFailed);
}

#[tokio::test]
async fn one_failing_order_does_not_affect_siblings() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(body_partial_json(json!({"address_1": "1 Broken Rd"})))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(body_partial_json(json!({"address_1": "123 Main St"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "Successful",
            "id": "ORD000000000001",
        })))
        .mount(&server)
        .await;

    let repo = Arc::new(InMemoryApplicationRepository::new());
    let failing = awaiting_application(1, "1 Broken Rd");
    let succeeding = awaiting_application(2, "123 Main St");
    repo.add(failing.clone());
    repo.add(succeeding.clone());

    let worker = Arc::new(worker_for(&server, &repo));

    // Run both submissions concurrently, as the queue would.
    let first = tokio::spawn({
        let worker = Arc::clone(&worker);
        async move { worker.execute(failing).await }
    });
    let second = tokio::spawn({
        let worker = Arc::clone(&worker);
        async move { worker.execute(succeeding).await }
    });

    assert_eq!(first.await.unwrap(), SubmissionOutcome::Failed);
    assert_eq!(
        second.await.unwrap(),
        SubmissionOutcome::Completed {
            order_id: OrderId::new("ORD000000000001")
        }
    );

    let failed = repo
        .find_by_id(ApplicationId::new(1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(failed.status(), ApplicationStatus::OrderFailed);

    let complete = repo
        .find_by_id(ApplicationId::new(2))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(complete.status(), ApplicationStatus::Complete);
}
