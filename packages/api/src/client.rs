use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use session::{SessionStore, UserProfile};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    Ack, Booking, ClassOffering, DashboardStats, FeedbackEntry, ManagedUser, NewClass,
    NewProgress, NewUser, Notification, PaymentOrder, ProgressEntry, Token,
};

/// Message used when an error response carries no parseable `detail` field.
const FALLBACK_ERROR: &str = "API request failed";

/// Shape of the backend's error bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct BookingRequest<'a> {
    class_id: &'a str,
}

/// HTTP client for the backend.
///
/// Cheap to clone; the app shell constructs one and provides it to the
/// dashboards via context. The session store is injected so tests can run
/// against an in-memory session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            session,
        }
    }

    /// Single funnel for every outbound call: JSON content type, bearer
    /// token whenever a session exists, `detail`-field error normalization.
    async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, endpoint))
            .header("Content-Type", "application/json");
        if let Some(session) = self.session.load() {
            request = request.bearer_auth(session.token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| FALLBACK_ERROR.to_string());
            return Err(ApiError::Server(detail));
        }

        Ok(response.json().await?)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, endpoint, None).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::PUT, endpoint, None).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::DELETE, endpoint, None).await
    }

    /// POST with an empty body, used by the endpoints that take their input
    /// in the query string.
    async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::POST, endpoint, None).await
    }

    // ---- authentication ----

    pub async fn login(&self, email: &str, password: &str) -> Result<Token, ApiError> {
        self.post("/api/login", &LoginRequest { email, password })
            .await
    }

    pub async fn register(&self, new_user: &NewUser) -> Result<UserProfile, ApiError> {
        self.post("/api/register", new_user).await
    }

    // ---- classes ----

    pub async fn classes(&self) -> Result<Vec<ClassOffering>, ApiError> {
        self.get("/api/classes").await
    }

    pub async fn trainer_classes(&self, trainer_id: &str) -> Result<Vec<ClassOffering>, ApiError> {
        self.get(&format!("/api/classes/trainer/{trainer_id}")).await
    }

    pub async fn create_class(&self, class: &NewClass) -> Result<ClassOffering, ApiError> {
        self.post("/api/classes", class).await
    }

    // ---- bookings ----

    pub async fn member_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get("/api/bookings/member").await
    }

    pub async fn book_class(&self, class_id: &str) -> Result<Booking, ApiError> {
        self.post("/api/bookings", &BookingRequest { class_id }).await
    }

    pub async fn cancel_booking(&self, booking_id: &str) -> Result<Ack, ApiError> {
        self.put(&format!("/api/bookings/{booking_id}/cancel")).await
    }

    // ---- payments ----

    pub async fn create_payment_order(&self, booking_id: &str) -> Result<PaymentOrder, ApiError> {
        self.post_empty(&format!("/api/payments/create-order?booking_id={booking_id}"))
            .await
    }

    /// `provider_order_id` comes from the configured payment provider; the
    /// backend stores it as the provider-side reference.
    pub async fn complete_payment(
        &self,
        order_id: &str,
        provider_order_id: &str,
    ) -> Result<Ack, ApiError> {
        self.post_empty(&format!(
            "/api/payments/{order_id}/complete?paypal_order_id={provider_order_id}"
        ))
        .await
    }

    // ---- progress ----

    pub async fn member_progress(&self) -> Result<Vec<ProgressEntry>, ApiError> {
        self.get("/api/progress/member").await
    }

    pub async fn add_progress(&self, entry: &NewProgress) -> Result<ProgressEntry, ApiError> {
        self.post("/api/progress", entry).await
    }

    // ---- notifications ----

    pub async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get("/api/notifications").await
    }

    pub async fn mark_notification_read(&self, notification_id: &str) -> Result<Ack, ApiError> {
        self.put(&format!("/api/notifications/{notification_id}/read"))
            .await
    }

    // ---- users (admin) ----

    pub async fn users(&self) -> Result<Vec<ManagedUser>, ApiError> {
        self.get("/api/users").await
    }

    pub async fn approve_user(&self, user_id: &str) -> Result<Ack, ApiError> {
        self.put(&format!("/api/users/{user_id}/approve")).await
    }

    pub async fn deactivate_user(&self, user_id: &str) -> Result<Ack, ApiError> {
        self.put(&format!("/api/users/{user_id}/deactivate")).await
    }

    // ---- analytics (admin) ----

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get("/api/analytics/dashboard").await
    }

    // ---- feedback (trainer) ----

    pub async fn trainer_feedback(&self, trainer_id: &str) -> Result<Vec<FeedbackEntry>, ApiError> {
        self.get(&format!("/api/feedback/trainer/{trainer_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use session::{MemoryBackend, Role};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn member() -> UserProfile {
        UserProfile {
            id: "1".to_string(),
            email: "a@b.com".to_string(),
            full_name: "A".to_string(),
            role: Role::Member,
            phone: None,
        }
    }

    fn anonymous_client(server: &MockServer) -> (ApiClient, SessionStore) {
        let session = SessionStore::new(MemoryBackend::new());
        let client = ApiClient::new(ApiConfig::new(server.uri()), session.clone());
        (client, session)
    }

    #[tokio::test]
    async fn login_returns_the_token_and_member_profile() {
        let server = MockServer::start().await;
        let (client, _) = anonymous_client(&server);

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "T",
                "token_type": "bearer",
                "user": {"id": "1", "email": "a@b.com", "full_name": "A", "role": "member"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let token = client.login("a@b.com", "x").await.unwrap();
        assert_eq!(token.access_token, "T");
        assert_eq!(token.user, member());
    }

    #[tokio::test]
    async fn bearer_token_is_attached_once_a_session_exists() {
        let server = MockServer::start().await;
        let (client, session) = anonymous_client(&server);
        session.save("secret-token", &member());

        Mock::given(method("GET"))
            .and(path("/api/classes"))
            .and(header("authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client.classes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn anonymous_requests_carry_no_authorization_header() {
        let server = MockServer::start().await;
        let (client, _) = anonymous_client(&server);

        Mock::given(method("GET"))
            .and(path("/api/classes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        client.classes().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn server_error_message_surfaces_verbatim() {
        let server = MockServer::start().await;
        let (client, _) = anonymous_client(&server);

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let err = client.login("a@b.com", "bad").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn error_without_a_detail_field_falls_back() {
        let server = MockServer::start().await;
        let (client, _) = anonymous_client(&server);

        Mock::given(method("GET"))
            .and(path("/api/classes"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client.classes().await.unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_ERROR);
    }

    #[tokio::test]
    async fn payment_flow_addresses_the_created_order() {
        let server = MockServer::start().await;
        let (client, session) = anonymous_client(&server);
        session.save("T", &member());

        Mock::given(method("POST"))
            .and(path("/api/payments/create-order"))
            .and(query_param("booking_id", "b1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"order_id": "p1", "amount": 15.0})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/payments/p1/complete"))
            .and(query_param("paypal_order_id", "DEMO_1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Payment completed successfully"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let order = client.create_payment_order("b1").await.unwrap();
        assert_eq!(order.order_id, "p1");
        let ack = client.complete_payment(&order.order_id, "DEMO_1").await.unwrap();
        assert_eq!(ack.message, "Payment completed successfully");
    }

    #[tokio::test]
    async fn mutations_parse_the_backend_acknowledgement() {
        let server = MockServer::start().await;
        let (client, session) = anonymous_client(&server);
        session.save("T", &member());

        Mock::given(method("PUT"))
            .and(path("/api/bookings/b1/cancel"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Booking cancelled successfully"})),
            )
            .mount(&server)
            .await;

        let ack = client.cancel_booking("b1").await.unwrap();
        assert_eq!(ack.message, "Booking cancelled successfully");
    }
}
