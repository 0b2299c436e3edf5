//! End-to-end router tests over in-memory repositories

#[cfg(test)]
mod app_tests {
    use std::sync::Arc;

    use auth::application::{RegisterUserInput, RegisterUserUseCase};
    use auth::{AuthAppState, AuthConfig, InMemoryUserRepository};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use billing::{BillingAppState, BillingConfig, InMemoryBillRepository};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::bootstrap;
    use crate::config::BootstrapUser;
    use crate::router;

    const PASSWORD: &str = "Monthly-Budget-77";

    async fn app() -> Router {
        let auth_state =
            AuthAppState::new(InMemoryUserRepository::new(), AuthConfig::with_random_secret());

        RegisterUserUseCase::new(auth_state.repo.clone(), Arc::clone(&auth_state.config))
            .execute(RegisterUserInput {
                name: "Dana".to_string(),
                email: "dana@example.com".to_string(),
                password: PASSWORD.to_string(),
                password_confirm: PASSWORD.to_string(),
            })
            .await
            .unwrap();

        let billing_state =
            BillingAppState::new(InMemoryBillRepository::new(), BillingConfig::default());

        router::app(auth_state, billing_state)
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_bills_require_token() {
        let app = app().await;

        let (status, body) = send(&app, "GET", "/api/bills", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "INVALID_TOKEN");

        let bill = json!({ "name": "Rent", "total": 900, "paid": "no" });
        let (status, _) = send(&app, "POST", "/api/bills", None, Some(bill)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_then_manage_bills() {
        let app = app().await;

        let (status, login) = send(
            &app,
            "POST",
            "/api/authentication/login",
            None,
            Some(json!({ "email": "dana@example.com", "password": PASSWORD })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let token = login["token"].as_str().unwrap().to_string();
        let token = Some(token.as_str());

        let bill = json!({ "name": "Rent", "total": 900, "paid": "no" });
        let (status, body) = send(&app, "POST", "/api/bills", token, Some(bill)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Rent");

        let (status, page) = send(&app, "GET", "/api/bills", token, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["page_size"], 10);
        assert_eq!(page["count"], 1);

        let (status, page) = send(&app, "GET", "/api/users", token, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["data"][0]["email"], "dana@example.com");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = app().await;

        let (status, body) = send(&app, "GET", "/api/invoices", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "ROUTE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_bootstrap_user_opens_empty_deployment() {
        let auth_state =
            AuthAppState::new(InMemoryUserRepository::new(), AuthConfig::with_random_secret());
        let owner = BootstrapUser {
            name: "Owner".to_string(),
            email: "owner@example.com".to_string(),
            password: PASSWORD.to_string(),
        };

        assert!(bootstrap::ensure_user(&auth_state, &owner).await.unwrap());
        assert!(!bootstrap::ensure_user(&auth_state, &owner).await.unwrap());

        let billing_state =
            BillingAppState::new(InMemoryBillRepository::new(), BillingConfig::default());
        let app = router::app(auth_state, billing_state);

        let (status, login) = send(
            &app,
            "POST",
            "/api/authentication/login",
            None,
            Some(json!({ "email": "owner@example.com", "password": PASSWORD })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let token = login["token"].as_str().unwrap().to_string();

        let (status, page) = send(&app, "GET", "/api/users", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["count"], 1);
        assert_eq!(page["data"][0]["name"], "Owner");
    }

    #[tokio::test]
    async fn test_bootstrap_user_rejects_weak_password() {
        let auth_state =
            AuthAppState::new(InMemoryUserRepository::new(), AuthConfig::with_random_secret());
        let owner = BootstrapUser {
            name: "Owner".to_string(),
            email: "owner@example.com".to_string(),
            password: "short".to_string(),
        };

        assert!(bootstrap::ensure_user(&auth_state, &owner).await.is_err());
    }
}
