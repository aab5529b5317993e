//! Tests for the overview page loader.

use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, HttpResponse, test, web};
use serde_json::Value;

use super::*;
use crate::domain::ports::{
    MockAccountService, MockUserRepository, MockWalletRepository, WalletPersistenceError,
};
use crate::domain::user::{EmailAddress, PasswordHash, UserId, UserName};
use crate::domain::{NewUser, NewWallet, WalletTitle};
use crate::inbound::http::SIGN_IN_PATH;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::test_utils::{memory_state, session_cookie, test_session_middleware};

fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(test_session_middleware())
        .service(app_overview)
        .route(
            "/login-as/{id}",
            web::get().to(
                |session: SessionContext, path: web::Path<String>| async move {
                    let id = UserId::new(path.into_inner()).expect("fixture id");
                    session.persist_user(&id)?;
                    Ok::<_, Error>(HttpResponse::Ok())
                },
            ),
        )
}

async fn seed_user(state: &web::Data<HttpState>) -> User {
    state
        .users
        .create(NewUser {
            name: UserName::new("Morpheus").expect("fixture name"),
            email: EmailAddress::new("morpheus@zion.org").expect("fixture email"),
            password_hash: PasswordHash::new("$2b$10$fixture-hash"),
        })
        .await
        .expect("seed user")
}

async fn signed_in_cookie(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    user: &User,
) -> actix_web::cookie::Cookie<'static> {
    let res = test::call_service(
        app,
        test::TestRequest::get()
            .uri(&format!("/login-as/{}", user.id()))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    session_cookie(&res)
}

#[actix_web::test]
async fn overview_without_wallet_serialises_null() {
    let state = memory_state();
    let user = seed_user(&state).await;
    let app = test::init_service(test_app(state)).await;
    let cookie = signed_in_cookie(&app, &user).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/app").cookie(cookie).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["user"]["id"], user.id().as_ref());
    assert_eq!(body["user"]["name"], "Morpheus");
    assert_eq!(body["user"]["email"], "morpheus@zion.org");
    // The field must be present and null, not omitted.
    assert!(body["user"].get("wallet").is_some());
    assert_eq!(body["user"]["wallet"], Value::Null);
}

#[actix_web::test]
async fn overview_with_wallet_reports_the_balance() {
    let state = memory_state();
    let user = seed_user(&state).await;
    state
        .wallets
        .create(NewWallet {
            user_id: user.id().clone(),
            title: WalletTitle::new("House deposit").expect("fixture title"),
            description: None,
            balance: 150.5,
        })
        .await
        .expect("seed wallet");
    let app = test::init_service(test_app(state)).await;
    let cookie = signed_in_cookie(&app, &user).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/app").cookie(cookie).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["user"]["wallet"]["balance"], 150.5);
}

#[actix_web::test]
async fn overview_without_session_redirects_to_sign_in() {
    let app = test::init_service(test_app(memory_state())).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/app").to_request()).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(
        res.headers().get(header::LOCATION).expect("Location"),
        SIGN_IN_PATH
    );
}

#[actix_web::test]
async fn wallet_lookup_failure_is_a_redacted_internal_error() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().returning(|id| {
        Ok(Some(User::new(
            id.clone(),
            UserName::new("Morpheus").expect("fixture name"),
            EmailAddress::new("morpheus@zion.org").expect("fixture email"),
            PasswordHash::new("$2b$10$fixture-hash"),
        )))
    });
    let mut wallets = MockWalletRepository::new();
    wallets
        .expect_find_by_user_id()
        .returning(|_| Err(WalletPersistenceError::query("down")));
    let state = web::Data::new(HttpState::new(
        Arc::new(MockAccountService::new()),
        Arc::new(users),
        Arc::new(wallets),
    ));
    let app = test::init_service(test_app(state)).await;
    let user = User::new(
        UserId::new("u1").expect("fixture id"),
        UserName::new("Morpheus").expect("fixture name"),
        EmailAddress::new("morpheus@zion.org").expect("fixture email"),
        PasswordHash::new("$2b$10$fixture-hash"),
    );
    let cookie = signed_in_cookie(&app, &user).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/app").cookie(cookie).to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "internal_error");
    // The adapter failure detail must not leak to the client.
    assert_eq!(body["message"], "Internal server error");
}
