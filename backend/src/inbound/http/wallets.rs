//! Wallet creation page loader and form action.
//!
//! ```text
//! GET  /create-wallet
//! POST /create-wallet  title=House+deposit&description=..&money=42.5
//! ```
//!
//! Both routes sit behind [`Authenticated`]. A user owns at most one
//! wallet: the page loader redirects existing owners back to the overview,
//! and the action treats a second creation attempt as a no-op rather than
//! an error so double-submitted forms stay silent.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::WalletPersistenceError;
use crate::domain::{Error, FieldErrors, User, Wallet, WalletDraft};
use crate::inbound::http::gate::Authenticated;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{APP_PATH, ApiResult, redirect_to};

/// Toast title shown by the client after a successful creation.
pub(crate) const WALLET_CREATED_TITLE: &str = "Your wallet was created!";
/// Toast body shown by the client after a successful creation.
pub(crate) const WALLET_CREATED_DESCRIPTION: &str =
    "You can start managing your finance life and save money.";

/// Wallet creation form body for `POST /create-wallet`.
///
/// Fields are optional so absent inputs surface in the validation error
/// map. `money` arrives as a string because HTML number inputs submit
/// text; validation failures on it are keyed as `value`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateWalletForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub money: Option<String>,
}

impl TryFrom<CreateWalletForm> for WalletDraft {
    type Error = FieldErrors;

    fn try_from(value: CreateWalletForm) -> Result<Self, Self::Error> {
        Self::parse(
            value.title.as_deref(),
            value.description.as_deref(),
            value.money.as_deref(),
        )
    }
}

/// Success payload for `POST /create-wallet`, rendered as a toast.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct WalletCreatedBody {
    pub ok: bool,
    pub title: String,
    pub description: String,
}

impl WalletCreatedBody {
    fn toast() -> Self {
        Self {
            ok: true,
            title: WALLET_CREATED_TITLE.to_owned(),
            description: WALLET_CREATED_DESCRIPTION.to_owned(),
        }
    }
}

/// Serve the wallet creation page payload.
///
/// Users who already own a wallet are sent back to the overview instead.
#[utoipa::path(
    get,
    path = "/create-wallet",
    responses(
        (status = 200, description = "Creation page payload"),
        (status = 302, description = "Wallet already exists or no usable session", headers(("Location" = String, description = "Redirect target"))),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["wallets"],
    operation_id = "createWalletPage",
    security(("SessionCookie" = []))
)]
#[get("/create-wallet")]
pub async fn create_wallet_page(
    state: web::Data<HttpState>,
    user: Authenticated,
) -> ApiResult<HttpResponse> {
    let Authenticated(user) = user;
    if find_wallet(&state, &user).await?.is_some() {
        return Ok(redirect_to(APP_PATH));
    }
    Ok(HttpResponse::Ok().json(serde_json::Value::Null))
}

/// Create the session user's wallet.
#[utoipa::path(
    post,
    path = "/create-wallet",
    request_body(content = CreateWalletForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Wallet created", body = WalletCreatedBody),
        (status = 204, description = "User already owns a wallet; nothing changed"),
        (status = 302, description = "No usable session; redirect to the sign-in page", headers(("Location" = String, description = "Redirect target"))),
        (status = 400, description = "Validation failure", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["wallets"],
    operation_id = "createWallet",
    security(("SessionCookie" = []))
)]
#[post("/create-wallet")]
pub async fn create_wallet(
    state: web::Data<HttpState>,
    user: Authenticated,
    form: web::Form<CreateWalletForm>,
) -> ApiResult<HttpResponse> {
    let Authenticated(user) = user;
    let draft = WalletDraft::try_from(form.into_inner()).map_err(FieldErrors::into_error)?;
    if find_wallet(&state, &user).await?.is_some() {
        return Ok(HttpResponse::NoContent().finish());
    }
    match state.wallets.create(draft.into_new_wallet(user.id().clone())).await {
        Ok(_) => Ok(HttpResponse::Ok().json(WalletCreatedBody::toast())),
        // Lost the race against a concurrent submit: same no-op answer.
        Err(WalletPersistenceError::AlreadyExists { .. }) => {
            Ok(HttpResponse::NoContent().finish())
        }
        Err(error) => Err(Error::internal(format!("wallet creation failed: {error}"))),
    }
}

async fn find_wallet(
    state: &web::Data<HttpState>,
    user: &User,
) -> Result<Option<Wallet>, Error> {
    state
        .wallets
        .find_by_user_id(user.id())
        .await
        .map_err(|error| Error::internal(format!("wallet lookup failed: {error}")))
}
