//! App overview page loader.
//!
//! `GET /app` is the landing page after signup or login. It answers with
//! the session user and, when one exists, the user's wallet. The wallet
//! field is always present in the payload and reads `null` until a wallet
//! is created, which is what the client checks to decide between the
//! "create wallet" call to action and the balance card.

use actix_web::{get, web};
use serde::Serialize;

use crate::domain::{Error, User, Wallet};
use crate::inbound::http::ApiResult;
use crate::inbound::http::gate::Authenticated;
use crate::inbound::http::state::HttpState;

/// Response body for `GET /app`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct OverviewBody {
    pub user: OverviewUser,
}

/// Session user as shown on the overview page. No password material.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct OverviewUser {
    pub id: String,
    pub name: String,
    pub email: String,
    /// `null` until the user creates a wallet.
    pub wallet: Option<WalletSummary>,
}

/// Wallet slice rendered on the overview page.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct WalletSummary {
    pub balance: f64,
}

impl OverviewBody {
    fn new(user: &User, wallet: Option<&Wallet>) -> Self {
        Self {
            user: OverviewUser {
                id: user.id().as_ref().to_owned(),
                name: user.name().as_ref().to_owned(),
                email: user.email().as_ref().to_owned(),
                wallet: wallet.map(|wallet| WalletSummary {
                    balance: wallet.balance(),
                }),
            },
        }
    }
}

/// Serve the overview payload for the signed-in user.
#[utoipa::path(
    get,
    path = "/app",
    responses(
        (status = 200, description = "Overview payload for the session user", body = OverviewBody),
        (status = 302, description = "No usable session; redirect to the sign-in page", headers(("Location" = String, description = "Redirect target"))),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["app"],
    operation_id = "appOverview",
    security(("SessionCookie" = []))
)]
#[get("/app")]
pub async fn app_overview(
    state: web::Data<HttpState>,
    user: Authenticated,
) -> ApiResult<web::Json<OverviewBody>> {
    let Authenticated(user) = user;
    let wallet = state
        .wallets
        .find_by_user_id(user.id())
        .await
        .map_err(|error| Error::internal(format!("wallet lookup failed: {error}")))?;
    Ok(web::Json(OverviewBody::new(&user, wallet.as_ref())))
}

#[cfg(test)]
mod tests;
