//! Account use-cases: signup and login on top of the user repository port.
//!
//! Failure messages are deliberately coarse. Signup reports a duplicate
//! email with one fixed message whether it was caught by the pre-check or
//! by the repository's uniqueness guarantee, and login reports unknown
//! email and wrong password identically so responses cannot be used to
//! enumerate accounts.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::ports::{AccountService, UserPersistenceError, UserRepository};
use crate::domain::user::{NewUser, User};
use crate::domain::{LoginCredentials, SignupCredentials, password};

const DUPLICATE_SIGNUP: &str = "User already signed-up.";
const INVALID_LOGIN: &str = "Invalid email or password.";

/// Default [`AccountService`] backed by a [`UserRepository`].
pub struct AccountServiceImpl {
    users: Arc<dyn UserRepository>,
}

impl AccountServiceImpl {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn sign_up(&self, credentials: SignupCredentials) -> Result<User, Error> {
        let existing = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(lookup_failure)?;
        if existing.is_some() {
            return Err(Error::invalid_request(DUPLICATE_SIGNUP));
        }

        let password_hash = password::hash(credentials.password()).await?;
        let new_user = NewUser {
            name: credentials.name().clone(),
            email: credentials.email().clone(),
            password_hash,
        };
        match self.users.create(new_user).await {
            Ok(user) => Ok(user),
            // Lost the race against a concurrent signup for the same email;
            // indistinguishable from the pre-check catching it.
            Err(UserPersistenceError::EmailTaken { .. }) => {
                Err(Error::invalid_request(DUPLICATE_SIGNUP))
            }
            Err(error) => Err(Error::internal(format!("user creation failed: {error}"))),
        }
    }

    async fn sign_in(&self, credentials: LoginCredentials) -> Result<User, Error> {
        let Some(user) = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(lookup_failure)?
        else {
            return Err(Error::unauthorized(INVALID_LOGIN));
        };

        if password::verify(credentials.password(), user.password_hash()).await? {
            Ok(user)
        } else {
            Err(Error::unauthorized(INVALID_LOGIN))
        }
    }
}

fn lookup_failure(error: UserPersistenceError) -> Error {
    Error::internal(format!("user lookup failed: {error}"))
}
