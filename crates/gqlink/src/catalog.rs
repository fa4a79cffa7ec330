//! The operations the application runs against its API.
//!
//! Build a [`Catalog`] once at startup and share it; every descriptor in it
//! is immutable.

use crate::operation::FieldSelection;
use crate::operation::OperationBuildError;
use crate::operation::OperationDescriptor;
use crate::operation::OperationRole;
use crate::operation::Variable;
use crate::types::TypeAnnotation;
use crate::Value;
use std::sync::Arc;

type Result<T> = std::result::Result<T, Vec<OperationBuildError>>;

/// SDL of the API the catalog is written against.
pub const SCHEMA_SDL: &str = include_str!("../schema/app.graphql");

#[derive(Clone, Debug)]
pub struct Catalog {
    login: Arc<OperationDescriptor>,
    logout: Arc<OperationDescriptor>,
    me: Arc<OperationDescriptor>,
    refresh_token: Arc<OperationDescriptor>,
    register: Arc<OperationDescriptor>,
    revoke_refresh_tokens: Arc<OperationDescriptor>,
    session: Arc<OperationDescriptor>,
    update_profile: Arc<OperationDescriptor>,
}
impl Catalog {
    pub fn build() -> Result<Self> {
        let mut errors = vec![];
        let mut build = |result: Result<OperationDescriptor>| match result {
            Ok(op) => Some(Arc::new(op)),
            Err(mut errs) => {
                errors.append(&mut errs);
                None
            },
        };

        let login = build(login());
        let logout = build(logout());
        let me = build(me());
        let refresh_token = build(refresh_token());
        let register = build(register());
        let revoke_refresh_tokens = build(revoke_refresh_tokens());
        let session = build(session());
        let update_profile = build(update_profile());

        match (
            login,
            logout,
            me,
            refresh_token,
            register,
            revoke_refresh_tokens,
            session,
            update_profile,
        ) {
            (
                Some(login),
                Some(logout),
                Some(me),
                Some(refresh_token),
                Some(register),
                Some(revoke_refresh_tokens),
                Some(session),
                Some(update_profile),
            ) => Ok(Self {
                login,
                logout,
                me,
                refresh_token,
                register,
                revoke_refresh_tokens,
                session,
                update_profile,
            }),
            _ => Err(errors),
        }
    }

    /// Every operation in the catalog.
    pub fn all(&self) -> Vec<&Arc<OperationDescriptor>> {
        vec![
            &self.login,
            &self.logout,
            &self.me,
            &self.refresh_token,
            &self.register,
            &self.revoke_refresh_tokens,
            &self.session,
            &self.update_profile,
        ]
    }

    /// Look an operation up by its GraphQL operation name (e.g. `"Login"`).
    pub fn get(&self, operation_name: &str) -> Option<&Arc<OperationDescriptor>> {
        self.all()
            .into_iter()
            .find(|op| op.name() == Some(operation_name))
    }

    pub fn login(&self) -> &Arc<OperationDescriptor> {
        &self.login
    }

    pub fn logout(&self) -> &Arc<OperationDescriptor> {
        &self.logout
    }

    pub fn me(&self) -> &Arc<OperationDescriptor> {
        &self.me
    }

    pub fn refresh_token(&self) -> &Arc<OperationDescriptor> {
        &self.refresh_token
    }

    pub fn register(&self) -> &Arc<OperationDescriptor> {
        &self.register
    }

    pub fn revoke_refresh_tokens(&self) -> &Arc<OperationDescriptor> {
        &self.revoke_refresh_tokens
    }

    pub fn session(&self) -> &Arc<OperationDescriptor> {
        &self.session
    }

    pub fn update_profile(&self) -> &Arc<OperationDescriptor> {
        &self.update_profile
    }
}

fn user_fields() -> FieldSelection {
    FieldSelection::new("user").select_fields(["id", "email", "name"])
}

fn with_credential_fields(field: FieldSelection) -> FieldSelection {
    field.select_fields(["token", "refreshToken"])
}

fn login() -> Result<OperationDescriptor> {
    OperationDescriptor::mutation("Login")
        .add_variable(Variable::new("email", TypeAnnotation::non_null("String")))?
        .add_variable(Variable::new("password", TypeAnnotation::non_null("String")))?
        .add_selection(
            with_credential_fields(
                FieldSelection::new("login")
                    .with_arg("email", Value::var("email"))
                    .with_arg("password", Value::var("password")),
            )
            .select(user_fields()),
        )
        .build()
}

fn logout() -> Result<OperationDescriptor> {
    OperationDescriptor::mutation("Logout")
        .add_selection(FieldSelection::new("logout"))
        .build()
}

fn me() -> Result<OperationDescriptor> {
    OperationDescriptor::query("Me")
        .add_selection(
            FieldSelection::new("me").select_fields(["id", "email", "name", "avatarUrl"]),
        )
        .build()
}

fn refresh_token() -> Result<OperationDescriptor> {
    OperationDescriptor::mutation("RefreshToken")
        .set_role(OperationRole::CredentialRefresh)
        .add_variable(Variable::new("refreshToken", TypeAnnotation::non_null("String")))?
        .add_selection(with_credential_fields(
            FieldSelection::new("refreshToken")
                .with_arg("refreshToken", Value::var("refreshToken")),
        ))
        .build()
}

fn register() -> Result<OperationDescriptor> {
    OperationDescriptor::mutation("Register")
        .add_variable(Variable::new("input", TypeAnnotation::non_null("RegisterInput")))?
        .add_selection(
            with_credential_fields(
                FieldSelection::new("register").with_arg("input", Value::var("input")),
            )
            .select(user_fields()),
        )
        .build()
}

// Its field name contains "refreshToken" but it is an ordinary,
// authenticated operation.
fn revoke_refresh_tokens() -> Result<OperationDescriptor> {
    OperationDescriptor::mutation("RevokeRefreshTokens")
        .add_selection(FieldSelection::new("revokeRefreshTokens"))
        .build()
}

fn session() -> Result<OperationDescriptor> {
    OperationDescriptor::query("Session")
        .add_selection(
            FieldSelection::new("session")
                .select_fields(["id", "createdAt", "refreshTokenExpiresAt"]),
        )
        .build()
}

fn update_profile() -> Result<OperationDescriptor> {
    OperationDescriptor::mutation("UpdateProfile")
        .add_variable(Variable::new("input", TypeAnnotation::non_null("UpdateProfileInput")))?
        .add_selection(
            FieldSelection::new("updateProfile")
                .with_arg("input", Value::var("input"))
                .select_fields(["id", "name", "avatarUrl"]),
        )
        .build()
}
