use tracing::{error, info, warn};

use crate::{
    accounts::{
        dto::{LoginForm, RegisterForm},
        error::AccountError,
        password::{hash_password, verify_password, Verification},
        repo::{AccountStore, InsertOutcome},
        repo_types::{NewAccount, Role},
    },
    config::RegistrationConfig,
    html::escape_html,
};

pub const REGISTERED: &str = "Usuário cadastrado com sucesso!";

pub fn welcome_message(display_name: &str) -> String {
    format!(
        "Login realizado com sucesso! Bem-vindo, {}",
        escape_html(display_name)
    )
}

fn resolve_role(tipo: Option<&str>, default_role: Role) -> Result<Role, AccountError> {
    match tipo.map(str::trim) {
        None | Some("") => Ok(default_role),
        Some(label) => label.parse().map_err(|_| {
            warn!(tipo = %label, "unknown role");
            AccountError::InvalidRole
        }),
    }
}

/// Validates the form, hashes the password, refuses a taken email and stores
/// the new account. Returns the new account id.
pub async fn register(
    store: &dyn AccountStore,
    registration: &RegistrationConfig,
    form: RegisterForm,
) -> Result<i32, AccountError> {
    if form.nome.is_empty() || form.email.is_empty() || form.senha.is_empty() {
        warn!("registration with missing fields");
        return Err(AccountError::Validation);
    }
    let role = resolve_role(form.tipo.as_deref(), registration.default_role)?;

    let password_hash = hash_password(&form.senha).map_err(|e| {
        error!(error = %e, "hash_password failed");
        AccountError::Insert(e)
    })?;

    // Check then insert; the unique index catches the race between the two.
    match store.email_exists(&form.email).await {
        Ok(true) => {
            warn!(email = %form.email, "email already registered");
            return Err(AccountError::Duplicate);
        }
        Ok(false) => {}
        Err(e) => {
            error!(error = %e, "email lookup failed");
            return Err(AccountError::Insert(e));
        }
    }

    let account = NewAccount {
        display_name: form.nome,
        email: form.email,
        password_hash,
        role,
    };
    match store.insert(&account).await {
        Ok(InsertOutcome::Created { id }) => {
            info!(account_id = id, email = %account.email, role = %role, "account registered");
            Ok(id)
        }
        Ok(InsertOutcome::Duplicate) => {
            warn!(email = %account.email, "email registered concurrently");
            Err(AccountError::Duplicate)
        }
        Err(e) => {
            error!(error = %e, "insert account failed");
            Err(AccountError::Insert(e))
        }
    }
}

/// Checks the credentials and returns the welcome message.
pub async fn login(store: &dyn AccountStore, form: LoginForm) -> Result<String, AccountError> {
    let account = match store.find_by_email(&form.email).await {
        Ok(Some(a)) => a,
        Ok(None) => {
            warn!(email = %form.email, "login unknown email");
            return Err(AccountError::Auth);
        }
        Err(e) => {
            error!(error = %e, "find_by_email failed");
            return Err(AccountError::Auth);
        }
    };

    match verify_password(&form.senha, &account.password_hash) {
        Verification::Verified => {}
        Verification::Mismatch => {
            warn!(account_id = account.id, "login invalid password");
            return Err(AccountError::Auth);
        }
        Verification::Unreadable => {
            error!(account_id = account.id, "stored hash unreadable");
            return Err(AccountError::Auth);
        }
    }

    if !account.active {
        warn!(account_id = account.id, "login on inactive account");
        return Err(AccountError::Inactive);
    }

    info!(account_id = account.id, email = %account.email, "user logged in");
    Ok(welcome_message(&account.display_name))
}
