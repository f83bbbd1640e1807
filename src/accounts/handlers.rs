use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use tracing::{instrument, warn};

use crate::{
    accounts::{
        dto::{LoginForm, RegisterForm},
        error::AccountError,
        extractors::FormFields,
        services,
    },
    state::AppState,
};

const REGISTER_PAGE: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>Cadastro</title></head>
<body>
<form method="post">
    Nome: <input type="text" name="nome"><br>
    E-mail: <input type="email" name="email"><br>
    Senha: <input type="password" name="senha"><br>
    Tipo:
    <select name="tipo">
        <option value="Administrador">Administrador</option>
        <option value="Profissional">Profissional</option>
        <option value="Paciente" selected>Paciente</option>
    </select><br>
    <button type="submit">Cadastrar</button>
</form>
</body>
</html>
"#;

const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>Login</title></head>
<body>
<form method="post">
    E-mail: <input type="email" name="email"><br>
    Senha: <input type="password" name="senha"><br>
    <button type="submit">Entrar</button>
</form>
</body>
</html>
"#;

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/cadastrar_usuario", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
}

pub async fn register_form() -> Html<&'static str> {
    Html(REGISTER_PAGE)
}

pub async fn login_form() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

#[instrument(skip(state, form))]
pub async fn register(
    State(state): State<AppState>,
    FormFields(form): FormFields<RegisterForm>,
) -> Result<(StatusCode, &'static str), AccountError> {
    let Some(form) = form else {
        warn!("unreadable registration form");
        return Err(AccountError::Validation);
    };
    services::register(state.accounts.as_ref(), &state.config.registration, form).await?;
    Ok((StatusCode::CREATED, services::REGISTERED))
}

#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    FormFields(form): FormFields<LoginForm>,
) -> Result<String, AccountError> {
    let Some(form) = form else {
        warn!("unreadable login form");
        return Err(AccountError::Auth);
    };
    services::login(state.accounts.as_ref(), form).await
}
