use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failures of the registration and login forms. The `Display` text is the
/// message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Preencha todos os campos!")]
    Validation,
    #[error("Tipo de usuário inválido!")]
    InvalidRole,
    #[error("E-mail já cadastrado!")]
    Duplicate,
    #[error("Erro ao cadastrar usuário!")]
    Insert(#[source] anyhow::Error),
    #[error("E-mail ou senha inválidos!")]
    Auth,
    #[error("Usuário inativo.")]
    Inactive,
}

impl AccountError {
    pub fn status(&self) -> StatusCode {
        match self {
            AccountError::Validation | AccountError::InvalidRole => StatusCode::BAD_REQUEST,
            AccountError::Duplicate => StatusCode::CONFLICT,
            AccountError::Insert(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AccountError::Auth => StatusCode::UNAUTHORIZED,
            AccountError::Inactive => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
