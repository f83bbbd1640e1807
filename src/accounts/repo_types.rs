use std::{fmt, str::FromStr};

use sqlx::FromRow;

/// Account record as read back for login.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: i32,
    #[sqlx(rename = "nome")]
    pub display_name: String,
    pub email: String,
    #[sqlx(rename = "senha")]
    pub password_hash: String, // Argon2 PHC string
    #[sqlx(rename = "status")]
    pub active: bool,
}

/// Data for a fresh `usuarios` row; status and first access are always true.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub display_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Account role, stored in `usuarios.tipo` by its Portuguese label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Professional,
    #[default]
    Patient,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Administrator => "Administrador",
            Role::Professional => "Profissional",
            Role::Patient => "Paciente",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Administrador" => Ok(Role::Administrator),
            "Profissional" => Ok(Role::Professional),
            "Paciente" => Ok(Role::Patient),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
