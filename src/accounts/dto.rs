use serde::Deserialize;

/// Form body for registration. Missing fields decode as empty strings so the
/// service can report them uniformly.
#[derive(Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub senha: String,
    #[serde(default)]
    pub tipo: Option<String>,
}

/// Form body for login.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub senha: String,
}
