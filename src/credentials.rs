use crate::supabase::SupabaseError;
use serde::Deserialize;

pub const GENERIC_ERROR: &str = "Произошла ошибка";

pub const CONFIRMATION_SENT: &str =
    "Письмо с подтверждением отправлено на вашу почту. Пожалуйста, проверьте ящик.";

/// Known backend messages and what the user sees instead
const KNOWN_ERRORS: [(&str, &str); 3] = [
    ("Invalid login credentials", "Неверный email или пароль"),
    ("User already registered", "Такой email уже зарегистрирован"),
    (
        "Password should be at least",
        "Пароль должен быть не менее 6 символов",
    ),
];

/// Map a backend error message to the text shown on the form.
///
/// Unknown messages are passed through untouched.
pub fn localize_auth_error(message: &str) -> String {
    KNOWN_ERRORS
        .iter()
        .find(|(needle, _)| message.contains(needle))
        .map(|(_, localized)| localized.to_string())
        .unwrap_or_else(|| message.to_string())
}

/// Form text for a failed sign-in or sign-up.
pub fn describe_failure(error: &SupabaseError) -> String {
    match error.api_message() {
        Some(message) => localize_auth_error(message),
        None => GENERIC_ERROR.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn action(&self) -> &'static str {
        match self {
            AuthMode::Login => "/login",
            AuthMode::Register => "/register",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            AuthMode::Login => "Войдите в личный кабинет",
            AuthMode::Register => "Создайте аккаунт",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::Login => "Добро пожаловать",
            AuthMode::Register => "Начните путь",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Войти",
            AuthMode::Register => "Зарегистрироваться",
        }
    }

    pub fn switch_prompt(&self) -> &'static str {
        match self {
            AuthMode::Login => "Нет аккаунта?",
            AuthMode::Register => "Уже есть аккаунт?",
        }
    }

    /// The other mode, for the link under the form
    pub fn other(&self) -> AuthMode {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn asks_for_name(&self) -> bool {
        matches!(self, AuthMode::Register)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
}
