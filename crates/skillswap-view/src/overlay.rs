//! Auth overlay templates
//!
//! The overlay hosts exactly one of two forms. Switching mode builds the
//! other template from scratch.

use serde::Serialize;
use skillswap_types::AuthMode;

/// HTML input type of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Email,
    Password,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
        }
    }
}

/// One labelled input of an auth form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub id: &'static str,
    pub label: &'static str,
    pub input_type: InputType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl FormField {
    const fn required(id: &'static str, label: &'static str, input_type: InputType) -> Self {
        Self {
            id,
            label,
            input_type,
            required: true,
            placeholder: None,
        }
    }

    const fn optional(id: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            id,
            label,
            input_type: InputType::Text,
            required: false,
            placeholder: Some(placeholder),
        }
    }
}

const LOGIN_FIELDS: &[FormField] = &[
    FormField::required("loginEmail", "Email", InputType::Email),
    FormField::required("loginPassword", "Password", InputType::Password),
];

const REGISTER_FIELDS: &[FormField] = &[
    FormField::required("registerName", "Full Name", InputType::Text),
    FormField::required("registerEmail", "Email", InputType::Email),
    FormField::required("registerPassword", "Password", InputType::Password),
    FormField::optional(
        "registerSkills",
        "Skills You Offer",
        "e.g., Web Development, Guitar",
    ),
    FormField::optional(
        "registerLearn",
        "Skills You Want to Learn",
        "e.g., Spanish, Cooking",
    ),
];

/// Rendered content of the auth overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayView {
    pub mode: AuthMode,
    pub heading: &'static str,
    pub form_id: &'static str,
    pub fields: Vec<FormField>,
    pub submit_label: &'static str,
    pub toggle_prompt: &'static str,
    pub toggle_id: &'static str,
    pub toggle_label: &'static str,
}

impl OverlayView {
    /// Template for `mode`
    pub fn for_mode(mode: AuthMode) -> Self {
        match mode {
            AuthMode::Login => Self {
                mode,
                heading: "Login to Your Account",
                form_id: "loginForm",
                fields: LOGIN_FIELDS.to_vec(),
                submit_label: "Login",
                toggle_prompt: "Don't have an account?",
                toggle_id: "showRegister",
                toggle_label: "Register",
            },
            AuthMode::Register => Self {
                mode,
                heading: "Create an Account",
                form_id: "registerForm",
                fields: REGISTER_FIELDS.to_vec(),
                submit_label: "Register",
                toggle_prompt: "Already have an account?",
                toggle_id: "showLogin",
                toggle_label: "Login",
            },
        }
    }

    pub fn field_ids(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.id).collect()
    }
}
