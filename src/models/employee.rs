use serde::Serialize;

/// Minimal employee register row used to resolve names and company keys
/// for reports. Punches from unregistered employees still flow through the
/// engine; their name falls back to the CPF.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub cpf: String,
    pub name: String,
    pub company: String,
}
