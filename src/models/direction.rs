use serde::Serialize;

/// Direction of a punch-clock event: clock-in (entrada) or clock-out (saida).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Entrada,
    Saida,
}

impl Direction {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Direction::Entrada => "entrada",
            Direction::Saida => "saida",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "entrada" => Some(Direction::Entrada),
            "saida" => Some(Direction::Saida),
            _ => None,
        }
    }

    pub fn is_entrada(&self) -> bool {
        matches!(self, Direction::Entrada)
    }

    pub fn is_saida(&self) -> bool {
        matches!(self, Direction::Saida)
    }
}
