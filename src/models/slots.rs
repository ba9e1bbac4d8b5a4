use super::direction::Direction;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Display sentinel used by the report/GUI layer for a slot with no
/// matching punch. Internally absent slots are `None`; the sentinel only
/// appears at the formatting edge.
pub const MISSING_SLOT: &str = "00:00:00";

/// The four canonical daily checkpoints of a standard shift.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Entrada,
    SaidaAlmoco,
    RetornoAlmoco,
    Saida,
}

impl SlotKind {
    pub const ALL: [SlotKind; 4] = [
        SlotKind::Entrada,
        SlotKind::SaidaAlmoco,
        SlotKind::RetornoAlmoco,
        SlotKind::Saida,
    ];

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "entrada" => Some(SlotKind::Entrada),
            "saida_almoco" => Some(SlotKind::SaidaAlmoco),
            "retorno_almoco" => Some(SlotKind::RetornoAlmoco),
            "saida" => Some(SlotKind::Saida),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SlotKind::Entrada => "entrada",
            SlotKind::SaidaAlmoco => "saida_almoco",
            SlotKind::RetornoAlmoco => "retorno_almoco",
            SlotKind::Saida => "saida",
        }
    }

    /// The target time-of-day the classifier matches candidates against.
    pub fn target(&self) -> NaiveTime {
        let (h, m) = match self {
            SlotKind::Entrada => (8, 0),
            SlotKind::SaidaAlmoco => (12, 0),
            SlotKind::RetornoAlmoco => (13, 0),
            SlotKind::Saida => (18, 0),
        };
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    /// Direction a punch must carry to be a candidate for this slot.
    pub fn direction(&self) -> Direction {
        match self {
            SlotKind::Entrada | SlotKind::RetornoAlmoco => Direction::Entrada,
            SlotKind::SaidaAlmoco | SlotKind::Saida => Direction::Saida,
        }
    }

    /// Morning slots take candidates before 13:00, afternoon slots from
    /// 13:00 onwards.
    pub fn is_morning(&self) -> bool {
        matches!(self, SlotKind::Entrada | SlotKind::SaidaAlmoco)
    }
}

/// One reconciled employee-day: the punch nearest each canonical slot.
///
/// Derived on every query, never persisted. For a fixed punch set the
/// record is a pure function of its input.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DaySlotRecord {
    pub cpf: String,
    pub date: NaiveDate,
    pub entrada: Option<NaiveTime>,
    pub saida_almoco: Option<NaiveTime>,
    pub retorno_almoco: Option<NaiveTime>,
    pub saida: Option<NaiveTime>,
}

impl DaySlotRecord {
    pub fn empty(cpf: &str, date: NaiveDate) -> Self {
        Self {
            cpf: cpf.to_string(),
            date,
            entrada: None,
            saida_almoco: None,
            retorno_almoco: None,
            saida: None,
        }
    }

    pub fn get(&self, kind: SlotKind) -> Option<NaiveTime> {
        match kind {
            SlotKind::Entrada => self.entrada,
            SlotKind::SaidaAlmoco => self.saida_almoco,
            SlotKind::RetornoAlmoco => self.retorno_almoco,
            SlotKind::Saida => self.saida,
        }
    }

    pub fn set(&mut self, kind: SlotKind, value: Option<NaiveTime>) {
        match kind {
            SlotKind::Entrada => self.entrada = value,
            SlotKind::SaidaAlmoco => self.saida_almoco = value,
            SlotKind::RetornoAlmoco => self.retorno_almoco = value,
            SlotKind::Saida => self.saida = value,
        }
    }

    /// Lower a slot to its display form: `HH:MM:SS`, or the `00:00:00`
    /// sentinel when no punch matched.
    pub fn display(&self, kind: SlotKind) -> String {
        match self.get(kind) {
            Some(t) => t.format("%H:%M:%S").to_string(),
            None => MISSING_SLOT.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        SlotKind::ALL.iter().all(|k| self.get(*k).is_none())
    }
}
