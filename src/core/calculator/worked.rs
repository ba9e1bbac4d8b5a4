use crate::models::punch::PunchEvent;

/// Accumulate the worked duration of one employee-day, in seconds.
///
/// Walks the punches in chronological order keeping an "open entrada"
/// pointer: an entrada overwrites any unmatched prior entrada (the
/// unmatched one is discarded, not summed), a saida with an open entrada
/// closes it and accumulates the span, a stray saida is ignored. The
/// source hardware cannot guarantee clean pairing, so this is a documented
/// approximation rather than an error condition.
pub fn worked_seconds(punches: &[PunchEvent]) -> i64 {
    let mut sorted: Vec<&PunchEvent> = punches.iter().collect();
    sorted.sort_by_key(|p| p.timestamp);

    let mut total = 0;
    let mut open_entrada: Option<&PunchEvent> = None;

    for punch in sorted {
        if punch.direction.is_entrada() {
            open_entrada = Some(punch);
        } else if let Some(entrada) = open_entrada.take() {
            total += (punch.timestamp - entrada.timestamp).num_seconds();
        }
    }

    total
}
