use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::service::PontoService;
use crate::db::queries::UpsertOutcome;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::parse_required_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Correct {
        cpf,
        date,
        slot,
        time,
        actor,
    } = cmd
    {
        let date = parse_required_date(date)?;

        let mut service = PontoService::open(cfg)?;
        let outcome = service.record_correction(cpf, date, slot, time, actor)?;

        let verb = match outcome {
            UpsertOutcome::Inserted => "recorded",
            UpsertOutcome::Updated => "re-applied",
        };
        success(format!(
            "Correction {}: {} {} = {} on {}.",
            verb, cpf, slot, time, date
        ));
    }

    Ok(())
}
