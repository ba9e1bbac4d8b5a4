use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::service::PontoService;
use crate::errors::{AppError, AppResult};
use crate::models::slots::SlotKind;
use crate::utils::date::parse_required_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { cpf, date, json } = cmd {
        let date = parse_required_date(date)?;

        let mut service = PontoService::open(cfg)?;
        let record = service.classify_day(cpf, date)?;

        if *json {
            let out = serde_json::to_string_pretty(&record)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
        } else {
            println!("{}  {}", cpf, date);
            for kind in SlotKind::ALL {
                println!("  {:<15} {}", kind.name(), record.display(kind));
            }
        }
    }

    Ok(())
}
