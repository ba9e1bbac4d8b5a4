use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::service::PontoService;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_required_date;
use serde_json::json;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        from,
        to,
        company,
        cpf,
        extended_week,
        include_empty,
        json,
    } = cmd
    {
        let from = parse_required_date(from)?;
        let to = parse_required_date(to)?;

        let mut service = PontoService::open(cfg)?;
        let rows = service.compute_hours(
            company.as_deref(),
            cpf.as_deref(),
            from,
            to,
            *extended_week,
            *include_empty,
        )?;

        if *json {
            let payload: Vec<_> = rows
                .iter()
                .map(|r| {
                    json!({
                        "cpf": r.cpf,
                        "name": r.name,
                        "company": r.company,
                        "date": r.date,
                        "worked": r.worked_hhmm(),
                        "worked_secs": r.worked_secs,
                        "worked_hours": r.worked_decimal_hours(),
                        "overtime": r.overtime_hhmm(),
                        "shortfall": r.shortfall_hhmm(),
                    })
                })
                .collect();
            let out = serde_json::to_string_pretty(&payload)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        println!(
            "{:<25} {:<9} {:<11} {:>11} {:>12} {:>15}",
            "Funcionario", "Empresa", "Data", "Total Horas", "Horas Extras", "Horas Faltantes"
        );
        for r in rows {
            println!(
                "{:<25} {:<9} {:<11} {:>11} {:>12} {:>15}",
                r.name,
                r.company,
                r.date,
                r.worked_hhmm(),
                r.overtime_hhmm(),
                r.shortfall_hhmm(),
            );
        }
    }

    Ok(())
}
