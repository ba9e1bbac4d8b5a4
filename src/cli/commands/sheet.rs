use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::service::PontoService;
use crate::errors::{AppError, AppResult};
use crate::models::slots::SlotKind;
use crate::utils::date::parse_required_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sheet {
        from,
        to,
        company,
        cpf,
        json,
    } = cmd
    {
        let from = parse_required_date(from)?;
        let to = parse_required_date(to)?;

        let mut service = PontoService::open(cfg)?;
        let rows = service.day_report(company.as_deref(), cpf.as_deref(), from, to)?;

        if *json {
            let out =
                serde_json::to_string_pretty(&rows).map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        println!(
            "{:<13} {:<25} {:<11} {:>9} {:>13} {:>15} {:>9}",
            "CPF", "Funcionario", "Data", "Entrada", "Saida Almoco", "Retorno Almoco", "Saida"
        );
        for row in rows {
            println!(
                "{:<13} {:<25} {:<11} {:>9} {:>13} {:>15} {:>9}",
                row.cpf,
                row.name,
                row.date,
                row.record.display(SlotKind::Entrada),
                row.record.display(SlotKind::SaidaAlmoco),
                row.record.display(SlotKind::RetornoAlmoco),
                row.record.display(SlotKind::Saida),
            );
        }
    }

    Ok(())
}
