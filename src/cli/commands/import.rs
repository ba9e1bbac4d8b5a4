use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::infer::AlternationPolicy;
use crate::core::service::PontoService;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::parse_required_date;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        file,
        company,
        from,
        to,
    } = cmd
    {
        let from = match from {
            Some(s) => Some(parse_required_date(s)?),
            None => None,
        };
        let to = match to {
            Some(s) => Some(parse_required_date(s)?),
            None => None,
        };

        let mut service = PontoService::open(cfg)?;
        let summary =
            service.import_file(Path::new(file), company, from, to, &AlternationPolicy)?;

        success(format!(
            "Imported {} punches ({} updated) for company {}.",
            summary.inserted, summary.updated, company
        ));
        if summary.skipped_lines > 0 {
            warning(format!(
                "{} malformed line(s) skipped.",
                summary.skipped_lines
            ));
        }
        if summary.ignored_records > 0 {
            info(format!(
                "{} non-punch or out-of-window record(s) ignored.",
                summary.ignored_records
            ));
        }
    }

    Ok(())
}
