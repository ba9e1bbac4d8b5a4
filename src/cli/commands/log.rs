use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::service::PontoService;
use crate::db::log::load_log;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        print,
        corrections,
        cpf,
    } = cmd
    {
        let service = PontoService::open(cfg)?;

        if *print {
            for (date, operation, target, message) in load_log(&service.pool.conn)? {
                println!("{}  {:<10} {:<20} {}", date, operation, target, message);
            }
        }

        if *corrections {
            for entry in service.corrections(cpf.as_deref())? {
                println!(
                    "{}  {} {} {}: {} -> {} (by {})",
                    entry.changed_at,
                    entry.cpf,
                    entry.date,
                    entry.slot.name(),
                    entry.old_value,
                    entry.new_value,
                    entry.actor,
                );
            }
        }
    }

    Ok(())
}
