use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::service::PontoService;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { cpf, name, company } = cmd {
        let mut service = PontoService::open(cfg)?;
        service.register_employee(cpf, name, company)?;
        success(format!("Employee {} ({}) registered.", name, cpf));
    }

    Ok(())
}
