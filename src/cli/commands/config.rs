use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            ConfigLogic::print(cfg)?;
        } else {
            info("Nothing to do. Use --print to show the configuration.");
        }
    }
    Ok(())
}
