use crate::config::Config;
use crate::errors::AppResult;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file values plus CLI overrides).
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg)?;
        println!("# {}", Config::config_file().display());
        print!("{}", yaml);
        Ok(())
    }
}
