use clap::Parser;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_tasks::{SqliteTaskRepository, TaskService};

mod cli;
mod config;
mod server;

use cli::{Cli, Command};
use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for readable error reports
    install_color_eyre();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Open the store with startup retry and bring the schema up to date
    let db =
        database::sqlite::connect_from_config_with_retry(config.database.clone(), None).await?;
    database::sqlite::run_migrations::<migration::Migrator>(&db, "task-manager").await?;

    let service = TaskService::new(SqliteTaskRepository::new(db.clone()));

    match cli.command {
        Command::Api => server::serve(config, service, db).await?,
        Command::List => cli::list(&service).await?,
        Command::Add { name, description } => cli::add(&service, name, description).await?,
        Command::Process => cli::process(service).await?,
    }

    Ok(())
}
