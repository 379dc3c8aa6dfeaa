//! Command-line surface: subcommand definitions and the handlers for the
//! non-server subcommands.

use clap::{Parser, Subcommand};
use domain_tasks::{CreateTask, Task, TaskRepository, TaskService, TaskStatus, WorkerPool};
use eyre::Result;
use tracing::info;

/// Executors used by `process`
const PROCESS_WORKERS: usize = 5;

#[derive(Parser)]
#[command(
    name = "task-manager",
    version,
    about = "Task tracking service with an HTTP API and CLI",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the HTTP API
    Api,
    /// Print all tasks
    List,
    /// Create a pending task
    Add {
        /// Task name
        name: String,
        /// Free-text description
        description: String,
    },
    /// Drain pending tasks through the worker pool
    Process,
}

/// `task-manager list`
pub async fn list<R: TaskRepository>(service: &TaskService<R>) -> Result<()> {
    let tasks = service.list_tasks().await?;
    print_table(&tasks);
    Ok(())
}

/// `task-manager add <name> <description>`
pub async fn add<R: TaskRepository>(
    service: &TaskService<R>,
    name: String,
    description: String,
) -> Result<()> {
    let task = service
        .create_task(CreateTask {
            id: None,
            name,
            description,
            status: TaskStatus::Pending,
        })
        .await?;

    print_table(std::slice::from_ref(&task));
    Ok(())
}

/// `task-manager process`: fetch pending tasks and drain them through a
/// fixed-size worker pool, returning once every executor has finished.
pub async fn process<R: TaskRepository + 'static>(service: TaskService<R>) -> Result<()> {
    let pending = service.pending_tasks().await?;
    info!("Draining {} pending tasks", pending.len());

    let pool = WorkerPool::start(PROCESS_WORKERS, service.clone());
    for task in pending {
        pool.enqueue(task.id).await?;
    }
    pool.wait().await;

    Ok(())
}

fn print_table(tasks: &[Task]) {
    println!("  {:-<117}", "");
    println!(
        "| {:<36} | {:<20} | {:<38} | {:<10} |",
        "Id", "Name", "Description", "Status"
    );
    println!("|{:-<38}|{:-<22}|{:-<40}|{:-<12}|", "", "", "", "");
    for task in tasks {
        println!(
            "| {:<36} | {:<20} | {:<38} | {:<10} |",
            task.id,
            task.name,
            task.description,
            task.status.to_string()
        );
    }
    println!("  {:-<117}", "");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_api_subcommand() {
        let cli = Cli::try_parse_from(["task-manager", "api"]).unwrap();
        assert!(matches!(cli.command, Command::Api));
    }

    #[test]
    fn test_cli_parses_add_with_name_and_description() {
        let cli = Cli::try_parse_from(["task-manager", "add", "deploy", "ship it"]).unwrap();
        match cli.command {
            Command::Add { name, description } => {
                assert_eq!(name, "deploy");
                assert_eq!(description, "ship it");
            }
            _ => panic!("expected add subcommand"),
        }
    }

    #[test]
    fn test_cli_add_requires_both_arguments() {
        assert!(Cli::try_parse_from(["task-manager", "add", "deploy"]).is_err());
    }

    #[test]
    fn test_cli_rejects_missing_subcommand() {
        assert!(Cli::try_parse_from(["task-manager"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["task-manager", "frobnicate"]).is_err());
    }
}
