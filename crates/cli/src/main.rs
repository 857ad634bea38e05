//! Prereg CLI - Command-line interface for the pre-registration service

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9530";

#[derive(Parser)]
#[command(name = "prereg")]
#[command(about = "Customer pre-registration and attendance queue CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "PREREG_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Individual customers (CPF)
    #[command(subcommand)]
    Individual(IndividualCommand),

    /// Business customers (CNPJ)
    #[command(subcommand)]
    Business(BusinessCommand),

    /// Attendance queue
    #[command(subcommand)]
    Queue(QueueCommand),
}

#[derive(Subcommand)]
enum IndividualCommand {
    /// Pre-register a customer and queue them for attendance
    Register(IndividualArgs),
    /// Update a customer and queue them again
    Update(IndividualArgs),
    /// Show a customer
    Get { cpf: String },
    /// Delete a customer
    Delete { cpf: String },
    /// List all customers
    List,
}

#[derive(Subcommand)]
enum BusinessCommand {
    /// Pre-register a business and queue it for attendance
    Register(BusinessArgs),
    /// Update a business and queue it again
    Update(BusinessArgs),
    /// Show a business
    Get { cnpj: String },
    /// Delete a business
    Delete { cnpj: String },
    /// List all businesses
    List,
}

#[derive(Subcommand)]
enum QueueCommand {
    /// Serve the next customer in line
    Next,
    /// Show the waiting customers, oldest first
    View,
}

#[derive(Args, Serialize)]
struct IndividualArgs {
    /// CPF, formatted or digits only
    #[arg(long)]
    cpf: String,

    /// Merchant category code (up to 4 characters)
    #[arg(long)]
    mcc: String,

    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,
}

#[derive(Args, Serialize)]
struct BusinessArgs {
    /// CNPJ, formatted or digits only
    #[arg(long)]
    cnpj: String,

    #[arg(long)]
    corporate_name: String,

    /// Merchant category code (up to 4 characters)
    #[arg(long)]
    mcc: String,

    /// Contact CPF
    #[arg(long)]
    cpf: String,

    /// Contact name
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize, Tabled)]
struct IndividualRow {
    #[serde(default)]
    id: i64,
    cpf: String,
    mcc: String,
    name: String,
    email: String,
}

#[derive(Deserialize, Tabled)]
struct BusinessRow {
    #[serde(default)]
    id: i64,
    cnpj: String,
    corporate_name: String,
    mcc: String,
    contact_cpf: String,
    contact_name: String,
    email: String,
}

#[derive(Tabled)]
struct QueueRow {
    position: usize,
    identifier: String,
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to prereg service")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

/// Print the `message`, queue status and customer table of a single-customer response
fn print_customer<T>(result: serde_json::Value) -> Result<()>
where
    T: Tabled + serde::de::DeserializeOwned,
{
    let message = result["message"].as_str().unwrap_or_default().to_string();
    println!("{}", format!("✓ {}", message).green().bold());

    match result["queued"].as_bool() {
        Some(true) => println!("  {} queued for attendance", "•".bold()),
        Some(false) => println!("  {} {}", "•".bold(), "attendance queue full, not queued".yellow()),
        None => {}
    }
    println!();

    let row: T = serde_json::from_value(result["customer"].clone())?;
    println!("{}", Table::new(vec![row]));
    Ok(())
}

fn print_list<T>(result: serde_json::Value) -> Result<()>
where
    T: Tabled + serde::de::DeserializeOwned,
{
    let rows: Vec<T> = serde_json::from_value(result["customers"].clone())?;
    if rows.is_empty() {
        println!("{}", "No customers registered".yellow());
    } else {
        println!("{}", Table::new(rows));
    }
    Ok(())
}

fn queue_rows(entries: &[serde_json::Value]) -> Vec<QueueRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| QueueRow {
            position: i + 1,
            identifier: entry.as_str().unwrap_or_default().to_string(),
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let url = cli.rpc_url.as_str();

    match cli.command {
        Commands::Individual(cmd) => match cmd {
            IndividualCommand::Register(args) => {
                let result = call_rpc(url, "individual.register.v1", serde_json::to_value(args)?).await?;
                print_customer::<IndividualRow>(result)?;
            }
            IndividualCommand::Update(args) => {
                let result = call_rpc(url, "individual.update.v1", serde_json::to_value(args)?).await?;
                print_customer::<IndividualRow>(result)?;
            }
            IndividualCommand::Get { cpf } => {
                let result = call_rpc(url, "individual.get.v1", json!({ "cpf": cpf })).await?;
                print_customer::<IndividualRow>(result)?;
            }
            IndividualCommand::Delete { cpf } => {
                let result = call_rpc(url, "individual.delete.v1", json!({ "cpf": cpf })).await?;
                print_customer::<IndividualRow>(result)?;
            }
            IndividualCommand::List => {
                let result = call_rpc(url, "individual.list.v1", json!({})).await?;
                print_list::<IndividualRow>(result)?;
            }
        },

        Commands::Business(cmd) => match cmd {
            BusinessCommand::Register(args) => {
                let result = call_rpc(url, "business.register.v1", serde_json::to_value(args)?).await?;
                print_customer::<BusinessRow>(result)?;
            }
            BusinessCommand::Update(args) => {
                let result = call_rpc(url, "business.update.v1", serde_json::to_value(args)?).await?;
                print_customer::<BusinessRow>(result)?;
            }
            BusinessCommand::Get { cnpj } => {
                let result = call_rpc(url, "business.get.v1", json!({ "cnpj": cnpj })).await?;
                print_customer::<BusinessRow>(result)?;
            }
            BusinessCommand::Delete { cnpj } => {
                let result = call_rpc(url, "business.delete.v1", json!({ "cnpj": cnpj })).await?;
                print_customer::<BusinessRow>(result)?;
            }
            BusinessCommand::List => {
                let result = call_rpc(url, "business.list.v1", json!({})).await?;
                print_list::<BusinessRow>(result)?;
            }
        },

        Commands::Queue(QueueCommand::Next) => {
            let result = call_rpc(url, "queue.next.v1", json!({})).await?;
            let message = result["message"].as_str().unwrap_or_default();

            if result["outcome"] == "SERVED" {
                println!("{}", format!("✓ {}", message).green().bold());
                println!();
                let customer = result["customer"].clone();
                if customer["kind"] == "business" {
                    let row: BusinessRow = serde_json::from_value(customer)?;
                    println!("{}", Table::new(vec![row]));
                } else {
                    let row: IndividualRow = serde_json::from_value(customer)?;
                    println!("{}", Table::new(vec![row]));
                }
            } else {
                println!("{}", format!("✗ {}", message).red().bold());
            }
        }

        Commands::Queue(QueueCommand::View) => {
            let result = call_rpc(url, "queue.view.v1", json!({})).await?;
            println!(
                "{} {}/{}",
                "Attendance queue".cyan().bold(),
                result["size"],
                result["capacity"]
            );
            println!();

            let entries = result["entries"].as_array().cloned().unwrap_or_default();
            if entries.is_empty() {
                println!("{}", "Queue is empty".yellow());
            } else {
                println!("{}", Table::new(queue_rows(&entries)));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_business_register() {
        let cli = Cli::try_parse_from([
            "prereg",
            "business",
            "register",
            "--cnpj",
            "12.345.678/0001-99",
            "--corporate-name",
            "Padaria Ltda",
            "--mcc",
            "5462",
            "--cpf",
            "12345678901",
            "--name",
            "Joao",
            "--email",
            "joao@padaria.com",
        ])
        .unwrap();

        match cli.command {
            Commands::Business(BusinessCommand::Register(args)) => {
                let params = serde_json::to_value(args).unwrap();
                assert_eq!(params["corporate_name"], "Padaria Ltda");
                assert_eq!(params["cnpj"], "12.345.678/0001-99");
            }
            _ => panic!("expected business register"),
        }
    }

    #[test]
    fn test_parse_queue_next_with_url() {
        let cli = Cli::try_parse_from(["prereg", "--rpc-url", "http://10.0.0.1:1", "queue", "next"])
            .unwrap();
        assert_eq!(cli.rpc_url, "http://10.0.0.1:1");
        assert!(matches!(cli.command, Commands::Queue(QueueCommand::Next)));
    }

    #[test]
    fn test_register_requires_email() {
        let result = Cli::try_parse_from([
            "prereg", "individual", "register", "--cpf", "1", "--mcc", "1", "--name", "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_queue_rows_are_numbered_from_one() {
        let rows = queue_rows(&[json!("12345678901"), json!("12345678000199")]);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[1].identifier, "12345678000199");
    }
}
