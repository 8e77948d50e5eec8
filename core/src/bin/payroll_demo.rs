//! Runs the three client stub calls with sample payloads and prints the
//! responses as JSON on stdout. Logs go to stderr. No request leaves the
//! process.

use clap::Parser;
use payroll_core::{EmployeePayment, PayrollBatch, PayrollClient, WebhookEvent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "payroll-demo")]
#[command(about = "Exercise the payroll client stub", long_about = None)]
struct Args {
    /// Root URL of the external payroll/accounting system
    #[arg(long, env = "PAYROLL_BASE_URL", default_value = "http://localhost:8083")]
    base_url: String,

    /// Pay period to query the ledger for
    #[arg(long, default_value = "2024-05")]
    period: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), serde_json::Error> {
    let args = Args::parse();

    let default_filter = if args.verbose { "payroll_core=debug,info" } else { "payroll_core=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    let client = PayrollClient::new(&args.base_url);

    let batch = PayrollBatch {
        employees: vec![EmployeePayment {
            id: Some(1u64.into()),
            amount: Some(3000u64.into()),
            ..Default::default()
        }],
        period: Some(args.period.clone().into()),
        ..Default::default()
    };
    let receipt = client.submit_payroll_batch(&batch);
    println!("{}", serde_json::to_string_pretty(&receipt)?);

    let ledger = client.get_accounting_ledger(&args.period);
    println!("{}", serde_json::to_string_pretty(&ledger)?);

    let event = WebhookEvent {
        event: Some("PAYROLL_PROCESSED".into()),
        batch_id: receipt.batch_id.clone().map(serde_json::Value::String),
        ..Default::default()
    };
    let ack = client.webhook_payroll_status(&event);
    println!("{}", serde_json::to_string_pretty(&ack)?);

    Ok(())
}
