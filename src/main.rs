use atm_cash::application::engine::AtmEngine;
use atm_cash::domain::machine::AtmMachine;
use atm_cash::domain::money::Denomination;
use atm_cash::domain::ports::TellerBox;
use atm_cash::infrastructure::in_memory::InMemoryTeller;
use atm_cash::interfaces::csv::operation_reader::OperationReader;
use atm_cash::interfaces::csv::slot_writer::SlotWriter;
use atm_cash::logger::init_cli_logger;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Operations CSV script (`type, value, quantity`)
    script: PathBuf,

    /// Supported denominations, in slot order
    #[arg(
        long,
        env = "ATM_DENOMINATIONS",
        value_delimiter = ',',
        default_value = "100,50,20"
    )]
    denominations: Vec<Decimal>,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let denominations = cli
        .denominations
        .into_iter()
        .map(Denomination::try_from)
        .collect::<atm_cash::error::Result<Vec<_>>>()?;
    let machine = AtmMachine::new(denominations)?;

    let teller: TellerBox = Box::new(InMemoryTeller::new(machine));
    let engine = AtmEngine::new(teller);

    let file = File::open(cli.script).into_diagnostic()?;
    let reader = OperationReader::new(file);
    for op_result in reader.operations() {
        match op_result {
            Ok(op) => match engine.process_operation(op).await {
                Ok(outcome) => println!("{outcome}"),
                Err(e) => eprintln!("Error processing operation: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading operation: {}", e);
            }
        }
    }

    let slots = engine.into_report().await?;

    let stdout = io::stdout();
    let mut writer = SlotWriter::new(stdout.lock());
    writer.write_slots(&slots)?;

    Ok(())
}
