use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use rfxcom_lib::{Lighting6Command, Lighting6Message, ProtocolEnum, RfxMessage};
use rfxcom_rs::frames::format_hex;
use rfxcom_rs::logging::setup_logging;
use tracing::info;

/// Builds a LIGHTING6 (Blyss) command frame ready to send to the transceiver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target device as sensor.group.unit, e.g. 257.A.1
    #[arg(short, long)]
    device_id: String,
    /// ON, OFF, GROUP_ON or GROUP_OFF (any case), or the raw command byte
    #[arg(short, long, value_parser = parse_command)]
    command: Lighting6Command,
    /// Sub type name or number
    #[arg(long, default_value = "BLYSS")]
    sub_type: String,
    /// Sequence number written in the header
    #[arg(long, default_value_t = 0)]
    seq: u8,
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn parse_command(s: &str) -> Result<Lighting6Command, String> {
    Lighting6Command::from_name(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = setup_logging(None, &cli.verbose)?;

    let mut message = Lighting6Message::for_device(&cli.device_id, cli.command)?;
    message.set_sub_type(Lighting6Message::convert_sub_type(&cli.sub_type)?)?;
    message.seq_nbr = cli.seq;
    info!("{}", message);

    println!("{}", format_hex(&message.encode()));
    Ok(())
}
