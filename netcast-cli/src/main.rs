//! netcast CLI - remote control for an LG NetCast TV.
//!
//! Sends an optional key code and prints a fixed set of status queries. On
//! first contact (no pairing key) the TV is asked to display its key on
//! screen.

use clap::{Parser, ValueEnum};

use netcast::{NetCastClient, Protocol, Query};

/// Remote control for an LG NetCast TV
#[derive(Parser, Debug)]
#[command(name = "netcast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address of the TV
    #[arg(long)]
    host: String,

    /// Pairing key to access the TV
    #[arg(long, env = "NETCAST_PAIRING_KEY")]
    pairing_key: Option<String>,

    /// TV protocol dialect (hdcp for pre-2012 models)
    #[arg(long, value_enum, default_value_t = ProtocolArg::Roap)]
    protocol: ProtocolArg,

    /// Remote control key code to send to the TV
    #[arg(long)]
    command: Option<u16>,

    /// Debug output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ProtocolArg {
    Roap,
    Hdcp,
}

impl From<ProtocolArg> for Protocol {
    fn from(arg: ProtocolArg) -> Self {
        match arg {
            ProtocolArg::Roap => Protocol::Roap,
            ProtocolArg::Hdcp => Protocol::Hdcp,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> netcast::Result<()> {
    let mut client =
        NetCastClient::new(cli.host, cli.pairing_key)?.with_protocol(cli.protocol.into());

    if let Err(err) = client.connect().await {
        if err.is_access_token() {
            println!(
                "Access token is displayed on TV - use it for the \
                 --pairing-key parameter to connect to your TV."
            );
            return Ok(());
        }
        return Err(err);
    }

    if let Some(code) = cli.command {
        client.send_command(code).await?;
        println!("Sent command {code}");
    }

    let infos = [
        ("Channel Info", Query::CurrentChannel),
        ("Volume Info", Query::VolumeInfo),
        ("Context Info", Query::ContextUi),
        ("Is 3D", Query::Is3d),
    ];
    for (title, query) in infos {
        // Best effort per query; a failure does not abort the rest
        match client.query_data(query).await {
            Ok(data) if !data.is_empty() => println!("{title}: {}", data[0]),
            Ok(_) => {}
            Err(err) => eprintln!("Can not retrieve {}: {err}", title.to_lowercase()),
        }
    }

    client.close();
    Ok(())
}
