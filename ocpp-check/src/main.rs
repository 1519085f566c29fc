//! OCPP Check - CLI for the OCPP message model
//!
//! Decodes an OCPP 2.0.1 payload as the message named by action and
//! direction, then prints its representation and validity.
//!
//! # Usage
//!
//! ```bash
//! # Check a request payload from a file
//! ocpp-check --action UnpublishFirmware payload.json
//!
//! # Check a response payload from stdin
//! echo '{"status": "Accepted"}' | ocpp-check --action DataTransfer --direction response -
//!
//! # Print the normalized payload as well
//! ocpp-check --action Heartbeat --direction response --normalize resp.json
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use ocpp_model::{decode_dynamic, Action, AnyMessage, Direction, Validate};
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

/// OCPP 2.0.1 payload checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// OCPP action name (e.g. DataTransfer)
    #[arg(short, long)]
    action: String,

    /// Which half of the operation the payload is
    #[arg(short, long, value_enum, default_value = "request")]
    direction: DirectionArg,

    /// Print the normalized JSON payload after the representation
    #[arg(long)]
    normalize: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Payload file, or `-` for stdin
    payload: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DirectionArg {
    Request,
    Response,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Request => Direction::Request,
            DirectionArg::Response => Direction::Response,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Setup logging
    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }

    match run(&args) {
        Ok(report) => {
            println!("{}", report.text);
            if report.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Outcome of checking one payload
#[derive(Debug)]
struct Report {
    text: String,
    valid: bool,
}

fn run(args: &Args) -> Result<Report, Box<dyn std::error::Error>> {
    let action: Action = args.action.parse()?;
    let bytes = read_payload(&args.payload)?;
    let payload: serde_json::Value = serde_json::from_slice(&bytes)?;

    debug!("Checking {} {} payload", action, Direction::from(args.direction));
    let message = decode_dynamic(action, args.direction.into(), payload)?;

    let mut text = message.to_string();
    if args.normalize {
        text.push('\n');
        text.push_str(&normalized(&message)?);
    }

    Ok(Report {
        text,
        valid: message.validate(),
    })
}

fn normalized(message: &AnyMessage) -> Result<String, Box<dyn std::error::Error>> {
    Ok(serde_json::to_string_pretty(&message.payload()?)?)
}

fn read_payload(path: &Path) -> io::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args_for(action: &str, direction: DirectionArg, file: &tempfile::NamedTempFile) -> Args {
        Args {
            action: action.to_string(),
            direction,
            normalize: false,
            log_level: "warn".to_string(),
            payload: file.path().to_path_buf(),
        }
    }

    fn payload_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_valid_request_report() {
        let file = payload_file(r#"{"checksum": "d41d8cd98f00b204e9800998ecf8427e"}"#);
        let report = run(&args_for("UnpublishFirmware", DirectionArg::Request, &file)).unwrap();

        assert!(report.valid);
        assert!(report.text.starts_with("UnpublishFirmwareRequest{"));
        assert!(report.text.ends_with("isValid=true}"));
    }

    #[test]
    fn test_normalized_output() {
        let file = payload_file(r#"{"status": "Accepted", "data": null}"#);
        let mut args = args_for("DataTransfer", DirectionArg::Response, &file);
        args.normalize = true;

        let report = run(&args).unwrap();
        assert!(report.text.contains("\"status\": \"Accepted\""));
        assert!(!report.text.contains("\"data\""));
    }

    #[test]
    fn test_constraint_failure_is_an_error() {
        let file = payload_file(r#"{"transactionId": "0123456789012345678901234567890123456789"}"#);
        let err = run(&args_for("RequestStopTransaction", DirectionArg::Request, &file)).unwrap_err();
        assert!(err.to_string().contains("transactionId"));
    }

    #[test]
    fn test_unknown_action() {
        let file = payload_file("{}");
        let err = run(&args_for("BootNotification", DirectionArg::Request, &file)).unwrap_err();
        assert!(err.to_string().contains("Unknown action"));
    }
}
