mod config;

use anyhow::{anyhow, Result};
use clap::Parser;
use common::logger;
use configuration::CaptureConfiguration;

use self::config::{Command, Config, OutputKind};

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|it| format!("{:02x}", it)).collect()
}

fn from_hex(value: &str) -> Result<Vec<u8>> {
    let value = value.trim();
    if value.len() % 2 != 0 {
        return Err(anyhow!("hex record has an odd length: {}", value.len()));
    }

    (0..value.len())
        .step_by(2)
        .map(|i| {
            value
                .get(i..i + 2)
                .and_then(|it| u8::from_str_radix(it, 16).ok())
                .ok_or_else(|| anyhow!("invalid hex at offset {}", i))
        })
        .collect()
}

fn main() -> Result<()> {
    let config = Config::parse();

    logger::init_logger(config.log_level, config.log_path.as_deref())?;

    log::info!("cli config = {:?}", config);

    match config.command {
        Command::Encode(args) => {
            let configuration = args.builder().try_build()?;

            match args.format {
                OutputKind::Json => {
                    println!("{}", serde_json::to_string_pretty(&configuration)?)
                }
                OutputKind::Record => println!("{}", to_hex(&configuration.to_record())),
            }
        }
        Command::Decode { record } => {
            let configuration = CaptureConfiguration::from_record(&from_hex(&record)?)?;
            println!("{}", serde_json::to_string_pretty(&configuration)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let record = CaptureConfiguration::default().to_record();
        let hex = to_hex(&record);

        assert_eq!(hex.len(), CaptureConfiguration::RECORD_SIZE * 2);
        assert!(hex.starts_with("00050000d0020000"));
        assert_eq!(from_hex(&hex).unwrap(), record.to_vec());
    }

    #[test]
    fn bad_hex() {
        assert!(from_hex("abc").is_err());
        assert!(from_hex("zz").is_err());
        assert!(from_hex("é0").is_err());
    }
}
