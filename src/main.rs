extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate nmea_gps;

use clap::Parser;
use std::path::PathBuf;
use std::process;

use nmea_gps::coord::Dms;
use nmea_gps::{Decoder, DeviceTransport, Gps, TransportConfig, TransportError};

/// Print the fix of a GPS receiver or of a recorded NMEA capture.
#[derive(Parser, Debug)]
struct Args {
    /// Device the receiver is attached to
    #[arg(long, default_value = "/dev/ttyUSB0")]
    device: PathBuf,

    /// Replay a capture file instead of reading the device
    #[arg(long, conflicts_with = "device")]
    replay: Option<PathBuf>,
}

fn print_fix(decoder: &Decoder) {
    println!(
        "{} Lat: {} ({}) Long: {} ({}) Alt: {} Speed: {}",
        decoder.timestamp(),
        decoder.latitude(),
        Dms::from_decimal(f64::from(decoder.latitude())),
        decoder.longitude(),
        Dms::from_decimal(f64::from(decoder.longitude())),
        decoder.altitude(),
        decoder.speed()
    );
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Some(path) = args.replay {
        let mut decoder = Decoder::new();
        match decoder.read_all_from(&path) {
            Ok(_) => print_fix(&decoder),
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
        return;
    }

    let transport = DeviceTransport::new(TransportConfig {
        device: args.device,
        ..TransportConfig::default()
    });
    let mut gps = match Gps::new(transport) {
        Ok(gps) => gps,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    loop {
        match gps.read_one() {
            Ok(_) => print_fix(gps.decoder()),
            Err(TransportError::Closed) => break,
            Err(e @ TransportError::RecordTooLong(_)) => warn!("{}", e),
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
    }
}
