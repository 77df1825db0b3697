//! Binary entrypoint for the netsurvey CLI.
//!
//! Commands:
//! - `init` - create a starter `config.toml`
//! - `simulate` - drive the processing pipeline with synthetic telemetry batches
//!
//! See the library crate docs for module-level details: `netsurvey::`.
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::Rng;

use netsurvey::config::Config;
use netsurvey::protobuf::records::{CdmaRecord, GsmRecord, LteRecord, UmtsRecord};
use netsurvey::survey::{
    CellularSurveyRecordListener, LocationCache, SurveyRecordProcessor, WifiRecordWrapper,
    WifiSurveyRecordListener,
};
use netsurvey::telemetry::{
    technology, CellObservation, CellTelemetry, GsmCellTelemetry, LocationFix, LteCellTelemetry,
    WifiScanResult,
};

#[derive(Parser)]
#[command(name = "netsurvey")]
#[command(about = "Survey record processing pipeline for cellular and Wi-Fi radio telemetry")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new configuration file
    Init,
    /// Run the pipeline against synthetic telemetry batches
    Simulate {
        /// Number of polling passes to simulate
        #[arg(short, long, default_value_t = 5)]
        polls: u32,
        /// Delay between polling passes, in milliseconds
        #[arg(short, long, default_value_t = 250)]
        interval_ms: u64,
        /// Also simulate Wi-Fi scan passes
        #[arg(short, long)]
        wifi: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).await.ok(),
    };
    init_logging(&pre_config, cli.verbose);

    match cli.command {
        Commands::Init => {
            Config::create_default(&cli.config).await?;
            println!("Created starter configuration at {}", cli.config);
        }
        Commands::Simulate {
            polls,
            interval_ms,
            wifi,
        } => {
            let config = match pre_config {
                Some(config) => config,
                None => {
                    warn!("No config file found at {}; using defaults", cli.config);
                    Config::default()
                }
            };
            simulate(&config, polls, interval_ms, wifi).await;
        }
    }

    Ok(())
}

fn init_logging(config: &Option<Config>, verbose: u8) {
    let level = match verbose {
        0 => config
            .as_ref()
            .map(|c| c.logging.level.clone())
            .unwrap_or_else(|| "info".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let mut builder = env_logger::Builder::from_default_env();
    builder.parse_filters(&level);
    let _ = builder.try_init();
}

/// Logs every record it receives; stands in for the file loggers and network
/// senders that consume records in a real deployment.
struct LoggingListener;

impl CellularSurveyRecordListener for LoggingListener {
    fn on_gsm_record(&self, record: &GsmRecord) -> Result<()> {
        info!(
            "GSM record #{}: arfcn={:?} signal={:?}",
            record.record_number, record.arfcn, record.signal_strength
        );
        Ok(())
    }

    fn on_cdma_record(&self, record: &CdmaRecord) -> Result<()> {
        info!(
            "CDMA record #{}: signal={:?} ecio={:?}",
            record.record_number, record.signal_strength, record.ecio
        );
        Ok(())
    }

    fn on_umts_record(&self, record: &UmtsRecord) -> Result<()> {
        info!(
            "UMTS record #{}: uarfcn={:?} signal={:?}",
            record.record_number, record.uarfcn, record.signal_strength
        );
        Ok(())
    }

    fn on_lte_record(&self, record: &LteRecord) -> Result<()> {
        info!(
            "LTE record #{} group {}: earfcn={:?} pci={:?} rsrp={:?} serving={:?}",
            record.record_number,
            record.group_number,
            record.earfcn,
            record.pci,
            record.rsrp,
            record.serving_cell
        );
        Ok(())
    }
}

impl WifiSurveyRecordListener for LoggingListener {
    fn on_wifi_beacon_records(&self, records: &[WifiRecordWrapper]) -> Result<()> {
        info!("Wi-Fi scan pass with {} beacon records", records.len());
        for wrapper in records {
            info!(
                "  beacon #{}: bssid={} channel={:?} signal={:?}",
                wrapper.record.record_number,
                wrapper.record.bssid,
                wrapper.record.channel,
                wrapper.record.signal_strength
            );
        }
        Ok(())
    }
}

async fn simulate(config: &Config, polls: u32, interval_ms: u64, wifi: bool) {
    let location = Arc::new(LocationCache::new(
        config.location.provider.clone(),
        config.location.accuracy_threshold_meters,
    ));
    let processor = SurveyRecordProcessor::with_mission_prefix(
        Arc::clone(&location),
        config.survey.device_id.clone(),
        &config.survey.mission_id_prefix,
    );
    info!("Starting simulated survey session: {}", processor.mission_id());

    let listener = Arc::new(LoggingListener);
    processor.register_cellular_listener(listener.clone());
    processor.register_wifi_listener(listener);

    let mut rng = rand::thread_rng();
    for poll in 0..polls {
        location.on_location_changed(LocationFix {
            latitude: 35.2271 + rng.gen_range(-0.001..0.001),
            longitude: -80.8431 + rng.gen_range(-0.001..0.001),
            altitude: 228.0 + rng.gen_range(-5.0..5.0),
            accuracy: rng.gen_range(3.0..40.0),
            provider: config.location.provider.clone(),
        });

        let batch = synthetic_cell_batch(&mut rng);
        processor.on_cell_info_update(&batch, technology::LTE);

        if wifi {
            let scan = synthetic_wifi_scan(&mut rng);
            processor.on_wifi_scan_update(&scan);
        }

        info!("Completed poll {} of {polls}", poll + 1);
        tokio::time::sleep(Duration::from_millis(interval_ms)).await;
    }
}

fn synthetic_cell_batch(rng: &mut impl Rng) -> Vec<CellObservation> {
    let mut batch = vec![CellObservation {
        serving: true,
        telemetry: CellTelemetry::Lte(LteCellTelemetry {
            mcc: 310,
            mnc: 410,
            tac: 24_867,
            ci: rng.gen_range(0..=268_435_455),
            earfcn: 5_230,
            pci: rng.gen_range(0..504),
            rsrp: rng.gen_range(-120..-70),
            rsrq: rng.gen_range(-20..-3),
            bandwidth_khz: 10_000,
            provider: Some("Example Wireless".to_string()),
            ..LteCellTelemetry::default()
        }),
    }];
    for _ in 0..rng.gen_range(0..3) {
        batch.push(CellObservation {
            serving: false,
            telemetry: CellTelemetry::Lte(LteCellTelemetry {
                earfcn: 5_230,
                pci: rng.gen_range(0..504),
                rsrp: rng.gen_range(-125..-90),
                ..LteCellTelemetry::default()
            }),
        });
    }
    // An occasional legacy neighbor, sometimes too sparse to survive validation.
    if rng.gen_bool(0.3) {
        batch.push(CellObservation {
            serving: false,
            telemetry: CellTelemetry::Gsm(GsmCellTelemetry {
                arfcn: rng.gen_range(1..125),
                bsic: rng.gen_range(0..64),
                signal_strength: if rng.gen_bool(0.5) {
                    rng.gen_range(-110..-60)
                } else {
                    netsurvey::telemetry::UNSET
                },
                ..GsmCellTelemetry::default()
            }),
        });
    }
    batch
}

fn synthetic_wifi_scan(rng: &mut impl Rng) -> Vec<WifiScanResult> {
    (0..rng.gen_range(1..6))
        .map(|i| WifiScanResult {
            bssid: format!("00:11:22:33:44:{i:02x}"),
            ssid: format!("ap-{i}"),
            signal_level: rng.gen_range(-90..-30),
            frequency: [2_412, 2_437, 2_462, 5_180, 5_240][rng.gen_range(0..5)],
            capabilities: "[WPA2-PSK-CCMP][RSN][ESS]".to_string(),
        })
        .collect()
}
