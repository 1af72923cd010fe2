//! Scans for Victron Instant Readout advertisements and prints decoded
//! readings as JSON, one line per advertisement.
//!
//! This binary is the BLE transport collaborator the library assumes:
//! it owns the scan loop, the per-MAC de-duplication cache, and the
//! device-key table. The library itself never touches a Bluetooth
//! adapter.
//!
//! Usage: `victron-ble-scan <keys.json>`, where `keys.json` maps
//! uppercase MAC addresses to 32-character hex device keys.

use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;

use anyhow::{Context, Result};
use bluest::Adapter;
use futures_util::StreamExt;
use tracing::{debug, info, warn};

use victron_ble_reader::{detect_device_type, parse, DeviceKey, VICTRON_MANUFACTURER_ID};

/// Advertisements are re-parsed once past this many distinct payloads
/// seen since the cache was last cleared, mirroring the bounded
/// de-duplication cache the original scanner implementation keeps to
/// avoid growing without bound over a long-running scan.
const SEEN_CACHE_LIMIT: usize = 1000;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let keys_path = env::args()
        .nth(1)
        .context("usage: victron-ble-scan <keys.json>")?;
    let keys = load_keys(&keys_path)?;

    let adapter = Adapter::default()
        .await
        .context("no Bluetooth adapter available")?;
    adapter.wait_available().await?;

    let mut scan = adapter.scan(&[]).await.context("failed to start scan")?;
    info!(devices = keys.len(), "scanning for Instant Readout advertisements");

    let mut seen = HashSet::new();
    let mut missing_key_macs = HashSet::new();

    while let Some(discovered) = scan.next().await {
        let Some(mfg) = discovered.adv_data.manufacturer_data.as_ref() else {
            continue;
        };
        if mfg.company_id != VICTRON_MANUFACTURER_ID {
            continue;
        }

        let mac = discovered.device.id().to_string();
        let raw = &mfg.data;

        if seen.len() >= SEEN_CACHE_LIMIT {
            seen.clear();
        }
        if !seen.insert(raw.to_vec()) {
            continue;
        }

        let Some(key_hex) = keys.get(&mac) else {
            if missing_key_macs.insert(mac.clone()) {
                info!(%mac, "no device key configured, dropping advertisement");
            }
            continue;
        };

        let kind = match detect_device_type(raw) {
            Ok(kind) => kind,
            Err(err) => {
                warn!(%mac, error = %err, "unrecognized device, dropping advertisement");
                continue;
            }
        };

        let key = match DeviceKey::from_hex(key_hex) {
            Ok(key) => key,
            Err(err) => {
                warn!(%mac, error = %err, "device key is not valid hex, dropping advertisement");
                continue;
            }
        };

        match parse(raw, &key) {
            Ok(reading) => {
                debug!(%mac, ?kind, "decoded advertisement");
                match serde_json::to_string(&reading) {
                    Ok(json) => println!("{json}"),
                    Err(err) => warn!(%mac, error = %err, "failed to serialize reading"),
                }
            }
            Err(err) => warn!(%mac, error = %err, "failed to decode advertisement"),
        }
    }

    Ok(())
}

fn load_keys(path: &str) -> Result<HashMap<String, String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading device key table at {path}"))?;
    let keys: HashMap<String, String> =
        serde_json::from_str(&contents).context("parsing device key table as JSON")?;
    Ok(keys)
}
