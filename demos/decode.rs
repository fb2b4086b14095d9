use bleadv::{AdvDictionary, AdvertisementData, ScanInput};
use tracing::{info, metadata::LevelFilter};

fn main() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // A heart-rate beacon as the Android stack delivers it: raw AD structures.
    let bytes = [
        0x02, 0x01, 0x06, // flags
        0x03, 0x03, 0x0d, 0x18, // complete list of 16-bit service UUIDs
        0x09, 0x09, b'P', b'o', b'l', b'a', b'r', b' ', b'H', b'7', // complete local name
        0x05, 0xff, 0x4c, 0x00, 0x10, 0x02, // manufacturer specific data
    ];
    match AdvertisementData::decode(ScanInput::AdBytes(&bytes)) {
        Ok(adv) => info!("raw path: {adv:?}"),
        Err(err) => info!("raw path failed ({err}), partial record: {:?}", err.partial()),
    }

    // The same beacon as CoreBluetooth surfaces it: a pre-decoded dictionary.
    let dict = AdvDictionary {
        local_name: Some("Polar H7".into()),
        tx_power_level: Some(-8),
        service_uuids: vec!["180D".into()],
        manufacturer_data: Some(vec![0x4c, 0x00, 0x10, 0x02]),
        ..Default::default()
    };
    match AdvertisementData::decode(ScanInput::Dictionary(&dict)) {
        Ok(adv) => info!("dictionary path: {adv:?}"),
        Err(err) => info!("dictionary path failed: {err}"),
    }
}
