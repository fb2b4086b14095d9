use bleadv::{AdvertisementData, Characteristic, CharacteristicProperties, Peripheral};

#[test]
fn peripheral_passes_identity_fields_through() {
    let adv = AdvertisementData::from_ad_bytes(&[0x02, 0x01, 0x06]).unwrap();
    let peripheral = Peripheral::new("a1:b2:c3:d4:e5:f6", Some("Polar H7".into()), Some(-61), adv, Vec::new());

    assert_eq!(peripheral.id(), "a1:b2:c3:d4:e5:f6");
    assert_eq!(peripheral.name(), Some("Polar H7"));
    assert_eq!(peripheral.rssi(), Some(-61));
    assert_eq!(peripheral.advertisement().flags(), 6);
    assert!(peripheral.characteristics().is_empty());
}

#[test]
fn characteristic_metadata_is_copied_verbatim() {
    let characteristic = Characteristic {
        service_uuid: "180d".into(),
        uuid: "2a37".into(),
        properties: CharacteristicProperties::from_bits(1 << 4),
        descriptors: vec!["2902".into()],
    };
    let peripheral = Peripheral::new(
        "a1:b2:c3:d4:e5:f6",
        None,
        None,
        AdvertisementData::default(),
        vec![characteristic],
    );

    let got = &peripheral.characteristics()[0];
    assert_eq!(got.service_uuid, "180d");
    assert_eq!(got.uuid, "2a37");
    assert!(got.properties.notify);
    assert!(!got.properties.read);
    assert_eq!(got.descriptors, ["2902".to_string()]);
}

#[test]
fn characteristic_properties_round_trip_their_bits() {
    let bits = (1 << 1) | (1 << 3) | (1 << 8);
    let properties = CharacteristicProperties::from_bits(bits);
    assert!(properties.read);
    assert!(properties.write);
    assert!(properties.reliable_write);
    assert_eq!(properties.to_bits(), bits);
}
