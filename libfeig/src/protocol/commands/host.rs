// libfeig/src/protocol/commands/host.rs

/// Encode RF Output On/Off (0x6A) data: a single on/off flag byte.
pub fn encode_rf_output(on: bool) -> Vec<u8> {
    vec![u8::from(on)]
}

/// Encode Get Reader Info (0x66) data: the information mode byte.
pub fn encode_reader_info(mode: u8) -> Vec<u8> {
    vec![mode]
}
