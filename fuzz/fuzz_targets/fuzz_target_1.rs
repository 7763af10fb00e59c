#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate nmea_records;

use nmea_records::Decoder;

fuzz_target!(|data: &[u8]| {
    let decoder = Decoder::new();

    for line in data.split(|b| *b == b'\n') {
        let _ = decoder.decode_bytes(line);
    }
});
