use std::num;

quick_error! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum DecodeError {
        InvalidInput(reason: &'static str) {
            description("Invalid input")
            display("Input is not a single NMEA sentence: {}", reason)
        }
        MalformedSentence(err: Malformed) {
            from()
            description("Malformed sentence")
            display("Malformed sentence: {}", err)
            cause(err)
        }
        UnrecognizedFixType(value: i64) {
            description("Unrecognized fix type")
            display("Fix type {} is outside of the known range 0..=2", value)
        }
        UnparsableNumber { field: &'static str, token: String } {
            description("Unparsable number")
            display("Could not parse {:?} as the {} field", token, field)
        }
        InvalidDateTime { date: String, time: String } {
            description("Invalid date or time")
            display("Date {:?} and time {:?} do not form a valid UTC timestamp", date, time)
        }
    }
}

quick_error! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum Malformed {
        Empty {
            description("Empty sentence")
            display("The sentence is empty")
        }
        MissingStartDelimiter {
            description("Missing start delimiter")
            display("The first field does not start with '$'")
        }
        MissingTypeCode {
            description("Missing type code")
            display("The first field is too short to hold a sentence type")
        }
        TooFewFields { sentence: &'static str, expected: usize, found: usize } {
            description("Too few fields")
            display("{} sentence needs at least {} fields, found {}", sentence, expected, found)
        }
        PartialSatelliteGroup { trailing: usize } {
            description("Partial satellite group")
            display("GSV sentence ends in a truncated satellite group of {} fields", trailing)
        }
    }
}

quick_error! {
    #[derive(Debug, PartialEq)]
    pub enum CoordinateError {
        TooShort(value: String) {
            description("Coordinate too short")
            display("The value {:?} is too short for a coordinate", value)
        }
        InvalidHemisphere(hemisphere: String) {
            description("Invalid hemisphere")
            display("Encountered unexpected hemisphere {:?}", hemisphere)
        }
        Degrees(err: num::ParseIntError) {
            from()
            description("Invalid degrees")
            display("{}", err)
            cause(err)
        }
        DecimalMin(err: num::ParseFloatError) {
            from()
            description("Invalid decimal minutes")
            display("{}", err)
            cause(err)
        }
        InvalidMinutes(val: f64) {
            description("Invalid minutes")
            display("Invalid minutes: {} should be at least 0 and below 60", val)
        }
        InvalidCoord(val: f64, max: f64) {
            description("Invalid coordinate")
            display("Invalid coordinate: {} should be between {} and {}", val, max * -1.0, max)
        }
    }
}
