//! Batch command parser
//!
//! Input lines are tab-separated tokens: a keyword followed by its
//! arguments. The parser is strict about argument counts and validates
//! every numeric value and range here, so [`Command`] payloads carry only
//! typed, in-range data.

use crate::command::error::{CommandError, ParseResult};
use crate::command::payload::Command;
use crate::device::ColorSetting;
use crate::types::Timestamp;
use tracing::trace;

/// Lower bound of the lamp white temperature range, in kelvin.
pub const KELVIN_MIN: u32 = 2000;
/// Upper bound of the lamp white temperature range, in kelvin.
pub const KELVIN_MAX: u32 = 6500;
/// Largest accepted hex color code.
pub const COLOR_CODE_MAX: i32 = 0xFF_FF_FF;

/// Parse one input line into a [`Command`].
pub fn parse_line(line: &str) -> ParseResult<Command> {
    let tokens: Vec<&str> = line.split('\t').collect();
    trace!(keyword = tokens[0], args = tokens.len() - 1, "parsing command");

    match (tokens[0], tokens.len()) {
        ("SetInitialTime", 2) => Ok(Command::SetInitialTime(parse_time(tokens[1])?)),
        ("SetTime", 2) => Ok(Command::SetTime(parse_time(tokens[1])?)),
        ("SkipMinutes", 2) => Ok(Command::SkipMinutes(parse_minutes(tokens[1])?)),
        ("Nop", 1) => Ok(Command::Nop),
        ("Add", 3..=6) => parse_add(&tokens),
        ("Remove", 2) => Ok(Command::Remove { name: tokens[1].to_string() }),
        ("ChangeName", 3) => Ok(Command::ChangeName {
            old: tokens[1].to_string(),
            new: tokens[2].to_string(),
        }),
        ("Switch", 3) => Ok(Command::Switch {
            name: tokens[1].to_string(),
            on: parse_status(tokens[2])?,
        }),
        ("SetSwitchTime", 3) => Ok(Command::SetSwitchTime {
            name: tokens[1].to_string(),
            time: parse_time(tokens[2])?,
        }),
        ("PlugIn", 3) => Ok(Command::PlugIn {
            name: tokens[1].to_string(),
            ampere: parse_ampere(tokens[2])?,
        }),
        ("PlugOut", 2) => Ok(Command::PlugOut { name: tokens[1].to_string() }),
        ("SetKelvin", 3) => Ok(Command::SetKelvin {
            name: tokens[1].to_string(),
            kelvin: parse_kelvin(tokens[2])?,
        }),
        ("SetBrightness", 3) => Ok(Command::SetBrightness {
            name: tokens[1].to_string(),
            brightness: parse_brightness(tokens[2])?,
        }),
        ("SetWhite", 4) => Ok(Command::SetWhite {
            name: tokens[1].to_string(),
            kelvin: parse_kelvin(tokens[2])?,
            brightness: parse_brightness(tokens[3])?,
        }),
        ("SetColorCode", 3) => Ok(Command::SetColorCode {
            name: tokens[1].to_string(),
            color: parse_color_code(tokens[2])?,
        }),
        ("SetColor", 4) => Ok(Command::SetColor {
            name: tokens[1].to_string(),
            color: parse_color_code(tokens[2])?,
            brightness: parse_brightness(tokens[3])?,
        }),
        ("ZReport", 1) => Ok(Command::ZReport),
        _ => Err(CommandError::Erroneous),
    }
}

/// Dispatch `Add <kind> <name> [...]` by kind and argument count.
fn parse_add(tokens: &[&str]) -> ParseResult<Command> {
    match (tokens[1], tokens.len()) {
        ("SmartCamera", 4) => Ok(Command::AddCamera {
            name: tokens[2].to_string(),
            megabytes_per_minute: parse_megabytes(tokens[3])?,
            initially_on: false,
        }),
        ("SmartCamera", 5) => Ok(Command::AddCamera {
            name: tokens[2].to_string(),
            megabytes_per_minute: parse_megabytes(tokens[3])?,
            initially_on: parse_status(tokens[4])?,
        }),
        ("SmartPlug", 3) => Ok(Command::AddPlug {
            name: tokens[2].to_string(),
            initially_on: false,
            ampere: None,
        }),
        ("SmartPlug", 4) => Ok(Command::AddPlug {
            name: tokens[2].to_string(),
            initially_on: parse_status(tokens[3])?,
            ampere: None,
        }),
        ("SmartPlug", 5) => Ok(Command::AddPlug {
            name: tokens[2].to_string(),
            initially_on: parse_status(tokens[3])?,
            ampere: Some(parse_ampere(tokens[4])?),
        }),
        ("SmartLamp", 3) => Ok(Command::AddLamp {
            name: tokens[2].to_string(),
            initially_on: false,
            white: None,
        }),
        ("SmartLamp", 4) => Ok(Command::AddLamp {
            name: tokens[2].to_string(),
            initially_on: parse_status(tokens[3])?,
            white: None,
        }),
        ("SmartLamp", 6) => Ok(Command::AddLamp {
            name: tokens[2].to_string(),
            initially_on: parse_status(tokens[3])?,
            white: Some((parse_kelvin(tokens[4])?, parse_brightness(tokens[5])?)),
        }),
        ("SmartColorLamp", 3) => Ok(Command::AddColorLamp {
            name: tokens[2].to_string(),
            initially_on: false,
            color: None,
        }),
        ("SmartColorLamp", 4) => Ok(Command::AddColorLamp {
            name: tokens[2].to_string(),
            initially_on: parse_status(tokens[3])?,
            color: None,
        }),
        ("SmartColorLamp", 6) => Ok(Command::AddColorLamp {
            name: tokens[2].to_string(),
            initially_on: parse_status(tokens[3])?,
            color: Some((parse_color_setting(tokens[4])?, parse_brightness(tokens[5])?)),
        }),
        _ => Err(CommandError::Erroneous),
    }
}

fn parse_time(token: &str) -> ParseResult<Timestamp> {
    Timestamp::parse(token).map_err(|_| CommandError::TimeFormat)
}

fn parse_minutes(token: &str) -> ParseResult<i64> {
    token.parse().map_err(|_| CommandError::Erroneous)
}

fn parse_status(token: &str) -> ParseResult<bool> {
    if token.eq_ignore_ascii_case("on") {
        Ok(true)
    } else if token.eq_ignore_ascii_case("off") {
        Ok(false)
    } else {
        Err(CommandError::Erroneous)
    }
}

fn parse_kelvin(token: &str) -> ParseResult<u32> {
    let kelvin: i64 = token.parse().map_err(|_| CommandError::Erroneous)?;
    if !(i64::from(KELVIN_MIN)..=i64::from(KELVIN_MAX)).contains(&kelvin) {
        return Err(CommandError::KelvinRange);
    }
    Ok(kelvin as u32)
}

fn parse_brightness(token: &str) -> ParseResult<u8> {
    let brightness: i64 = token.parse().map_err(|_| CommandError::Erroneous)?;
    if !(0..=100).contains(&brightness) {
        return Err(CommandError::BrightnessRange);
    }
    Ok(brightness as u8)
}

/// Parse and range-check a `0x`-prefixed hex color code, keeping the
/// original spelling for reports.
fn parse_color_code(token: &str) -> ParseResult<String> {
    let digits = token.strip_prefix("0x").ok_or(CommandError::Erroneous)?;
    let value = i32::from_str_radix(digits, 16).map_err(|_| CommandError::Erroneous)?;
    if !(0..=COLOR_CODE_MAX).contains(&value) {
        return Err(CommandError::ColorCodeRange);
    }
    Ok(token.to_string())
}

/// A color-lamp setting token: hex code when `0x`-prefixed, kelvin otherwise.
fn parse_color_setting(token: &str) -> ParseResult<ColorSetting> {
    if token.starts_with("0x") {
        Ok(ColorSetting::Color(parse_color_code(token)?))
    } else {
        Ok(ColorSetting::Kelvin(parse_kelvin(token)?))
    }
}

fn parse_ampere(token: &str) -> ParseResult<f64> {
    let ampere: f64 = token.parse().map_err(|_| CommandError::Erroneous)?;
    if ampere <= 0.0 {
        return Err(CommandError::AmpereNotPositive);
    }
    Ok(ampere)
}

fn parse_megabytes(token: &str) -> ParseResult<f64> {
    let megabytes: f64 = token.parse().map_err(|_| CommandError::Erroneous)?;
    if megabytes <= 0.0 {
        return Err(CommandError::MegabyteNotPositive);
    }
    Ok(megabytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keyword_and_bad_arity_are_erroneous() {
        assert_eq!(parse_line("Frobnicate"), Err(CommandError::Erroneous));
        assert_eq!(parse_line("ZReport\textra"), Err(CommandError::Erroneous));
        assert_eq!(parse_line("Remove"), Err(CommandError::Erroneous));
        assert_eq!(parse_line("Switch\tlamp"), Err(CommandError::Erroneous));
    }

    #[test]
    fn time_commands_parse_and_validate_format() {
        assert_eq!(
            parse_line("SetTime\t2024-01-02_03:04:05"),
            Ok(Command::SetTime(Timestamp::parse("2024-01-02_03:04:05").unwrap()))
        );
        assert_eq!(
            parse_line("SetInitialTime\t2024-13-02_03:04:05"),
            Err(CommandError::TimeFormat)
        );
        assert_eq!(parse_line("SkipMinutes\tten"), Err(CommandError::Erroneous));
        assert_eq!(parse_line("SkipMinutes\t-5"), Ok(Command::SkipMinutes(-5)));
    }

    #[test]
    fn add_camera_arities() {
        assert_eq!(
            parse_line("Add\tSmartCamera\tcam\t2.5"),
            Ok(Command::AddCamera {
                name: "cam".into(),
                megabytes_per_minute: 2.5,
                initially_on: false,
            })
        );
        assert_eq!(
            parse_line("Add\tSmartCamera\tcam\t2.5\tOn"),
            Ok(Command::AddCamera {
                name: "cam".into(),
                megabytes_per_minute: 2.5,
                initially_on: true,
            })
        );
        assert_eq!(
            parse_line("Add\tSmartCamera\tcam\t-1"),
            Err(CommandError::MegabyteNotPositive)
        );
        assert_eq!(parse_line("Add\tSmartCamera\tcam"), Err(CommandError::Erroneous));
    }

    #[test]
    fn add_plug_arities() {
        assert_eq!(
            parse_line("Add\tSmartPlug\tp"),
            Ok(Command::AddPlug { name: "p".into(), initially_on: false, ampere: None })
        );
        assert_eq!(
            parse_line("Add\tSmartPlug\tp\ton\t3"),
            Ok(Command::AddPlug { name: "p".into(), initially_on: true, ampere: Some(3.0) })
        );
        assert_eq!(
            parse_line("Add\tSmartPlug\tp\ton\t0"),
            Err(CommandError::AmpereNotPositive)
        );
    }

    #[test]
    fn add_lamp_requires_both_white_values_or_neither() {
        assert_eq!(
            parse_line("Add\tSmartLamp\tl\toff\t3000\t50"),
            Ok(Command::AddLamp {
                name: "l".into(),
                initially_on: false,
                white: Some((3000, 50)),
            })
        );
        // Five tokens would mean a kelvin with no brightness.
        assert_eq!(parse_line("Add\tSmartLamp\tl\toff\t3000"), Err(CommandError::Erroneous));
        assert_eq!(
            parse_line("Add\tSmartLamp\tl\toff\t1999\t50"),
            Err(CommandError::KelvinRange)
        );
        assert_eq!(
            parse_line("Add\tSmartLamp\tl\toff\t3000\t101"),
            Err(CommandError::BrightnessRange)
        );
    }

    #[test]
    fn color_lamp_setting_switches_on_hex_prefix() {
        assert_eq!(
            parse_line("Add\tSmartColorLamp\tc\ton\t0x00FF00\t75"),
            Ok(Command::AddColorLamp {
                name: "c".into(),
                initially_on: true,
                color: Some((ColorSetting::Color("0x00FF00".into()), 75)),
            })
        );
        assert_eq!(
            parse_line("Add\tSmartColorLamp\tc\ton\t5000\t75"),
            Ok(Command::AddColorLamp {
                name: "c".into(),
                initially_on: true,
                color: Some((ColorSetting::Kelvin(5000), 75)),
            })
        );
        assert_eq!(
            parse_line("Add\tSmartColorLamp\tc\ton\t0x1FFFFFF\t75"),
            Err(CommandError::ColorCodeRange)
        );
        assert_eq!(
            parse_line("Add\tSmartColorLamp\tc\ton\t0xGG\t75"),
            Err(CommandError::Erroneous)
        );
    }

    #[test]
    fn set_white_checks_kelvin_before_brightness() {
        assert_eq!(
            parse_line("SetWhite\tl\t9000\t200"),
            Err(CommandError::KelvinRange)
        );
        assert_eq!(
            parse_line("SetWhite\tl\t4000\t200"),
            Err(CommandError::BrightnessRange)
        );
        assert_eq!(
            parse_line("SetWhite\tl\t4000\t80"),
            Ok(Command::SetWhite { name: "l".into(), kelvin: 4000, brightness: 80 })
        );
    }

    #[test]
    fn status_is_case_insensitive() {
        assert_eq!(
            parse_line("Switch\tl\tOFF"),
            Ok(Command::Switch { name: "l".into(), on: false })
        );
        assert_eq!(parse_line("Switch\tl\tmaybe"), Err(CommandError::Erroneous));
    }

    #[test]
    fn color_code_keeps_the_original_spelling() {
        assert_eq!(
            parse_line("SetColorCode\tc\t0xabcdef"),
            Ok(Command::SetColorCode { name: "c".into(), color: "0xabcdef".into() })
        );
        assert_eq!(parse_line("SetColorCode\tc\tabcdef"), Err(CommandError::Erroneous));
    }

    #[test]
    fn plug_commands() {
        assert_eq!(
            parse_line("PlugIn\tp\t2.5"),
            Ok(Command::PlugIn { name: "p".into(), ampere: 2.5 })
        );
        assert_eq!(parse_line("PlugIn\tp\t-2"), Err(CommandError::AmpereNotPositive));
        assert_eq!(parse_line("PlugOut\tp"), Ok(Command::PlugOut { name: "p".into() }));
    }
}
