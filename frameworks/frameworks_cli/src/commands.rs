//! Command Execution Module
//!
//! Runs one parsed command against the API facades and returns the lines to
//! print. Keeping output as data lets the binary stay a thin shell.

use api_facades::{decode, divmod, encode, factorial, factorial_with_limit, FacadeError};

use crate::args::Command;
use crate::env::Settings;

/// Reference radix 2^52 digits for 60!, captured through 53-bit floats
pub const REFERENCE_DIGITS: [u64; 6] = [
    0,
    3496586634485440,
    2043848730123309,
    3657033000183100,
    1533264680407645,
    4491,
];

/// Run a command
///
/// # Returns
///
/// * `Ok(lines)` - Output lines, without trailing newlines
/// * `Err(FacadeError)` - The operation failed
pub fn run(command: &Command, settings: &Settings) -> Result<Vec<String>, FacadeError> {
    match command {
        Command::Factorial { n } => {
            let value = match settings.factorial_limit {
                Some(max) => factorial_with_limit(*n, max)?,
                None => factorial(*n)?,
            };
            Ok(vec![value.to_string()])
        }
        Command::Encode { base, digits } => {
            let value = encode(digits, settings.resolve_base(*base))?;
            Ok(vec![value.to_string()])
        }
        Command::Decode { base, value } => {
            let digits = decode(value, settings.resolve_base(*base))?;
            Ok(vec![digits.to_string()])
        }
        Command::Divmod { dividend, divisor } => {
            let (q, r) = divmod(dividend, divisor)?;
            Ok(vec![format!("{} {}", q, r)])
        }
        Command::Demo => demo(),
    }
}

fn demo() -> Result<Vec<String>, FacadeError> {
    let exact = factorial(60)?;
    let reference = encode(&REFERENCE_DIGITS, None)?;
    let canonical = decode(&exact, None)?;
    Ok(vec![
        format!("factorial(60)         = {}", exact),
        format!("encode(reference)     = {}", reference),
        format!("digits of 60! (2^52)  = {}", canonical),
        format!("reference matches 60! = {}", reference == exact),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_facades::BigNumber;

    #[test]
    fn test_factorial_command() {
        let out = run(&Command::Factorial { n: 30 }, &Settings::default()).unwrap();
        assert_eq!(out, vec!["265252859812191058636308480000000".to_string()]);
    }

    #[test]
    fn test_factorial_limit_from_settings() {
        let settings = Settings {
            base: None,
            factorial_limit: Some(10),
        };
        assert!(run(&Command::Factorial { n: 11 }, &settings).is_err());
        assert!(run(&Command::Factorial { n: 10 }, &settings).is_ok());
    }

    #[test]
    fn test_encode_decode_commands() {
        let settings = Settings::default();
        let out = run(
            &Command::Encode {
                base: Some(10),
                digits: vec![5, 12],
            },
            &settings,
        )
        .unwrap();
        assert_eq!(out, vec!["125".to_string()]);

        let out = run(
            &Command::Decode {
                base: Some(10),
                value: BigNumber::from_u64(125),
            },
            &settings,
        )
        .unwrap();
        assert_eq!(out, vec!["5 2 1".to_string()]);
    }

    #[test]
    fn test_base_from_settings() {
        let settings = Settings {
            base: Some(16),
            factorial_limit: None,
        };
        let out = run(
            &Command::Decode {
                base: None,
                value: BigNumber::from_u64(255),
            },
            &settings,
        )
        .unwrap();
        assert_eq!(out, vec!["15 15".to_string()]);
    }

    #[test]
    fn test_decode_zero_prints_empty_line() {
        let out = run(
            &Command::Decode {
                base: None,
                value: BigNumber::zero(),
            },
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(out, vec![String::new()]);
    }

    #[test]
    fn test_divmod_command() {
        let cmd = Command::Divmod {
            dividend: BigNumber::from_u64(17),
            divisor: BigNumber::from_u64(5),
        };
        assert_eq!(run(&cmd, &Settings::default()).unwrap(), vec!["3 2".to_string()]);

        let cmd = Command::Divmod {
            dividend: BigNumber::from_u64(17),
            divisor: BigNumber::zero(),
        };
        assert_eq!(
            run(&cmd, &Settings::default()),
            Err(FacadeError::DivisionByZero)
        );
    }

    #[test]
    fn test_errors_propagate() {
        let cmd = Command::Decode {
            base: None,
            value: BigNumber::from_i64(-1),
        };
        assert!(matches!(
            run(&cmd, &Settings::default()),
            Err(FacadeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_demo() {
        let out = run(&Command::Demo, &Settings::default()).unwrap();
        assert_eq!(out.len(), 4);
        assert!(out[0].ends_with(
            "8320987112741390144276341183223364380754172606361245952449277696409600000000000000"
        ));
        assert!(out[1].ends_with(
            "8320987112741390144276341183223364380754172606361221274640691798350833743162245120"
        ));
        assert!(out[2].ends_with(
            "0 4472561264986224 2043848730123310 3657033000183100 1533264680407645 4491"
        ));
        assert!(out[3].ends_with("false"));
    }
}
