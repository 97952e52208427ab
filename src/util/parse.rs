use rust_decimal::Decimal;

use crate::{config::FeeTier, error::config::ConfigError};

/// Parses a decimal from an environment variable value.
///
/// # Arguments
/// - `name` - Environment variable name, for error reporting
/// - `value` - The raw value to parse
///
/// # Returns
/// - `Ok(Decimal)` - Successfully parsed value
/// - `Err(ConfigError::InvalidEnvVar)` - Value is not a valid decimal
pub fn parse_decimal(name: &str, value: &str) -> Result<Decimal, ConfigError> {
    value
        .trim()
        .parse::<Decimal>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("'{}' is not a decimal: {}", value.trim(), e),
        })
}

/// Parses a buyer-fee tier schedule from its env-variable format.
///
/// The format is a comma-separated list of `limit:percent` entries ordered
/// by ascending limit, where an empty limit marks the open-ended final
/// tier: `"10000:5.0,25000:4.75,:4.5"` means 5% up to $10,000, 4.75% up to
/// $25,000, and 4.5% above that.
///
/// # Arguments
/// - `name` - Environment variable name, for error reporting
/// - `value` - The raw schedule string
///
/// # Returns
/// - `Ok(Vec<FeeTier>)` - Parsed tiers, final tier open-ended
/// - `Err(ConfigError::InvalidEnvVar)` - Malformed entry, empty schedule,
///   or a schedule whose last tier is not open-ended
pub fn parse_fee_tiers(name: &str, value: &str) -> Result<Vec<FeeTier>, ConfigError> {
    let mut tiers = Vec::new();

    for part in value.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let (bound, percent) = part.split_once(':').ok_or_else(|| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("tier '{}' must be 'limit:percent'", part),
        })?;

        let up_to = if bound.trim().is_empty() {
            None
        } else {
            Some(parse_decimal(name, bound)?)
        };

        tiers.push(FeeTier {
            up_to,
            percent: parse_decimal(name, percent)?,
        });
    }

    match tiers.last() {
        None => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "fee schedule must contain at least one tier".to_string(),
        }),
        Some(last) if last.up_to.is_some() => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "last fee tier must be open-ended (':percent')".to_string(),
        }),
        Some(_) => Ok(tiers),
    }
}
