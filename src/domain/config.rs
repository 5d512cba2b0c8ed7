use crate::error::{PayrollError, Result};
use rust_decimal::Decimal;
use std::collections::HashMap;

pub const KEY_INSURANCE_FLOOR: &str = "JiShuL";
pub const KEY_INSURANCE_CEILING: &str = "JiShuH";
pub const KEY_PENSION: &str = "YangLao";
pub const KEY_MEDICAL: &str = "YiLiao";
pub const KEY_UNEMPLOYMENT: &str = "ShiYe";
pub const KEY_INJURY: &str = "GongShang";
pub const KEY_MATERNITY: &str = "ShengYu";
pub const KEY_HOUSING_FUND: &str = "GongJiJin";

/// Employee-side contribution rates, each a fraction of the contribution base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContributionRates {
    pub pension: Decimal,
    pub medical: Decimal,
    pub unemployment: Decimal,
    pub injury: Decimal,
    pub maternity: Decimal,
    pub housing_fund: Decimal,
}

impl ContributionRates {
    /// Sum of all rates, `None` on `Decimal` overflow.
    pub fn total(&self) -> Option<Decimal> {
        self.named()
            .into_iter()
            .try_fold(Decimal::ZERO, |sum, (_, rate)| sum.checked_add(rate))
    }

    fn named(&self) -> [(&'static str, Decimal); 6] {
        [
            (KEY_PENSION, self.pension),
            (KEY_MEDICAL, self.medical),
            (KEY_UNEMPLOYMENT, self.unemployment),
            (KEY_INJURY, self.injury),
            (KEY_MATERNITY, self.maternity),
            (KEY_HOUSING_FUND, self.housing_fund),
        ]
    }
}

/// Social-insurance parameters for one run.
///
/// Only constructible through [`InsuranceConfig::new`] or
/// [`InsuranceConfig::from_values`], so every instance has non-negative values,
/// `floor <= ceiling`, and rates that are fractions whose total is at most 1.
/// The total rate is summed once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsuranceConfig {
    floor: Decimal,
    ceiling: Decimal,
    rates: ContributionRates,
    total_rate: Decimal,
}

impl InsuranceConfig {
    pub fn new(floor: Decimal, ceiling: Decimal, rates: ContributionRates) -> Result<Self> {
        if floor < Decimal::ZERO {
            return Err(PayrollError::Validation(format!(
                "{KEY_INSURANCE_FLOOR} must not be negative, got {floor}"
            )));
        }
        if ceiling < Decimal::ZERO {
            return Err(PayrollError::Validation(format!(
                "{KEY_INSURANCE_CEILING} must not be negative, got {ceiling}"
            )));
        }
        if floor > ceiling {
            return Err(PayrollError::Validation(format!(
                "{KEY_INSURANCE_FLOOR} ({floor}) exceeds {KEY_INSURANCE_CEILING} ({ceiling})"
            )));
        }
        for (key, rate) in rates.named() {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(PayrollError::Validation(format!(
                    "{key} must be a fraction between 0 and 1, got {rate}"
                )));
            }
        }
        let total_rate = rates
            .total()
            .filter(|total| *total <= Decimal::ONE)
            .ok_or_else(|| {
                PayrollError::Validation("contribution rates add up to more than 1".to_string())
            })?;

        Ok(Self {
            floor,
            ceiling,
            rates,
            total_rate,
        })
    }

    /// Builds the config from raw key/value pairs, failing on the first
    /// required key that is absent.
    pub fn from_values(values: &HashMap<String, Decimal>) -> Result<Self> {
        let get = |key: &str| {
            values
                .get(key)
                .copied()
                .ok_or_else(|| PayrollError::Config {
                    key: key.to_string(),
                })
        };

        let floor = get(KEY_INSURANCE_FLOOR)?;
        let ceiling = get(KEY_INSURANCE_CEILING)?;
        let rates = ContributionRates {
            pension: get(KEY_PENSION)?,
            medical: get(KEY_MEDICAL)?,
            unemployment: get(KEY_UNEMPLOYMENT)?,
            injury: get(KEY_INJURY)?,
            maternity: get(KEY_MATERNITY)?,
            housing_fund: get(KEY_HOUSING_FUND)?,
        };

        Self::new(floor, ceiling, rates)
    }

    pub fn floor(&self) -> Decimal {
        self.floor
    }

    pub fn ceiling(&self) -> Decimal {
        self.ceiling
    }

    pub fn rates(&self) -> &ContributionRates {
        &self.rates
    }

    pub fn total_rate(&self) -> Decimal {
        self.total_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_values() -> HashMap<String, Decimal> {
        [
            (KEY_INSURANCE_FLOOR, dec!(3000)),
            (KEY_INSURANCE_CEILING, dec!(25000)),
            (KEY_PENSION, dec!(0.08)),
            (KEY_MEDICAL, dec!(0.02)),
            (KEY_UNEMPLOYMENT, dec!(0.005)),
            (KEY_INJURY, dec!(0)),
            (KEY_MATERNITY, dec!(0)),
            (KEY_HOUSING_FUND, dec!(0)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    #[test]
    fn test_from_values_sums_total_rate() {
        let config = InsuranceConfig::from_values(&sample_values()).unwrap();
        assert_eq!(config.floor(), dec!(3000));
        assert_eq!(config.ceiling(), dec!(25000));
        assert_eq!(config.total_rate(), dec!(0.105));
        assert_eq!(config.rates().pension, dec!(0.08));
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let mut values = sample_values();
        values.remove(KEY_MATERNITY);

        let err = InsuranceConfig::from_values(&values).unwrap_err();
        assert!(matches!(err, PayrollError::Config { ref key } if key == KEY_MATERNITY));
        assert_eq!(err.to_string(), "Config Error: missing key `ShengYu`");
    }

    #[test]
    fn test_floor_above_ceiling_rejected() {
        let mut values = sample_values();
        values.insert(KEY_INSURANCE_FLOOR.to_string(), dec!(30000));

        assert!(matches!(
            InsuranceConfig::from_values(&values),
            Err(PayrollError::Validation(_))
        ));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut values = sample_values();
        values.insert(KEY_INJURY.to_string(), dec!(-0.01));

        let err = InsuranceConfig::from_values(&values).unwrap_err();
        assert!(matches!(err, PayrollError::Validation(ref msg) if msg.contains(KEY_INJURY)));
    }

    #[test]
    fn test_rate_above_one_rejected() {
        let mut values = sample_values();
        values.insert(KEY_PENSION.to_string(), dec!(100000000000));

        let err = InsuranceConfig::from_values(&values).unwrap_err();
        assert!(matches!(err, PayrollError::Validation(ref msg) if msg.contains(KEY_PENSION)));
    }

    #[test]
    fn test_total_above_one_rejected() {
        let mut values = sample_values();
        values.insert(KEY_PENSION.to_string(), dec!(0.6));
        values.insert(KEY_MEDICAL.to_string(), dec!(0.5));

        assert!(matches!(
            InsuranceConfig::from_values(&values),
            Err(PayrollError::Validation(_))
        ));
    }

    #[test]
    fn test_rate_sum_overflow_is_error() {
        let rates = ContributionRates {
            pension: Decimal::MAX,
            medical: Decimal::MAX,
            ..Default::default()
        };
        assert_eq!(rates.total(), None);
        assert!(matches!(
            InsuranceConfig::new(dec!(3000), dec!(25000), rates),
            Err(PayrollError::Validation(_))
        ));
    }

    #[test]
    fn test_full_rate_and_huge_ceiling_allowed() {
        let rates = ContributionRates {
            pension: Decimal::ONE,
            ..Default::default()
        };
        let config = InsuranceConfig::new(Decimal::ZERO, Decimal::MAX, rates).unwrap();
        assert_eq!(config.total_rate(), Decimal::ONE);
    }

    #[test]
    fn test_floor_equal_to_ceiling_allowed() {
        let config =
            InsuranceConfig::new(dec!(5000), dec!(5000), ContributionRates::default()).unwrap();
        assert_eq!(config.total_rate(), Decimal::ZERO);
    }
}
