use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Monthly standard deduction subtracted before the bracket lookup.
pub const TAX_EXEMPTION_THRESHOLD: Decimal = dec!(5000);

/// One row of the progressive quick-lookup table.
///
/// A bracket applies when taxable income is strictly greater than
/// `threshold`; the tax is then `taxable * rate - quick_subtractor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    pub threshold: Decimal,
    pub rate: Decimal,
    pub quick_subtractor: Decimal,
}

impl TaxBracket {
    const fn new(threshold: Decimal, rate: Decimal, quick_subtractor: Decimal) -> Self {
        Self {
            threshold,
            rate,
            quick_subtractor,
        }
    }

    pub fn applies_to(&self, taxable: Decimal) -> bool {
        taxable > self.threshold
    }

    /// `None` when the product overflows `Decimal`.
    pub fn tax_on(&self, taxable: Decimal) -> Option<Decimal> {
        taxable
            .checked_mul(self.rate)?
            .checked_sub(self.quick_subtractor)
    }
}

/// Ordered by descending threshold. The lowest row starts at zero, so any
/// positive taxable income finds a bracket.
///
/// Unlike the legacy six-row table, this carries the 3000/10% row and the
/// 12000 row's subtractor is 1410 (not 210), keeping tax continuous.
pub const INCOME_TAX_BRACKETS: [TaxBracket; 7] = [
    TaxBracket::new(dec!(80000), dec!(0.45), dec!(15160)),
    TaxBracket::new(dec!(55000), dec!(0.35), dec!(7160)),
    TaxBracket::new(dec!(35000), dec!(0.30), dec!(4410)),
    TaxBracket::new(dec!(25000), dec!(0.25), dec!(2660)),
    TaxBracket::new(dec!(12000), dec!(0.20), dec!(1410)),
    TaxBracket::new(dec!(3000), dec!(0.10), dec!(210)),
    TaxBracket::new(dec!(0), dec!(0.03), dec!(0)),
];

/// Returns the highest bracket whose threshold lies strictly below `taxable`.
///
/// Walks the whole table before giving up; `None` means the taxable income is
/// at or below zero and no tax is due.
pub fn find_bracket(taxable: Decimal) -> Option<&'static TaxBracket> {
    INCOME_TAX_BRACKETS.iter().find(|b| b.applies_to(taxable))
}
