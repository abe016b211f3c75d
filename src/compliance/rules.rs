/// Employee and employer provident fund rate, applied to gross monthly salary.
pub const EPF_RATE: f64 = 0.12;

/// ESI applies only when the gross monthly salary is at or below this ceiling.
pub const ESI_WAGE_CEILING: f64 = 21_000.0;
pub const ESI_EMPLOYEE_RATE: f64 = 0.0075;
pub const ESI_EMPLOYER_RATE: f64 = 0.0325;

/// Professional tax is assessed on a projected half-year of salary.
pub const MONTHS_PER_HALF_YEAR: f64 = 6.0;

/// One row of the half-yearly professional tax table.
///
/// An amount falls in the bracket when `lower_exclusive < amount <= upper_inclusive`.
/// `upper_inclusive == None` means the bracket is open-ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBracket {
    pub lower_exclusive: f64,
    pub upper_inclusive: Option<f64>,
    pub half_yearly_tax: f64,
}

impl TaxBracket {
    const fn new(lower_exclusive: f64, upper_inclusive: Option<f64>, half_yearly_tax: f64) -> Self {
        Self {
            lower_exclusive,
            upper_inclusive,
            half_yearly_tax,
        }
    }

    pub fn contains(&self, half_yearly_salary: f64) -> bool {
        half_yearly_salary > self.lower_exclusive
            && self
                .upper_inclusive
                .map_or(true, |upper| half_yearly_salary <= upper)
    }
}

/// Ascending, non-overlapping. Anything at or below the first lower bound pays nothing.
pub const PROFESSIONAL_TAX_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(21_000.0, Some(30_000.0), 180.0),
    TaxBracket::new(30_000.0, Some(45_000.0), 425.0),
    TaxBracket::new(45_000.0, Some(60_000.0), 930.0),
    TaxBracket::new(60_000.0, Some(75_000.0), 1_025.0),
    TaxBracket::new(75_000.0, None, 1_250.0),
];

pub fn half_yearly_professional_tax(half_yearly_salary: f64) -> f64 {
    PROFESSIONAL_TAX_BRACKETS
        .iter()
        .find(|bracket| bracket.contains(half_yearly_salary))
        .map_or(0.0, |bracket| bracket.half_yearly_tax)
}

/// Monthly professional tax for a gross monthly salary.
pub fn monthly_professional_tax(gross_salary: f64) -> f64 {
    let half_yearly_salary = gross_salary * MONTHS_PER_HALF_YEAR;
    half_yearly_professional_tax(half_yearly_salary) / MONTHS_PER_HALF_YEAR
}
