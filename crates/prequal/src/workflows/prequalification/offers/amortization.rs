/// Level monthly payment that retires `loan_amount` over `term_months` at `apr_pct`.
///
/// `apr_pct` is a percentage (12.0 for 12%). A zero rate spreads the principal evenly.
/// Nothing is rounded here.
pub fn monthly_payment(loan_amount: f64, apr_pct: f64, term_months: u32) -> f64 {
    if term_months == 0 {
        return loan_amount;
    }

    let monthly_rate = apr_pct / 100.0 / 12.0;
    let periods = term_months as f64;
    if monthly_rate == 0.0 {
        return loan_amount / periods;
    }

    let growth = (1.0 + monthly_rate).powi(term_months as i32);
    loan_amount * (monthly_rate * growth) / (growth - 1.0)
}

pub fn processing_fee(loan_amount: f64, fee_rate: f64) -> f64 {
    loan_amount * fee_rate
}

pub fn total_repayment(monthly_payment: f64, term_months: u32, processing_fee: f64) -> f64 {
    monthly_payment * term_months as f64 + processing_fee
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_amortization() {
        let payment = monthly_payment(100_000.0, 12.0, 12);
        assert!((payment - 8884.88).abs() < 0.01, "payment {payment}");
    }

    #[test]
    fn zero_rate_divides_principal() {
        assert_eq!(monthly_payment(12_000.0, 0.0, 12), 1000.0);
        let total = total_repayment(monthly_payment(12_000.0, 0.0, 12), 12, 0.0);
        assert!((total - 12_000.0).abs() < 1e-6);
    }

    #[test]
    fn positive_rate_repays_more_than_principal() {
        for (apr, months) in [(8.0, 12), (16.0, 9), (24.0, 12), (12.0, 24)] {
            let payment = monthly_payment(5_000.0, apr, months);
            assert!(payment * months as f64 >= 5_000.0);
        }
    }

    #[test]
    fn fee_is_not_part_of_the_payment() {
        let fee = processing_fee(10_000.0, 0.045);
        assert_eq!(fee, 10_000.0 * 0.045);
        let payment = monthly_payment(10_000.0, 12.0, 24);
        let total = total_repayment(payment, 24, fee);
        assert!((total - (payment * 24.0 + fee)).abs() < 1e-9);
    }
}
