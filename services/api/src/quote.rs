use crate::infra::prequalification_service;
use chrono::Local;
use clap::Args;
use prequal::error::AppError;
use prequal::workflows::prequalification::{
    normalize_form, BatchIntake, EligibilityOutcome, OfferTier, PreQualificationError,
    PreQualificationForm, PreQualificationResult, PreQualificationService, PricingBand,
    QualificationDecision,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Gross annual income, e.g. 60000 or "$60,000"
    #[arg(long)]
    pub(crate) annual_income: String,
    /// full_time, part_time, self_employed, retired, unemployed or student
    #[arg(long)]
    pub(crate) employment_status: String,
    /// Total monthly debt payments
    #[arg(long)]
    pub(crate) monthly_debts: String,
    /// Requested loan amount (500 - 100000)
    #[arg(long)]
    pub(crate) requested_amount: String,
    /// Representative credit score: 750, 680, 620, 550 or 0 for unknown
    #[arg(long)]
    pub(crate) credit_score_band: String,
    /// Print the result as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV of form submissions, one column per form field (e.g. annual_income)
    pub(crate) csv: PathBuf,
    /// Print one JSON document for the whole batch instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct BatchRowView<'a> {
    line: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a PreQualificationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let QuoteArgs {
        annual_income,
        employment_status,
        monthly_debts,
        requested_amount,
        credit_score_band,
        json,
    } = args;

    let form = PreQualificationForm {
        annual_income,
        employment_status,
        monthly_debts,
        requested_amount,
        credit_score_band,
    };

    let service = prequalification_service();
    let profile = normalize_form(&form).map_err(PreQualificationError::from)?;
    let result = service.evaluate(&profile);

    if json {
        print_json(&result);
        return Ok(());
    }

    println!(
        "Loan pre-qualification quote ({})",
        Local::now().format("%Y-%m-%d")
    );
    println!(
        "Applicant: income {:.2}/yr | debts {:.2}/mo | {} | credit {} ({} pricing)",
        profile.annual_income,
        profile.monthly_debts,
        profile.employment_status.label(),
        profile.credit_score_band.label(),
        profile.credit_score_band.pricing_band().label()
    );
    println!("Requested amount: {:.2}", profile.requested_amount);

    render_checks(&service.eligibility(&profile));
    render_result(&result);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let service = prequalification_service();
    let entries = BatchIntake::from_path(&args.csv, &service)?;

    if args.json {
        let rows: Vec<_> = entries
            .iter()
            .map(|entry| BatchRowView {
                line: entry.line,
                result: entry.outcome.as_ref().ok(),
                error: entry.outcome.as_ref().err().map(ToString::to_string),
            })
            .collect();
        print_json(&rows);
        return Ok(());
    }

    println!("Batch pre-qualification: {}", args.csv.display());
    let mut qualified = 0;
    let mut declined = 0;
    let mut invalid = 0;

    for entry in &entries {
        match &entry.outcome {
            Ok(result) if result.qualified() => {
                qualified += 1;
                let best = result
                    .best_offer()
                    .map(|offer| {
                        format!(
                            "best {:.2} over {} months at {:.2}% ({:.2}/mo)",
                            offer.loan_amount(),
                            offer.repayment_term_months(),
                            offer.interest_rate_apr(),
                            offer.monthly_payment()
                        )
                    })
                    .unwrap_or_default();
                println!(
                    "- line {}: qualified, {} offer(s), {}",
                    entry.line,
                    result.offers().len(),
                    best
                );
            }
            Ok(result) => {
                declined += 1;
                println!(
                    "- line {}: {} ({})",
                    entry.line,
                    decision_label(result.decision()),
                    result.message()
                );
            }
            Err(err) => {
                invalid += 1;
                println!("- line {}: invalid input: {}", entry.line, err);
            }
        }
    }

    println!(
        "\n{} row(s): {} qualified, {} declined, {} invalid",
        entries.len(),
        qualified,
        declined,
        invalid
    );
    Ok(())
}

pub(crate) fn run_policy() -> Result<(), AppError> {
    let service = prequalification_service();
    print_policy(&service);
    Ok(())
}

fn print_policy(service: &PreQualificationService) {
    let eligibility = service.eligibility_config();
    let policy = service.policy();

    println!("Eligibility");
    println!(
        "- minimum annual income: {:.2}",
        eligibility.minimum_annual_income
    );
    println!(
        "- debt-to-income must be below {:.1}%",
        eligibility.maximum_debt_to_income_pct
    );
    println!(
        "\nProcessing fee: {:.1}% of the loan amount, paid upfront",
        policy.processing_fee_rate * 100.0
    );

    println!("\nPricing table (term / APR)");
    let header: Vec<_> = PricingBand::ordered()
        .iter()
        .map(|band| format!("{:>12}", band.label()))
        .collect();
    println!("{:<14}{}", "Tier", header.join(""));

    for tier in OfferTier::ordered() {
        let Some(rule) = policy.tier(tier) else {
            continue;
        };
        let cells: Vec<_> = PricingBand::ordered()
            .iter()
            .map(|band| {
                let terms = rule.terms_for(*band);
                format!(
                    "{:>12}",
                    format!(
                        "{}mo/{}%",
                        terms.repayment_term_months, terms.interest_rate_apr
                    )
                )
            })
            .collect();
        println!("{:<14}{}", tier.label(), cells.join(""));

        let mut conditions = vec![format!("{:.0}% of requested", rule.amount_share * 100.0)];
        if let Some(share) = rule.max_income_share {
            conditions.push(format!("request at most {:.0}% of annual income", share * 100.0));
        }
        if let Some(minimum) = rule.minimum_amount {
            conditions.push(format!("at least {:.2}", minimum));
        }
        println!("{:<14}{}", "", conditions.join(", "));
    }
}

fn render_checks(outcome: &EligibilityOutcome) {
    println!("\nEligibility checks");
    for check in &outcome.checks {
        let mark = if check.passed { "pass" } else { "fail" };
        println!("- [{}] {}: {}", mark, check.rule.label(), check.notes);
    }
}

fn render_result(result: &PreQualificationResult) {
    println!("\n{}", result.message());

    if let QualificationDecision::NoViableOffers = result.decision() {
        println!("Note: every eligibility rule passed; no tier could be sized for this amount.");
    }

    for (idx, offer) in result.offers().iter().enumerate() {
        let marker = if idx == 0 { " (best deal)" } else { "" };
        println!("\n{}. {}{}", idx + 1, offer.tier().label(), marker);
        println!("   Loan amount:     {:.2}", offer.loan_amount());
        println!(
            "   Term / APR:      {} months at {:.2}%",
            offer.repayment_term_months(),
            offer.interest_rate_apr()
        );
        println!("   Monthly payment: {:.2}", offer.monthly_payment());
        println!("   Processing fee:  {:.2}", offer.processing_fee());
        println!("   Total repayment: {:.2}", offer.total_repayment());
    }
}

fn decision_label(decision: &QualificationDecision) -> &'static str {
    match decision {
        QualificationDecision::Qualified => "qualified",
        QualificationDecision::Ineligible { .. } => "declined",
        QualificationDecision::NoViableOffers => "no viable offers",
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("failed to render JSON output: {}", err),
    }
}
