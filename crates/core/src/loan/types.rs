//! Loan and salary records.

use chrono::NaiveDate;
use emitrack_shared::types::{LoanId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A loan repaid through a fixed monthly installment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// Unique identifier.
    pub id: LoanId,
    /// Display name (e.g., "Home Loan").
    pub name: String,
    /// Original principal.
    pub total_amount: Decimal,
    /// Outstanding principal. Expected to stay within `0..=total_amount`.
    pub remaining_amount: Decimal,
    /// Annual interest rate in percent. Informational only.
    pub interest_rate: Decimal,
    /// Fixed monthly installment.
    pub emi_amount: Decimal,
    /// First installment date.
    pub start_date: NaiveDate,
    /// Last installment date.
    pub end_date: NaiveDate,
    /// Calendar day of the month (1-31) the installment is due.
    pub due_day: u32,
    /// Whether the current month's installment is settled.
    #[serde(default)]
    pub is_paid: bool,
    /// Date of the most recent payment.
    #[serde(default)]
    pub last_paid_date: Option<NaiveDate>,
}

/// Input for adding a loan to a portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLoan {
    /// Display name.
    pub name: String,
    /// Original principal. The outstanding amount starts equal to it.
    pub total_amount: Decimal,
    /// Annual interest rate in percent.
    pub interest_rate: Decimal,
    /// Fixed monthly installment.
    pub emi_amount: Decimal,
    /// First installment date.
    pub start_date: NaiveDate,
    /// Last installment date.
    pub end_date: NaiveDate,
    /// Calendar day of the month (1-31) the installment is due.
    pub due_day: u32,
}

impl NewLoan {
    /// Builds an unpaid loan with the full principal outstanding.
    #[must_use]
    pub fn into_loan(self, id: LoanId) -> Loan {
        Loan {
            id,
            name: self.name,
            total_amount: self.total_amount,
            remaining_amount: self.total_amount,
            interest_rate: self.interest_rate,
            emi_amount: self.emi_amount,
            start_date: self.start_date,
            end_date: self.end_date,
            due_day: self.due_day,
            is_paid: false,
            last_paid_date: None,
        }
    }
}

/// Partial update of a loan. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoanPatch {
    /// New display name.
    pub name: Option<String>,
    /// New original principal.
    pub total_amount: Option<Decimal>,
    /// New outstanding principal.
    pub remaining_amount: Option<Decimal>,
    /// New interest rate.
    pub interest_rate: Option<Decimal>,
    /// New installment amount.
    pub emi_amount: Option<Decimal>,
    /// New start date.
    pub start_date: Option<NaiveDate>,
    /// New end date.
    pub end_date: Option<NaiveDate>,
    /// New due day.
    pub due_day: Option<u32>,
    /// New paid flag.
    pub is_paid: Option<bool>,
    /// New last payment date. `Some(None)` (JSON `null`) clears it.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub last_paid_date: Option<Option<NaiveDate>>,
}

impl LoanPatch {
    /// Returns a copy of `loan` with every present field applied.
    #[must_use]
    pub fn apply_to(&self, loan: &Loan) -> Loan {
        let mut updated = loan.clone();
        if let Some(name) = &self.name {
            updated.name.clone_from(name);
        }
        if let Some(total_amount) = self.total_amount {
            updated.total_amount = total_amount;
        }
        if let Some(remaining_amount) = self.remaining_amount {
            updated.remaining_amount = remaining_amount;
        }
        if let Some(interest_rate) = self.interest_rate {
            updated.interest_rate = interest_rate;
        }
        if let Some(emi_amount) = self.emi_amount {
            updated.emi_amount = emi_amount;
        }
        if let Some(start_date) = self.start_date {
            updated.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            updated.end_date = end_date;
        }
        if let Some(due_day) = self.due_day {
            updated.due_day = due_day;
        }
        if let Some(is_paid) = self.is_paid {
            updated.is_paid = is_paid;
        }
        if let Some(last_paid_date) = self.last_paid_date {
            updated.last_paid_date = last_paid_date;
        }
        updated
    }
}

/// Monthly income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInfo {
    /// Monthly take-home amount.
    pub amount: Decimal,
    /// Day of the month salary arrives. Informational.
    pub payday: u32,
}

/// The person a portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Unique identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

/// Snapshot of one month's salary against EMI obligations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBudget {
    /// Full month name (e.g., "October").
    pub month: String,
    /// Calendar year.
    pub year: i32,
    /// Salary for the month.
    pub salary: Decimal,
    /// Sum of all EMIs.
    pub total_emi: Decimal,
    /// Salary minus EMIs. May be negative.
    pub remaining_balance: Decimal,
    /// Whether the month has been settled.
    pub is_paid: bool,
}

/// Everything tracked for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Owner details.
    pub owner: Owner,
    /// Monthly income.
    pub salary: SalaryInfo,
    /// Loans in insertion order.
    #[serde(default)]
    pub loans: Vec<Loan>,
    /// Recorded monthly budgets.
    #[serde(default)]
    pub budgets: Vec<MonthlyBudget>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn car_loan() -> NewLoan {
        NewLoan {
            name: "Car Loan".to_string(),
            total_amount: dec!(800000),
            interest_rate: dec!(8.5),
            emi_amount: dec!(15000),
            start_date: date(2023, 3, 10),
            end_date: date(2028, 3, 10),
            due_day: 10,
        }
    }

    #[test]
    fn test_new_loan_starts_unpaid_with_full_principal() {
        let id = LoanId::new();
        let loan = car_loan().into_loan(id);

        assert_eq!(loan.id, id);
        assert_eq!(loan.remaining_amount, dec!(800000));
        assert!(!loan.is_paid);
        assert!(loan.last_paid_date.is_none());
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let loan = car_loan().into_loan(LoanId::new());
        let patch = LoanPatch {
            remaining_amount: Some(dec!(600000)),
            is_paid: Some(true),
            ..LoanPatch::default()
        };

        let updated = patch.apply_to(&loan);

        assert_eq!(updated.remaining_amount, dec!(600000));
        assert!(updated.is_paid);
        assert_eq!(updated.name, loan.name);
        assert_eq!(updated.emi_amount, loan.emi_amount);
        assert_eq!(updated.id, loan.id);
    }

    #[test]
    fn test_patch_can_clear_last_paid_date() {
        let mut loan = car_loan().into_loan(LoanId::new());
        loan.last_paid_date = Some(date(2026, 9, 10));
        let patch = LoanPatch {
            last_paid_date: Some(None),
            ..LoanPatch::default()
        };

        assert!(patch.apply_to(&loan).last_paid_date.is_none());
    }

    #[test]
    fn test_patch_json_distinguishes_null_from_absent() {
        let cleared: LoanPatch = serde_json::from_str(r#"{"last_paid_date": null}"#).unwrap();
        assert_eq!(cleared.last_paid_date, Some(None));

        let untouched: LoanPatch = serde_json::from_str(r#"{"is_paid": true}"#).unwrap();
        assert_eq!(untouched.last_paid_date, None);
        assert_eq!(untouched.is_paid, Some(true));

        let set: LoanPatch = serde_json::from_str(r#"{"last_paid_date": "2026-09-10"}"#).unwrap();
        assert_eq!(set.last_paid_date, Some(Some(date(2026, 9, 10))));

        let mut loan = car_loan().into_loan(LoanId::new());
        loan.last_paid_date = Some(date(2026, 9, 10));
        assert!(cleared.apply_to(&loan).last_paid_date.is_none());
        assert_eq!(untouched.apply_to(&loan).last_paid_date, Some(date(2026, 9, 10)));
    }

    #[test]
    fn test_loan_json_uses_snake_case() {
        let loan = car_loan().into_loan(LoanId::new());
        let json = serde_json::to_value(&loan).unwrap();

        assert_eq!(json["due_day"], 10);
        assert_eq!(json["is_paid"], false);
        assert_eq!(json["start_date"], "2023-03-10");

        let back: Loan = serde_json::from_value(json).unwrap();
        assert_eq!(back, loan);
    }
}
