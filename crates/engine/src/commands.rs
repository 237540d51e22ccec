//! Command structs for engine write operations.
//!
//! A command carries the fields of a create or of a full-replace update as
//! the caller supplied them. `normalize` trims and case-folds text and checks
//! every rule that needs no storage access. Reference checks run later,
//! inside the engine.

use chrono::NaiveDate;

use crate::{
    EngineError, ResultEngine, TransactionType,
    util::{
        finite_amount, iso_date, optional_text, positive_amount, positive_id, required_code,
        required_text,
    },
};

#[derive(Clone, Debug, Default)]
pub struct CurrencyCmd {
    pub name: String,
    pub code: String,
}

impl CurrencyCmd {
    #[must_use]
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    pub(crate) fn normalize(self) -> ResultEngine<Self> {
        Ok(Self {
            name: required_text(&self.name, "name")?,
            code: required_code(&self.code, "code")?,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct BankCmd {
    pub name: String,
    pub country: String,
}

impl BankCmd {
    #[must_use]
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
        }
    }

    pub(crate) fn normalize(self) -> ResultEngine<Self> {
        Ok(Self {
            name: required_text(&self.name, "name")?,
            country: required_code(&self.country, "country")?,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct PersonCmd {
    pub name: String,
}

impl PersonCmd {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub(crate) fn normalize(self) -> ResultEngine<Self> {
        Ok(Self {
            name: required_text(&self.name, "name")?,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct BankAccountCmd {
    pub bank_id: i64,
    pub currency_id: i64,
    pub account_number: String,
    pub balance: f64,
}

impl BankAccountCmd {
    #[must_use]
    pub fn new(bank_id: i64, currency_id: i64, account_number: impl Into<String>) -> Self {
        Self {
            bank_id,
            currency_id,
            account_number: account_number.into(),
            balance: 0.0,
        }
    }

    #[must_use]
    pub fn balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    pub(crate) fn normalize(self) -> ResultEngine<Self> {
        Ok(Self {
            bank_id: positive_id(self.bank_id, "bank_id")?,
            currency_id: positive_id(self.currency_id, "currency_id")?,
            account_number: required_text(&self.account_number, "account_number")?,
            balance: finite_amount(self.balance, "balance")?,
        })
    }
}

/// Create or replace a credit card together with its currency set.
#[derive(Clone, Debug, Default)]
pub struct CreditCardCmd {
    pub bank_id: i64,
    pub person_id: i64,
    pub number: String,
    pub name: Option<String>,
    pub currency_ids: Vec<i64>,
}

impl CreditCardCmd {
    #[must_use]
    pub fn new(bank_id: i64, person_id: i64, number: impl Into<String>) -> Self {
        Self {
            bank_id,
            person_id,
            number: number.into(),
            name: None,
            currency_ids: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn currency_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.currency_ids = ids.into_iter().collect();
        self
    }

    pub(crate) fn normalize(self) -> ResultEngine<Self> {
        Ok(Self {
            bank_id: positive_id(self.bank_id, "bank_id")?,
            person_id: positive_id(self.person_id, "person_id")?,
            number: required_text(&self.number, "number")?,
            name: optional_text(self.name.as_deref()),
            currency_ids: self.currency_ids,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct CreditCardCycleCmd {
    pub credit_card_id: i64,
    pub closing_date: String,
    pub due_date: String,
}

/// A cycle command whose dates parsed and are in order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CycleFields {
    pub(crate) credit_card_id: i64,
    pub(crate) closing_date: NaiveDate,
    pub(crate) due_date: NaiveDate,
}

impl CreditCardCycleCmd {
    #[must_use]
    pub fn new(
        credit_card_id: i64,
        closing_date: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            credit_card_id,
            closing_date: closing_date.into(),
            due_date: due_date.into(),
        }
    }

    pub(crate) fn normalize(self) -> ResultEngine<CycleFields> {
        let credit_card_id = positive_id(self.credit_card_id, "credit_card_id")?;
        let closing_date = iso_date(&self.closing_date, "closing_date")?;
        let due_date = iso_date(&self.due_date, "due_date")?;
        if due_date < closing_date {
            return Err(EngineError::invalid(
                "due_date must be on or after closing_date",
            ));
        }
        Ok(CycleFields {
            credit_card_id,
            closing_date,
            due_date,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct CycleBalanceCmd {
    pub credit_card_cycle_id: i64,
    pub currency_id: i64,
    pub balance: f64,
    pub paid: bool,
}

impl CycleBalanceCmd {
    #[must_use]
    pub fn new(credit_card_cycle_id: i64, currency_id: i64, balance: f64) -> Self {
        Self {
            credit_card_cycle_id,
            currency_id,
            balance,
            paid: false,
        }
    }

    #[must_use]
    pub fn paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }

    /// `cycle_id` is the cycle the balance is addressed under; the command
    /// must name the same one.
    pub(crate) fn normalize(self, cycle_id: i64) -> ResultEngine<Self> {
        let credit_card_cycle_id = positive_id(self.credit_card_cycle_id, "credit_card_cycle_id")?;
        if credit_card_cycle_id != cycle_id {
            return Err(EngineError::invalid(
                "credit_card_cycle_id must match route id",
            ));
        }
        Ok(Self {
            credit_card_cycle_id,
            currency_id: positive_id(self.currency_id, "currency_id")?,
            balance: finite_amount(self.balance, "balance")?,
            paid: self.paid,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct InstallmentCmd {
    pub credit_card_id: i64,
    pub currency_id: i64,
    pub concept: String,
    pub amount: f64,
    pub start_date: String,
    pub count: i64,
}

#[derive(Clone, Debug)]
pub(crate) struct InstallmentFields {
    pub(crate) credit_card_id: i64,
    pub(crate) currency_id: i64,
    pub(crate) concept: String,
    pub(crate) amount: f64,
    pub(crate) start_date: NaiveDate,
    pub(crate) count: i64,
}

impl InstallmentCmd {
    #[must_use]
    pub fn new(
        credit_card_id: i64,
        currency_id: i64,
        concept: impl Into<String>,
        amount: f64,
        start_date: impl Into<String>,
        count: i64,
    ) -> Self {
        Self {
            credit_card_id,
            currency_id,
            concept: concept.into(),
            amount,
            start_date: start_date.into(),
            count,
        }
    }

    pub(crate) fn normalize(self) -> ResultEngine<InstallmentFields> {
        let credit_card_id = positive_id(self.credit_card_id, "credit_card_id")?;
        let currency_id = positive_id(self.currency_id, "currency_id")?;
        let concept = required_text(&self.concept, "concept")?;
        let amount = positive_amount(self.amount, "amount")?;
        let start_date = iso_date(&self.start_date, "start_date")?;
        if self.count <= 0 {
            return Err(EngineError::invalid("count must be greater than zero"));
        }
        Ok(InstallmentFields {
            credit_card_id,
            currency_id,
            concept,
            amount,
            start_date,
            count: self.count,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct SubscriptionCmd {
    pub credit_card_id: i64,
    pub currency_id: i64,
    pub concept: String,
    pub amount: f64,
}

impl SubscriptionCmd {
    #[must_use]
    pub fn new(credit_card_id: i64, currency_id: i64, concept: impl Into<String>, amount: f64) -> Self {
        Self {
            credit_card_id,
            currency_id,
            concept: concept.into(),
            amount,
        }
    }

    pub(crate) fn normalize(self) -> ResultEngine<Self> {
        Ok(Self {
            credit_card_id: positive_id(self.credit_card_id, "credit_card_id")?,
            currency_id: positive_id(self.currency_id, "currency_id")?,
            concept: required_text(&self.concept, "concept")?,
            amount: positive_amount(self.amount, "amount")?,
        })
    }
}

/// Record an income or an expense.
#[derive(Clone, Debug, Default)]
pub struct TransactionCmd {
    pub transaction_date: String,
    pub kind: String,
    pub amount: f64,
    pub notes: Option<String>,
    pub person_id: i64,
    pub bank_account_id: i64,
    pub category_id: i64,
}

#[derive(Clone, Debug)]
pub(crate) struct TransactionFields {
    pub(crate) transaction_date: NaiveDate,
    pub(crate) kind: TransactionType,
    pub(crate) amount: f64,
    pub(crate) notes: Option<String>,
    pub(crate) person_id: i64,
    pub(crate) bank_account_id: i64,
    pub(crate) category_id: i64,
}

impl TransactionCmd {
    #[must_use]
    pub fn new(
        transaction_date: impl Into<String>,
        kind: impl Into<String>,
        amount: f64,
        person_id: i64,
        bank_account_id: i64,
        category_id: i64,
    ) -> Self {
        Self {
            transaction_date: transaction_date.into(),
            kind: kind.into(),
            amount,
            notes: None,
            person_id,
            bank_account_id,
            category_id,
        }
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub(crate) fn normalize(self) -> ResultEngine<TransactionFields> {
        if self.transaction_date.trim().is_empty() {
            return Err(EngineError::invalid("transaction_date is required"));
        }
        Ok(TransactionFields {
            transaction_date: iso_date(&self.transaction_date, "transaction_date")?,
            kind: TransactionType::try_from(self.kind.as_str())?,
            amount: positive_amount(self.amount, "amount")?,
            notes: optional_text(self.notes.as_deref()),
            person_id: positive_id(self.person_id, "person_id")?,
            bank_account_id: positive_id(self.bank_account_id, "bank_account_id")?,
            category_id: positive_id(self.category_id, "category_id")?,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct TransactionCategoryCmd {
    pub name: String,
    pub parent_id: Option<i64>,
}

impl TransactionCategoryCmd {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_id: None,
        }
    }

    #[must_use]
    pub fn parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub(crate) fn normalize(self) -> ResultEngine<Self> {
        Ok(Self {
            name: required_text(&self.name, "name")?,
            parent_id: self
                .parent_id
                .map(|id| positive_id(id, "parent_id"))
                .transpose()?,
        })
    }
}
