//! Request bodies and response envelopes of the `/api` surface.
//!
//! Every request body decodes with missing fields set to their zero value;
//! the engine then rejects those with a field-level message.

use serde::{Deserialize, Serialize};

/// Body of every error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable machine code, e.g. `duplicate_bank_account`.
    pub code: String,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub message: String,
}

impl Health {
    pub fn up() -> Self {
        Self {
            status: "ok".to_string(),
            message: "backend is up".to_string(),
        }
    }
}

pub mod currency {
    use super::*;

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct CurrencyPayload {
        pub name: String,
        pub code: String,
    }
}

pub mod bank {
    use super::*;

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct BankPayload {
        pub name: String,
        /// ISO 3166-1 alpha-2 code.
        pub country: String,
    }

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct BankAccountPayload {
        pub bank_id: i64,
        pub currency_id: i64,
        pub account_number: String,
        pub balance: f64,
    }
}

pub mod person {
    use super::*;

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct PersonPayload {
        pub name: String,
    }
}

pub mod credit_card {
    use super::*;

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct CreditCardPayload {
        pub bank_id: i64,
        pub person_id: i64,
        pub number: String,
        pub name: Option<String>,
        /// The full currency set of the card; repeats are linked once.
        pub currency_ids: Vec<i64>,
    }

    /// Body of `PUT /api/credit-cards/{id}/currencies`.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub struct CreditCardCurrenciesPayload {
        pub currency_ids: Vec<i64>,
    }

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct CreditCardCyclePayload {
        pub credit_card_id: i64,
        /// `YYYY-MM-DD`
        pub closing_date: String,
        /// `YYYY-MM-DD`, on or after `closing_date`.
        pub due_date: String,
    }

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct CycleBalancePayload {
        /// Must repeat the cycle id of the route.
        pub credit_card_cycle_id: i64,
        pub currency_id: i64,
        pub balance: f64,
        pub paid: bool,
    }

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct InstallmentPayload {
        pub credit_card_id: i64,
        pub currency_id: i64,
        pub concept: String,
        pub amount: f64,
        pub start_date: String,
        pub count: i64,
    }

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct SubscriptionPayload {
        pub credit_card_id: i64,
        pub currency_id: i64,
        pub concept: String,
        pub amount: f64,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct TransactionPayload {
        pub transaction_date: String,
        /// `income` or `expense`, any case.
        #[serde(rename = "type")]
        pub kind: String,
        pub amount: f64,
        pub notes: Option<String>,
        pub person_id: i64,
        pub bank_account_id: i64,
        pub category_id: i64,
    }

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct TransactionCategoryPayload {
        pub name: String,
        pub parent_id: Option<i64>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let payload: bank::BankAccountPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.bank_id, 0);
        assert!(payload.account_number.is_empty());
    }

    #[test]
    fn currency_set_rejects_unknown_fields() {
        let err = serde_json::from_str::<credit_card::CreditCardCurrenciesPayload>(
            r#"{"currency_ids":[1],"extra":true}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn transaction_type_uses_wire_name() {
        let payload: transaction::TransactionPayload =
            serde_json::from_str(r#"{"type":"income"}"#).unwrap();
        assert_eq!(payload.kind, "income");
    }
}
