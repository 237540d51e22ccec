//! Validation core of the personal finances backend.
//!
//! Every write goes through [`Engine`]: the command is normalized, each
//! foreign key it carries is checked against storage, the row is written and
//! any constraint failure is classified into an [`EngineError`].

pub use bank_accounts::BankAccount;
pub use banks::Bank;
pub use commands::{
    BankAccountCmd, BankCmd, CreditCardCmd, CreditCardCycleCmd, CurrencyCmd, CycleBalanceCmd,
    InstallmentCmd, PersonCmd, SubscriptionCmd, TransactionCategoryCmd, TransactionCmd,
};
pub use constraint::{ConstraintViolation, classify};
pub use countries::Country;
pub use credit_card_currencies::CreditCardCurrency;
pub use credit_card_cycles::CreditCardCycle;
pub use credit_cards::CreditCard;
pub use currencies::Currency;
pub use cycle_balances::CycleBalance;
pub use error::EngineError;
pub use installments::Installment;
pub use ops::{Engine, EngineBuilder, Reference};
pub use people::Person;
pub use subscriptions::Subscription;
pub use transaction_categories::TransactionCategory;
pub use transactions::{Transaction, TransactionType};

mod bank_accounts;
mod banks;
mod commands;
mod constraint;
mod countries;
mod credit_card_currencies;
mod credit_card_cycles;
mod credit_cards;
mod currencies;
mod cycle_balances;
mod error;
mod installments;
mod ops;
mod people;
mod subscriptions;
mod transaction_categories;
mod transactions;
mod util;

pub type ResultEngine<T> = Result<T, EngineError>;
