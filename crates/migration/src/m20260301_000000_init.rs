//! Initial schema: one table per record kind.
//!
//! Every reference column carries a foreign key. Credit card currency links
//! are removed together with their card; every other reference restricts the
//! delete of its target. Natural keys are unique indexes.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Currencies {
    Table,
    Id,
    Name,
    Code,
}

#[derive(Iden)]
pub(crate) enum Countries {
    Table,
    Code,
    Name,
}

#[derive(Iden)]
enum Banks {
    Table,
    Id,
    Name,
    Country,
}

#[derive(Iden)]
enum People {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum BankAccounts {
    Table,
    Id,
    BankId,
    CurrencyId,
    AccountNumber,
    Balance,
}

#[derive(Iden)]
enum CreditCards {
    Table,
    Id,
    BankId,
    PersonId,
    Number,
    Name,
}

#[derive(Iden)]
enum CreditCardCurrencies {
    Table,
    Id,
    CreditCardId,
    CurrencyId,
}

#[derive(Iden)]
enum CreditCardCycles {
    Table,
    Id,
    CreditCardId,
    ClosingDate,
    DueDate,
}

#[derive(Iden)]
enum CreditCardCycleBalances {
    Table,
    Id,
    CreditCardCycleId,
    CurrencyId,
    Balance,
    Paid,
}

#[derive(Iden)]
enum CreditCardInstallments {
    Table,
    Id,
    CreditCardId,
    CurrencyId,
    Concept,
    Amount,
    StartDate,
    Count,
}

#[derive(Iden)]
enum CreditCardSubscriptions {
    Table,
    Id,
    CreditCardId,
    CurrencyId,
    Concept,
    Amount,
}

#[derive(Iden)]
enum TransactionCategories {
    Table,
    Id,
    Name,
    ParentId,
}

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    TransactionDate,
    Type,
    Amount,
    Notes,
    PersonId,
    BankAccountId,
    CategoryId,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. currencies
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Currencies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Currencies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Currencies::Name).string().not_null())
                    .col(ColumnDef::new(Currencies::Code).string().not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-currencies-name-code-unique")
                    .table(Currencies::Table)
                    .col(Currencies::Name)
                    .col(Currencies::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. countries
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Countries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Countries::Code)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Countries::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. banks
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Banks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Banks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Banks::Name).string().not_null())
                    .col(ColumnDef::new(Banks::Country).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-banks-country")
                            .from(Banks::Table, Banks::Country)
                            .to(Countries::Table, Countries::Code),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-banks-name-country-unique")
                    .table(Banks::Table)
                    .col(Banks::Name)
                    .col(Banks::Country)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. people
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(People::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(People::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 5. bank_accounts
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(BankAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BankAccounts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BankAccounts::BankId).integer().not_null())
                    .col(ColumnDef::new(BankAccounts::CurrencyId).integer().not_null())
                    .col(ColumnDef::new(BankAccounts::AccountNumber).string().not_null())
                    .col(ColumnDef::new(BankAccounts::Balance).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bank_accounts-bank_id")
                            .from(BankAccounts::Table, BankAccounts::BankId)
                            .to(Banks::Table, Banks::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bank_accounts-currency_id")
                            .from(BankAccounts::Table, BankAccounts::CurrencyId)
                            .to(Currencies::Table, Currencies::Id),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-bank_accounts-bank_id-currency_id-account_number-unique")
                    .table(BankAccounts::Table)
                    .col(BankAccounts::BankId)
                    .col(BankAccounts::CurrencyId)
                    .col(BankAccounts::AccountNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 6. credit_cards
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(CreditCards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CreditCards::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CreditCards::BankId).integer().not_null())
                    .col(ColumnDef::new(CreditCards::PersonId).integer().not_null())
                    .col(ColumnDef::new(CreditCards::Number).string().not_null())
                    .col(ColumnDef::new(CreditCards::Name).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-credit_cards-bank_id")
                            .from(CreditCards::Table, CreditCards::BankId)
                            .to(Banks::Table, Banks::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-credit_cards-person_id")
                            .from(CreditCards::Table, CreditCards::PersonId)
                            .to(People::Table, People::Id),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-credit_cards-number-unique")
                    .table(CreditCards::Table)
                    .col(CreditCards::Number)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 7. credit_card_currencies
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(CreditCardCurrencies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CreditCardCurrencies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CreditCardCurrencies::CreditCardId).integer().not_null())
                    .col(ColumnDef::new(CreditCardCurrencies::CurrencyId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-credit_card_currencies-credit_card_id")
                            .from(CreditCardCurrencies::Table, CreditCardCurrencies::CreditCardId)
                            .to(CreditCards::Table, CreditCards::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-credit_card_currencies-currency_id")
                            .from(CreditCardCurrencies::Table, CreditCardCurrencies::CurrencyId)
                            .to(Currencies::Table, Currencies::Id),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-credit_card_currencies-credit_card_id-currency_id-unique")
                    .table(CreditCardCurrencies::Table)
                    .col(CreditCardCurrencies::CreditCardId)
                    .col(CreditCardCurrencies::CurrencyId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 8. credit_card_cycles
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(CreditCardCycles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CreditCardCycles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CreditCardCycles::CreditCardId).integer().not_null())
                    .col(ColumnDef::new(CreditCardCycles::ClosingDate).date().not_null())
                    .col(ColumnDef::new(CreditCardCycles::DueDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-credit_card_cycles-credit_card_id")
                            .from(CreditCardCycles::Table, CreditCardCycles::CreditCardId)
                            .to(CreditCards::Table, CreditCards::Id),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-credit_card_cycles-credit_card_id-closing_date-due_date-unique")
                    .table(CreditCardCycles::Table)
                    .col(CreditCardCycles::CreditCardId)
                    .col(CreditCardCycles::ClosingDate)
                    .col(CreditCardCycles::DueDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 9. credit_card_cycle_balances
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(CreditCardCycleBalances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CreditCardCycleBalances::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CreditCardCycleBalances::CreditCardCycleId).integer().not_null())
                    .col(ColumnDef::new(CreditCardCycleBalances::CurrencyId).integer().not_null())
                    .col(ColumnDef::new(CreditCardCycleBalances::Balance).double().not_null())
                    .col(ColumnDef::new(CreditCardCycleBalances::Paid).boolean().not_null().default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-credit_card_cycle_balances-credit_card_cycle_id")
                            .from(CreditCardCycleBalances::Table, CreditCardCycleBalances::CreditCardCycleId)
                            .to(CreditCardCycles::Table, CreditCardCycles::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-credit_card_cycle_balances-currency_id")
                            .from(CreditCardCycleBalances::Table, CreditCardCycleBalances::CurrencyId)
                            .to(Currencies::Table, Currencies::Id),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-credit_card_cycle_balances-credit_card_cycle_id-currency_id-unique")
                    .table(CreditCardCycleBalances::Table)
                    .col(CreditCardCycleBalances::CreditCardCycleId)
                    .col(CreditCardCycleBalances::CurrencyId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 10. credit_card_installments
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(CreditCardInstallments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CreditCardInstallments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CreditCardInstallments::CreditCardId).integer().not_null())
                    .col(ColumnDef::new(CreditCardInstallments::CurrencyId).integer().not_null())
                    .col(ColumnDef::new(CreditCardInstallments::Concept).string().not_null())
                    .col(ColumnDef::new(CreditCardInstallments::Amount).double().not_null())
                    .col(ColumnDef::new(CreditCardInstallments::StartDate).date().not_null())
                    .col(ColumnDef::new(CreditCardInstallments::Count).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-credit_card_installments-credit_card_id")
                            .from(CreditCardInstallments::Table, CreditCardInstallments::CreditCardId)
                            .to(CreditCards::Table, CreditCards::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-credit_card_installments-currency_id")
                            .from(CreditCardInstallments::Table, CreditCardInstallments::CurrencyId)
                            .to(Currencies::Table, Currencies::Id),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-credit_card_installments-credit_card_id-concept-unique")
                    .table(CreditCardInstallments::Table)
                    .col(CreditCardInstallments::CreditCardId)
                    .col(CreditCardInstallments::Concept)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 11. credit_card_subscriptions
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(CreditCardSubscriptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CreditCardSubscriptions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CreditCardSubscriptions::CreditCardId).integer().not_null())
                    .col(ColumnDef::new(CreditCardSubscriptions::CurrencyId).integer().not_null())
                    .col(ColumnDef::new(CreditCardSubscriptions::Concept).string().not_null())
                    .col(ColumnDef::new(CreditCardSubscriptions::Amount).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-credit_card_subscriptions-credit_card_id")
                            .from(CreditCardSubscriptions::Table, CreditCardSubscriptions::CreditCardId)
                            .to(CreditCards::Table, CreditCards::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-credit_card_subscriptions-currency_id")
                            .from(CreditCardSubscriptions::Table, CreditCardSubscriptions::CurrencyId)
                            .to(Currencies::Table, Currencies::Id),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-credit_card_subscriptions-credit_card_id-currency_id-concept-unique")
                    .table(CreditCardSubscriptions::Table)
                    .col(CreditCardSubscriptions::CreditCardId)
                    .col(CreditCardSubscriptions::CurrencyId)
                    .col(CreditCardSubscriptions::Concept)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 12. transaction_categories
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(TransactionCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TransactionCategories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TransactionCategories::Name).string().not_null())
                    .col(ColumnDef::new(TransactionCategories::ParentId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transaction_categories-parent_id")
                            .from(TransactionCategories::Table, TransactionCategories::ParentId)
                            .to(TransactionCategories::Table, TransactionCategories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Root categories have no parent, so the natural key folds NULL into 0
        // to keep two roots with the same name distinct from each other.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS \"idx-transaction_categories-name-parent_id-unique\" \
                 ON transaction_categories (name, IFNULL(parent_id, 0))",
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 13. transactions
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Transactions::TransactionDate).date().not_null())
                    .col(ColumnDef::new(Transactions::Type).string().not_null())
                    .col(ColumnDef::new(Transactions::Amount).double().not_null())
                    .col(ColumnDef::new(Transactions::Notes).string())
                    .col(ColumnDef::new(Transactions::PersonId).integer().not_null())
                    .col(ColumnDef::new(Transactions::BankAccountId).integer().not_null())
                    .col(ColumnDef::new(Transactions::CategoryId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-person_id")
                            .from(Transactions::Table, Transactions::PersonId)
                            .to(People::Table, People::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-bank_account_id")
                            .from(Transactions::Table, Transactions::BankAccountId)
                            .to(BankAccounts::Table, BankAccounts::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-category_id")
                            .from(Transactions::Table, Transactions::CategoryId)
                            .to(TransactionCategories::Table, TransactionCategories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation (respecting FK dependencies)
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TransactionCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CreditCardSubscriptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CreditCardInstallments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CreditCardCycleBalances::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CreditCardCycles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CreditCardCurrencies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CreditCards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BankAccounts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Banks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Countries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Currencies::Table).to_owned())
            .await?;
        Ok(())
    }
}
