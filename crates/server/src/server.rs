use axum::{Json, Router, routing::get};

use std::sync::Arc;

use crate::{
    ServerError, bank_accounts, banks, countries, credit_card_cycles, credit_cards, currencies,
    installments, people, subscriptions, transaction_categories, transactions,
};
use api_types::Health;
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn health() -> Json<Health> {
    Json(Health::up())
}

async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}

async fn not_found() -> ServerError {
    ServerError::NotFound
}

/// Build the `/api` router around `engine`.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/api/health", get(health))
        .route("/api/countries", get(countries::list))
        .route(
            "/api/currencies",
            get(currencies::list).post(currencies::create),
        )
        .route(
            "/api/currencies/{id}",
            get(currencies::get)
                .put(currencies::update)
                .delete(currencies::delete),
        )
        .route("/api/banks", get(banks::list).post(banks::create))
        .route(
            "/api/banks/{id}",
            get(banks::get).put(banks::update).delete(banks::delete),
        )
        .route("/api/people", get(people::list).post(people::create))
        .route(
            "/api/people/{id}",
            get(people::get).put(people::update).delete(people::delete),
        )
        .route(
            "/api/bank-accounts",
            get(bank_accounts::list).post(bank_accounts::create),
        )
        .route(
            "/api/bank-accounts/{id}",
            get(bank_accounts::get)
                .put(bank_accounts::update)
                .delete(bank_accounts::delete),
        )
        .route(
            "/api/credit-cards",
            get(credit_cards::list).post(credit_cards::create),
        )
        .route(
            "/api/credit-cards/{id}",
            get(credit_cards::get)
                .put(credit_cards::update)
                .delete(credit_cards::delete),
        )
        .route(
            "/api/credit-cards/{id}/currencies",
            get(credit_cards::currencies).put(credit_cards::replace_currencies),
        )
        .route(
            "/api/credit-card-cycles",
            get(credit_card_cycles::list).post(credit_card_cycles::create),
        )
        .route(
            "/api/credit-card-cycles/{id}",
            get(credit_card_cycles::get)
                .put(credit_card_cycles::update)
                .delete(credit_card_cycles::delete),
        )
        .route(
            "/api/credit-card-cycles/{id}/balances",
            get(credit_card_cycles::list_balances).post(credit_card_cycles::create_balance),
        )
        .route(
            "/api/credit-card-cycles/{id}/balances/{balance_id}",
            get(credit_card_cycles::get_balance)
                .put(credit_card_cycles::update_balance)
                .delete(credit_card_cycles::delete_balance),
        )
        .route(
            "/api/credit-card-installments",
            get(installments::list).post(installments::create),
        )
        .route(
            "/api/credit-card-installments/{id}",
            get(installments::get)
                .put(installments::update)
                .delete(installments::delete),
        )
        .route(
            "/api/credit-card-subscriptions",
            get(subscriptions::list).post(subscriptions::create),
        )
        .route(
            "/api/credit-card-subscriptions/{id}",
            get(subscriptions::get)
                .put(subscriptions::update)
                .delete(subscriptions::delete),
        )
        .route(
            "/api/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/api/transactions/{id}",
            get(transactions::get)
                .put(transactions::update)
                .delete(transactions::delete),
        )
        .route(
            "/api/transaction-categories",
            get(transaction_categories::list).post(transaction_categories::create),
        )
        .route(
            "/api/transaction-categories/{id}",
            get(transaction_categories::get)
                .put(transaction_categories::update)
                .delete(transaction_categories::delete),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}
