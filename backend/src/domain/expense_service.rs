use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info, warn};

use shared::{
    CreateExpenseRequest, Expense, ExpenseListResponse, ExpenseResponse, ExpenseSummaryResponse,
};

use crate::domain::errors::{DomainError, DomainResult};
use crate::storage::ExpenseStorage;

/// Service for tracking travel expenses against a trip budget. Holds the
/// collection in memory and re-serializes it whole on every mutation, like
/// the trip store.
pub struct ExpenseService {
    storage: Arc<dyn ExpenseStorage>,
    expenses: RwLock<Vec<Expense>>,
    budget_limit: f64,
}

impl ExpenseService {
    /// Hydrate the service from persistent storage; an unreadable store
    /// loads as an empty collection.
    pub async fn load(storage: Arc<dyn ExpenseStorage>, budget_limit: f64) -> Self {
        let expenses = match storage.load_expenses().await {
            Ok(expenses) => expenses,
            Err(e) => {
                warn!("Could not load expense collection, starting empty: {}", e);
                Vec::new()
            }
        };

        Self {
            storage,
            expenses: RwLock::new(expenses),
            budget_limit,
        }
    }

    /// Record a new expense; newest entries come first
    pub async fn create_expense(&self, request: CreateExpenseRequest) -> DomainResult<ExpenseResponse> {
        info!("Recording expense: {} ({})", request.description, request.amount);
        validate_create_request(&request)?;

        let expense = Expense {
            id: Expense::generate_id(),
            amount: request.amount,
            category: request.category,
            description: request.description.trim().to_string(),
            date: request
                .date
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
        };

        let mut expenses = self.expenses.write().await;
        expenses.insert(0, expense.clone());

        if let Err(e) = self.storage.save_expenses(&expenses).await {
            error!("Failed to persist expense collection: {}", e);
            return Err(DomainError::SaveFailed(e));
        }

        Ok(ExpenseResponse {
            expense,
            success_message: "Spesa aggiunta con successo!".to_string(),
        })
    }

    /// All recorded expenses, newest first
    pub async fn list_expenses(&self) -> ExpenseListResponse {
        ExpenseListResponse {
            expenses: self.expenses.read().await.clone(),
        }
    }

    /// Total spending measured against the configured budget
    pub async fn summary(&self) -> ExpenseSummaryResponse {
        let total: f64 = self.expenses.read().await.iter().map(|e| e.amount).sum();
        ExpenseSummaryResponse {
            total,
            budget: self.budget_limit,
            budget_used_percent: (total / self.budget_limit) * 100.0,
        }
    }
}

fn validate_create_request(request: &CreateExpenseRequest) -> DomainResult<()> {
    if request.description.trim().is_empty() {
        return Err(DomainError::Validation("Expense description cannot be empty".to_string()));
    }
    if !request.amount.is_finite() || request.amount <= 0.0 {
        return Err(DomainError::Validation("Expense amount must be positive".to_string()));
    }
    Ok(())
}
