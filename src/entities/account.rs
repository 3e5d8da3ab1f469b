// 💳 Account Entity - Encapsulated balance behind validated operations
//
// "Balance is only ever changed by deposit and withdraw"
//
// Problem solved:
// - Non-positive amounts are rejected, never applied
// - Withdrawals larger than the balance are rejected, not clamped
// - Bank name is read from the shared Bank, not copied per account
// - Every successful operation lands in an append-only ledger

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bank::Bank;

// ============================================================================
// ACCOUNT ERRORS
// ============================================================================

/// Why a deposit or withdrawal was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum AccountError {
    /// Deposit amount was zero, negative or NaN
    NonPositiveDeposit { amount: f64 },

    /// Withdrawal amount was zero, negative or NaN
    NonPositiveWithdrawal { amount: f64 },

    /// Withdrawal amount exceeds the available balance
    InsufficientFunds { requested: f64, available: f64 },
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountError::NonPositiveDeposit { .. } => write!(f, "Deposit amount must be positive"),
            AccountError::NonPositiveWithdrawal { .. } => {
                write!(f, "Withdrawal amount must be positive")
            }
            AccountError::InsufficientFunds { .. } => write!(f, "Insufficient funds"),
        }
    }
}

impl std::error::Error for AccountError {}

// ============================================================================
// TRANSACTIONS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }

    /// Past-tense verb used in receipts
    fn verb(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposited",
            TransactionKind::Withdrawal => "Withdrew",
        }
    }
}

/// Confirmation of a successful deposit or withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub kind: TransactionKind,
    pub amount: f64,
    pub balance: f64,
}

impl std::fmt::Display for Receipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ${:.2}. New balance: ${:.2}",
            self.kind.verb(),
            self.amount,
            self.balance
        )
    }
}

/// One successful operation in the account's history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub kind: TransactionKind,
    pub amount: f64,
    pub balance_after: f64,
    pub recorded_at: DateTime<Utc>,
}

// ============================================================================
// ACCOUNT SUMMARY
// ============================================================================

/// Read-only report produced by [`Account::display_info`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub bank_name: String,
    pub account_number: u64,
    pub holder: String,
    pub balance: f64,
}

impl std::fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Bank: {}", self.bank_name)?;
        writeln!(f, "Account Number: {}", self.account_number)?;
        writeln!(f, "Account Holder: {}", self.holder)?;
        write!(f, "Current Balance: ${:.2}", self.balance)
    }
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Account - holder, balance and a handle to the bank that opened it
///
/// Accounts are opened through [`Bank::open_account`] or
/// [`Bank::open_account_with_balance`]; the bank issues the account number.
/// Not `Clone`: two live copies would share one account number.
#[derive(Debug)]
pub struct Account {
    /// Stable identity (UUID)
    id: String,

    /// Issued by the bank, unique per bank
    account_number: u64,

    holder: String,
    opening_balance: f64,
    balance: f64,
    opened_at: DateTime<Utc>,

    /// Append-only, successful operations only
    ledger: Vec<LedgerEntry>,

    bank: Bank,
}

impl Account {
    pub(crate) fn open(bank: Bank, account_number: u64, holder: String, balance: f64) -> Self {
        debug_assert!(balance.is_finite(), "opening balance must be finite");

        let account = Account {
            id: uuid::Uuid::new_v4().to_string(),
            account_number,
            holder,
            opening_balance: balance,
            balance,
            opened_at: Utc::now(),
            ledger: Vec::new(),
            bank,
        };

        tracing::debug!(
            account_number = account.account_number,
            holder = %account.holder,
            balance = account.balance,
            "account opened"
        );

        account
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn account_number(&self) -> u64 {
        self.account_number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn opening_balance(&self) -> f64 {
        self.opening_balance
    }

    /// Current balance
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Bank this account was opened through
    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Deposit a strictly positive amount
    pub fn deposit(&mut self, amount: f64) -> Result<Receipt, AccountError> {
        // `!(x > 0)` also rejects NaN
        if !(amount > 0.0) {
            let err = AccountError::NonPositiveDeposit { amount };
            tracing::debug!(account_number = self.account_number, amount, "deposit rejected: {}", err);
            return Err(err);
        }

        self.balance += amount;
        Ok(self.record(TransactionKind::Deposit, amount))
    }

    /// Withdraw a strictly positive amount no larger than the balance
    pub fn withdraw(&mut self, amount: f64) -> Result<Receipt, AccountError> {
        if !(amount > 0.0) {
            let err = AccountError::NonPositiveWithdrawal { amount };
            tracing::debug!(account_number = self.account_number, amount, "withdrawal rejected: {}", err);
            return Err(err);
        }

        // Negated so a NaN balance refuses every withdrawal
        if !(amount <= self.balance) {
            let err = AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            };
            tracing::debug!(
                account_number = self.account_number,
                amount,
                balance = self.balance,
                "withdrawal rejected: {}",
                err
            );
            return Err(err);
        }

        self.balance -= amount;
        Ok(self.record(TransactionKind::Withdrawal, amount))
    }

    fn record(&mut self, kind: TransactionKind, amount: f64) -> Receipt {
        self.ledger.push(LedgerEntry {
            kind,
            amount,
            balance_after: self.balance,
            recorded_at: Utc::now(),
        });

        tracing::debug!(
            account_number = self.account_number,
            kind = kind.as_str(),
            amount,
            balance = self.balance,
            "transaction applied"
        );

        Receipt {
            kind,
            amount,
            balance: self.balance,
        }
    }

    /// Snapshot of holder, number, balance and the bank's current name
    pub fn display_info(&self) -> AccountSummary {
        AccountSummary {
            bank_name: self.bank.name(),
            account_number: self.account_number,
            holder: self.holder.clone(),
            balance: self.balance,
        }
    }

    /// Successful operations, oldest first
    pub fn history(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Get balance change since opening
    pub fn net_change(&self) -> f64 {
        self.balance - self.opening_balance
    }
}

// ============================================================================
// TESTS
// ============================================================================
