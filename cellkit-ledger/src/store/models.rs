//! Rows of the ledger tables.

use chrono::NaiveDate;

/// How an account is grouped on screen. Stored as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccountType {
    Bank,
    CreditCard,
    Cash,
}

impl AccountType {
    /// Convert for database storage.
    pub fn as_i64(&self) -> i64 {
        match self {
            AccountType::Bank => 0,
            AccountType::CreditCard => 1,
            AccountType::Cash => 2,
        }
    }

    /// Parse from the database value.
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(AccountType::Bank),
            1 => Some(AccountType::CreditCard),
            2 => Some(AccountType::Cash),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Currency {
    pub id: i64,
    pub name: String,
    /// Units of this currency per US dollar.
    pub usdrate: f64,
}

impl Currency {
    /// A currency not yet stored (id 0).
    pub fn new(name: impl Into<String>, usdrate: f64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            usdrate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    /// Short unique handle, e.g. `bpichecking`.
    pub code: String,
    pub name: String,
    pub account_type: AccountType,
    pub currency_id: i64,
}

impl Account {
    /// An account not yet stored (id 0).
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
        currency_id: i64,
    ) -> Self {
        Self {
            id: 0,
            code: code.into(),
            name: name.into(),
            account_type,
            currency_id,
        }
    }
}

/// One posting against an account. Positive amounts are deposits.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub account_id: i64,
    pub date: NaiveDate,
    pub reference: String,
    pub description: String,
    pub amount: f64,
}

impl Transaction {
    /// A transaction not yet stored (id 0).
    pub fn new(
        account_id: i64,
        date: NaiveDate,
        reference: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: 0,
            account_id,
            date,
            reference: reference.into(),
            description: description.into(),
            amount,
        }
    }
}
