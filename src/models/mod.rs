//! Request payloads for the feature modules.
//!
//! Keys serialize in camelCase and optional fields are left out when unset,
//! so the backend only sees what the caller provided.

pub mod dues;
pub mod expenses;
pub mod fees;
pub mod students;

pub use dues::{DuesEntry, DuesFilter};
pub use expenses::{Expense, ExpenseFilter, ExpenseHead};
pub use fees::{FeeCollection, FeeHead, FeeItem, FeeStructureFilter};
pub use students::{Student, StudentAdmission, StudentFilter};
