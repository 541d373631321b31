//! Endpoint registry: logical operation names mapped to REST paths
//!
//! Every path is root-relative and is resolved against the tenant's base URL
//! by the client core. Absolute URLs do not belong here; callers that need an
//! external host pass the full URL to `ApiClient::call` directly.

use crate::api::request::HttpMethod;

/// Student admission and lookup
pub mod students {
    pub const GET_STUDENTS: &str = "/api/Students/GetStudents";
    pub const GET_STUDENT_BY_ID: &str = "/api/Students/GetStudentById";
    pub const ADD_STUDENT: &str = "/api/Students/AddStudent";
    pub const UPDATE_STUDENT: &str = "/api/Students/UpdateStudent";
    pub const DELETE_STUDENT: &str = "/api/Students/DeleteStudent";
}

/// Fee heads, structures and collection
pub mod fees {
    pub const GET_FEE_HEADS: &str = "/api/Fees/GetFeeHeads";
    pub const ADD_FEE_HEAD: &str = "/api/Fees/AddFeeHead";
    pub const GET_FEE_STRUCTURE: &str = "/api/Fees/GetFeeStructure";
    pub const COLLECT_FEE: &str = "/api/Fees/CollectFee";
    pub const GET_FEE_RECEIPT: &str = "/api/Fees/GetFeeReceipt";
}

/// Outstanding dues
pub mod dues {
    pub const GET_STUDENT_DUES: &str = "/api/Dues/GetStudentDues";
    pub const ADD_DUES: &str = "/api/Dues/AddDues";
    pub const GET_DUES_REPORT: &str = "/api/Dues/GetDuesReport";
}

/// Master data used by dropdowns
pub mod masters {
    pub const GET_CLASSES: &str = "/api/Masters/GetClasses";
    pub const GET_SECTIONS: &str = "/api/Masters/GetSections";
    pub const GET_SESSIONS: &str = "/api/Masters/GetSessions";
    pub const GET_CATEGORIES: &str = "/api/Masters/GetCategories";
}

/// Expense heads and entries
pub mod expenses {
    pub const GET_EXPENSE_HEADS: &str = "/api/Expenses/GetExpenseHeads";
    pub const ADD_EXPENSE_HEAD: &str = "/api/Expenses/AddExpenseHead";
    pub const GET_EXPENSES: &str = "/api/Expenses/GetExpenses";
    pub const ADD_EXPENSE: &str = "/api/Expenses/AddExpense";
    pub const DELETE_EXPENSE: &str = "/api/Expenses/DeleteExpense";
}

/// Flat `namespace.operation` → (method, path) table, used by the CLI and by
/// `lookup`. The method is the one the matching `services` function sends.
pub const ENDPOINTS: &[(&str, HttpMethod, &str)] = &[
    ("students.get_students", HttpMethod::Post, students::GET_STUDENTS),
    ("students.get_student_by_id", HttpMethod::Post, students::GET_STUDENT_BY_ID),
    ("students.add_student", HttpMethod::Post, students::ADD_STUDENT),
    ("students.update_student", HttpMethod::Post, students::UPDATE_STUDENT),
    ("students.delete_student", HttpMethod::Post, students::DELETE_STUDENT),
    ("fees.get_fee_heads", HttpMethod::Get, fees::GET_FEE_HEADS),
    ("fees.add_fee_head", HttpMethod::Post, fees::ADD_FEE_HEAD),
    ("fees.get_fee_structure", HttpMethod::Post, fees::GET_FEE_STRUCTURE),
    ("fees.collect_fee", HttpMethod::Post, fees::COLLECT_FEE),
    ("fees.get_fee_receipt", HttpMethod::Post, fees::GET_FEE_RECEIPT),
    ("dues.get_student_dues", HttpMethod::Post, dues::GET_STUDENT_DUES),
    ("dues.add_dues", HttpMethod::Post, dues::ADD_DUES),
    ("dues.get_dues_report", HttpMethod::Post, dues::GET_DUES_REPORT),
    ("masters.get_classes", HttpMethod::Get, masters::GET_CLASSES),
    ("masters.get_sections", HttpMethod::Get, masters::GET_SECTIONS),
    ("masters.get_sessions", HttpMethod::Get, masters::GET_SESSIONS),
    ("masters.get_categories", HttpMethod::Get, masters::GET_CATEGORIES),
    ("expenses.get_expense_heads", HttpMethod::Get, expenses::GET_EXPENSE_HEADS),
    ("expenses.add_expense_head", HttpMethod::Post, expenses::ADD_EXPENSE_HEAD),
    ("expenses.get_expenses", HttpMethod::Post, expenses::GET_EXPENSES),
    ("expenses.add_expense", HttpMethod::Post, expenses::ADD_EXPENSE),
    ("expenses.delete_expense", HttpMethod::Post, expenses::DELETE_EXPENSE),
];

/// Looks up a path by its logical name (e.g. `"masters.get_classes"`).
///
/// # Example
/// ```
/// use school_erp_client::api::endpoints::lookup;
///
/// assert_eq!(lookup("masters.get_classes"), Some("/api/Masters/GetClasses"));
/// assert_eq!(lookup("masters.nothing"), None);
/// ```
pub fn lookup(name: &str) -> Option<&'static str> {
    ENDPOINTS
        .iter()
        .find(|(key, _, _)| *key == name)
        .map(|(_, _, path)| *path)
}

/// HTTP method registered for a logical name.
pub fn lookup_method(name: &str) -> Option<HttpMethod> {
    ENDPOINTS
        .iter()
        .find(|(key, _, _)| *key == name)
        .map(|(_, method, _)| *method)
}

/// Returns true for endpoints that carry their own scheme and host.
pub fn is_absolute(endpoint: &str) -> bool {
    endpoint.starts_with("http://") || endpoint.starts_with("https://")
}
