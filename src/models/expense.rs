use serde::{Deserialize, Serialize};

/// Row of the `expenses` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    pub expense_id: i64,
    pub date: String, // DD-MM-YYYY
    pub emp_name: String,
    pub emp_id: String,
    pub expense_category: String,
    pub expense_price: f64,
}

/// Request payload of `POST /api/expense`. Every field is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewExpense {
    pub emp_name: String,
    pub emp_id: String,
    pub expense_category: String,
    pub expense_price: f64,
}

impl NewExpense {
    pub fn into_expense(self, date: String) -> Expense {
        Expense {
            expense_id: 0,
            date,
            emp_name: self.emp_name,
            emp_id: self.emp_id,
            expense_category: self.expense_category,
            expense_price: self.expense_price,
        }
    }
}
