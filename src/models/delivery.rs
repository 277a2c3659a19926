use serde::{Deserialize, Serialize};

/// Row of the `deliveries` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delivery {
    pub delivery_id: i64,
    pub date: String, // DD-MM-YYYY
    pub emp_name: String,
    pub emp_id: String,
    pub cust_id: String,
    pub gas_price: f64,
}

/// Request payload of `POST /api/delivery`. Every field is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewDelivery {
    pub emp_name: String,
    pub emp_id: String,
    pub cust_id: String,
    pub gas_price: f64,
}

impl NewDelivery {
    pub fn into_delivery(self, date: String) -> Delivery {
        Delivery {
            delivery_id: 0,
            date,
            emp_name: self.emp_name,
            emp_id: self.emp_id,
            cust_id: self.cust_id,
            gas_price: self.gas_price,
        }
    }
}
