use crate::db::TrackerStore;
use crate::errors::AppResult;
use crate::models::{Delivery, Expense, NewDelivery, NewExpense};
use crate::utils::{Clock, day_stamp};

pub struct RecordLogic;

impl RecordLogic {
    /// Insert one delivery stamped with today's local date.
    pub fn record_delivery(
        store: &dyn TrackerStore,
        clock: &dyn Clock,
        input: NewDelivery,
    ) -> AppResult<Delivery> {
        let delivery = input.into_delivery(day_stamp(&clock.now()));
        store.add_delivery(&delivery)?;
        Ok(delivery)
    }

    /// Insert one expense stamped with today's local date.
    pub fn record_expense(
        store: &dyn TrackerStore,
        clock: &dyn Clock,
        input: NewExpense,
    ) -> AppResult<Expense> {
        let expense = input.into_expense(day_stamp(&clock.now()));
        store.add_expense(&expense)?;
        Ok(expense)
    }
}
