use super::SlotStore;
use crate::db::pool::DbPool;
use crate::db::slots;
use crate::errors::AppResult;

impl SlotStore for DbPool {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        slots::read_slot(&self.conn, key)
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        slots::write_slot(&self.conn, key, value)
    }
}
