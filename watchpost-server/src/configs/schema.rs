use crate::models::{
    DeviceTable, FunctionConfigTable, NotificationTable, Table, UserTable,
};

/// Orders table creation so that every table's dependencies come first,
/// and disposal in the reverse order.
pub struct SchemaManager {
    tables: Vec<Box<dyn Table>>,
}

impl SchemaManager {
    pub fn new(tables: Vec<Box<dyn Table>>) -> Self {
        for (index, table) in tables.iter().enumerate() {
            for dependency in table.dependencies() {
                let satisfied = tables[..index].iter().any(|t| t.name() == dependency);
                assert!(
                    satisfied,
                    "table '{}' depends on '{}' which is not created before it",
                    table.name(),
                    dependency
                );
            }
        }

        Self { tables }
    }

    pub fn create_schema(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.create()).collect()
    }

    pub fn dispose_schema(&self) -> Vec<String> {
        self.tables.iter().rev().map(|table| table.dispose()).collect()
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        SchemaManager::new(vec![
            Box::new(UserTable),
            Box::new(DeviceTable),
            Box::new(FunctionConfigTable),
            Box::new(NotificationTable),
        ])
    }
}
