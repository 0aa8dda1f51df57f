use std::collections::HashMap;

use crate::operation::Operation;

/// Case-insensitive lookup from operation name to [`Operation`].
///
/// Built once and never modified afterwards.
#[derive(Debug, Clone)]
pub struct Registry {
    operations: HashMap<String, Operation>,
    names: Vec<&'static str>,
}

fn fold_case(name: &str) -> String {
    name.to_lowercase()
}

impl Registry {
    pub fn new(operations: impl IntoIterator<Item = Operation>) -> Self {
        let mut table = HashMap::new();
        let mut names = Vec::new();
        for op in operations {
            let previous = table.insert(fold_case(op.name()), op);
            debug_assert!(previous.is_none(), "duplicate operation {}", op.name());
            names.push(op.name());
        }
        Self {
            operations: table,
            names,
        }
    }

    /// Exact match after case folding. No prefixes or fuzzy matches.
    pub fn resolve(&self, name: &str) -> Option<Operation> {
        self.operations.get(&fold_case(name)).copied()
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Operation::ALL)
    }
}
