use std::collections::HashMap;
use tracing::debug;

use super::{Make, Model, VehicleDocument};

/// Attaches each model group to its make.
///
/// Makes keep their document order. When several groups name the same
/// `parent_id` the last one wins, and groups naming an unknown make are dropped.
pub fn assemble(document: VehicleDocument) -> Vec<Make> {
  let VehicleDocument { makes, model_groups } = document;

  // make id => models
  let mut models_by_make: HashMap<String, Vec<Model>> = HashMap::with_capacity(model_groups.len());
  for group in model_groups {
    let models = group.values
      .into_iter()
      .map(|m| Model { id: m.id, name: m.name })
      .collect();

    if models_by_make.insert(group.parent_id.clone(), models).is_some() {
      debug!(parent_id = %group.parent_id, "model group replaces an earlier group for the same make");
    }
  }

  makes
    .into_iter()
    .map(|record| {
      // a duplicated make id still gets its models, so clone instead of remove
      let models = models_by_make.get(&record.id).cloned().unwrap_or_default();
      Make { id: record.id, name: record.name, models }
    })
    .collect()
}
