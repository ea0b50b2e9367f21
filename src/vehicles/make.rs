/// A single model as it appears in the sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
  pub id: String,
  pub name: String
}

/// A make with its models resolved, in document order.
/// A make nobody references still shows up here, just with no models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Make {
  pub id: String,
  pub name: String,
  pub models: Vec<Model>
}

impl Make {
  pub fn new(id: impl Into<String>, name: impl Into<String>, models: Vec<Model>) -> Self {
    Make { id: id.into(), name: name.into(), models }
  }
}

impl Model {
  pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
    Model { id: id.into(), name: name.into() }
  }
}
