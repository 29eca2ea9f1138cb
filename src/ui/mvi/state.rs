/// Panel state. `Default` is the closed, empty panel.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
