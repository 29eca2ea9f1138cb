/// An action a panel reacts to: a key press, a reply arriving, a tick.
pub trait Intent: Send + 'static {}
