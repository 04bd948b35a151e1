/// Side effects the main loop performs after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Bell,
}
