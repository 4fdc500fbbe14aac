use std::cell::Cell;

/// One-shot latch recording whether the visitor has clicked or touched the page.
#[derive(Debug, Default)]
pub struct InteractionGate {
    interacted: Cell<bool>,
}

impl InteractionGate {
    pub fn has_interacted(&self) -> bool {
        self.interacted.get()
    }

    /// Returns `true` only for the call that flips the gate.
    pub fn open(&self) -> bool {
        !self.interacted.replace(true)
    }
}
