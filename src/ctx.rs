
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Http,
    Timer,
}

/// Per-invocation context, one per HTTP request or timer tick.
#[derive(Debug, Clone)]
pub struct Ctx {
    invocation_id: Uuid,
    trigger: Trigger,
}

impl Ctx {
    pub fn new(trigger: Trigger) -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
            trigger,
        }
    }

    pub fn http() -> Self {
        Self::new(Trigger::Http)
    }

    pub fn timer() -> Self {
        Self::new(Trigger::Timer)
    }

    pub fn invocation_id(&self) -> Uuid {
        self.invocation_id
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }
}
