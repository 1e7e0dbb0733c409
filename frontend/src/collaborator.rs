use std::rc::Rc;

use yew::prelude::*;

use crate::form::submission::{SimulatedSubmitter, Submitter};

/// The submission backend shared through context. Pages never construct
/// one themselves so tests and future HTTP transports can swap it at the root.
#[derive(Clone)]
pub struct Collaborator(pub Rc<dyn Submitter>);

impl Collaborator {
    pub fn new(submitter: impl Submitter + 'static) -> Self {
        Self(Rc::new(submitter))
    }
}

impl Default for Collaborator {
    fn default() -> Self {
        Self::new(SimulatedSubmitter::default())
    }
}

impl PartialEq for Collaborator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[hook]
pub fn use_collaborator() -> Rc<dyn Submitter> {
    use_context::<Collaborator>().unwrap_or_default().0
}
