use answer_dns_application::ports::AnswersStore;
use answer_dns_domain::Answers;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// The live answers generation. Readers load an `Arc` snapshot without
/// locking; a reload swaps the pointer and the previous generation is dropped
/// once the last in-flight query lets go of it.
pub struct SharedAnswers {
    current: ArcSwap<Answers>,
}

impl SharedAnswers {
    pub fn new(initial: Answers) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial),
        }
    }
}

impl Default for SharedAnswers {
    fn default() -> Self {
        Self::new(Answers::empty())
    }
}

impl AnswersStore for SharedAnswers {
    fn current(&self) -> Arc<Answers> {
        self.current.load_full()
    }

    fn replace(&self, answers: Answers) {
        self.current.store(Arc::new(answers));
    }
}
