//! Step sources a controller can replay.

use std::fmt;
use std::sync::Arc;

use algoviz_core::Step;

/// Either a finished recording or an iterator producing steps on demand.
pub enum StepSource<P> {
    Recorded(Arc<[Step<P>]>),
    /// Step count is unknown until the iterator is exhausted. A lazy
    /// source cannot be rewound.
    Lazy(Box<dyn Iterator<Item = Step<P>> + Send>),
}

impl<P: Clone> StepSource<P> {
    pub fn recorded(steps: impl Into<Arc<[Step<P>]>>) -> Self {
        StepSource::Recorded(steps.into())
    }

    pub fn lazy<I>(steps: I) -> Self
    where
        I: Iterator<Item = Step<P>> + Send + 'static,
    {
        StepSource::Lazy(Box::new(steps))
    }

    /// The step at `cursor`. For lazy sources `cursor` is ignored and the
    /// iterator advances.
    pub(crate) fn next(&mut self, cursor: usize) -> Option<Step<P>> {
        match self {
            StepSource::Recorded(steps) => steps.get(cursor).cloned(),
            StepSource::Lazy(iter) => iter.next(),
        }
    }

    pub fn len(&self) -> Option<usize> {
        match self {
            StepSource::Recorded(steps) => Some(steps.len()),
            StepSource::Lazy(_) => None,
        }
    }

    pub fn first_payload(&self) -> Option<&P> {
        match self {
            StepSource::Recorded(steps) => steps.first().map(|s| &s.payload),
            StepSource::Lazy(_) => None,
        }
    }

    pub fn is_rewindable(&self) -> bool {
        matches!(self, StepSource::Recorded(_))
    }
}

impl<P> fmt::Debug for StepSource<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepSource::Recorded(steps) => write!(f, "Recorded({} steps)", steps.len()),
            StepSource::Lazy(_) => f.write_str("Lazy"),
        }
    }
}
