//! Progress reporting for the row-by-row passes.
//!
//! Purely observational: a pass calls [`Progress::start`] once with the row
//! count, [`Progress::advance`] after every finished row, then
//! [`Progress::finish`].

pub trait Progress {
    fn start(&self, label: &str, total: usize);
    fn advance(&self);
    fn finish(&self);
}

/// Discards every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn start(&self, _label: &str, _total: usize) {}
    fn advance(&self) {}
    fn finish(&self) {}
}

impl<P: Progress + ?Sized> Progress for std::rc::Rc<P> {
    fn start(&self, label: &str, total: usize) {
        (**self).start(label, total)
    }

    fn advance(&self) {
        (**self).advance()
    }

    fn finish(&self) {
        (**self).finish()
    }
}
