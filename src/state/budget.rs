/// Expansion budget shared across an entire crawl
///
/// Each expansion step (reading a fetched page's links in order to follow
/// them) consumes one unit, no matter which branch of the traversal it
/// belongs to. This bounds the total number of expansions in a run rather than
/// the depth of any single path, so a wide first page can use up the budget
/// before deeper pages get a turn.
///
/// The remaining count only ever decreases and is never reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlBudget {
    initial: u32,
    remaining: u32,
}

impl CrawlBudget {
    /// Creates a budget allowing `steps` expansions
    pub fn new(steps: u32) -> Self {
        Self {
            initial: steps,
            remaining: steps,
        }
    }

    /// Consumes one expansion step
    ///
    /// # Returns
    ///
    /// * `true` - A step was available and has been consumed
    /// * `false` - The budget is exhausted; the caller must not expand
    pub fn try_consume(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// Steps still available
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Steps consumed so far
    pub fn consumed(&self) -> u32 {
        self.initial - self.remaining
    }

    /// Returns true once no further expansion is allowed
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
