use crate::enumerate::Enumerator;
use crate::matrix::CostMatrix;
use crate::traits::CostModel;

/// Configures an [`Enumerator`].
///
/// The search is uncapped unless [`with_limit`](Self::with_limit) is called.
/// With many ties the number of optimal sequences grows combinatorially, so
/// callers facing untrusted input should set a limit and check
/// [`Enumeration::truncated`](crate::enumerate::Enumeration::truncated).
pub struct EnumeratorBuilder<'a, T, C: ?Sized> {
    source: &'a [T],
    target: &'a [T],
    matrix: &'a CostMatrix,
    costs: &'a C,
    limit: Option<usize>,
}

impl<'a, T, C> EnumeratorBuilder<'a, T, C>
where
    T: PartialEq,
    C: CostModel<T> + ?Sized,
{
    pub fn new(source: &'a [T], target: &'a [T], matrix: &'a CostMatrix, costs: &'a C) -> Self {
        Self {
            source,
            target,
            matrix,
            costs,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// # Panics
    /// Panics if the matrix shape does not match the inputs.
    pub fn build(self) -> Enumerator<'a, T, C> {
        Enumerator::with_limit(
            self.source,
            self.target,
            self.matrix,
            self.costs,
            self.limit,
        )
    }
}
