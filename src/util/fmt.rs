use std::fmt::{self, Debug, Formatter};

/// Formats the values of a borrowed iterator as a list.
pub struct DebugEntries<I>(pub I);

impl<I: Iterator + Clone> Debug for DebugEntries<I>
where
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
