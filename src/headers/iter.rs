use super::HeaderTable;

impl<'a> IntoIterator for &'a HeaderTable {
    type Item = <Iter<'a> as Iterator>::Item;

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [`HeaderTable`] name and value pairs.
#[derive(Debug)]
pub struct Iter<'a> {
    iter: std::slice::Iter<'a, (String, String)>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(entries: &'a [(String, String)]) -> Self {
        Self {
            iter: entries.iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter
            .next_back()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
