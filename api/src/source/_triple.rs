// this module is transparently re-exported by its parent `source`
use super::*;
use crate::Error;

/// A triple source produces triples, and may also fail in the process.
///
/// see [module documentation](super) for the rationale of his trait.
///
/// # Common implementors
///
/// Any iterator yielding [results](std::result::Result) of triples
/// implements the [`TripleSource`] trait.
pub trait TripleSource {
    /// The type of triples this source yields.
    type Triple;
    /// The type of errors produced by this source.
    type Error: Error + 'static;

    /// Call f for some triple(s) (possibly zero) from this source, if any.
    ///
    /// Return `Ok(false)` if there are no more triples in this source.
    ///
    /// Return an error if either the source or `f` errs.
    fn try_for_some_triple<E, F>(&mut self, f: F) -> StreamResult<bool, Self::Error, E>
    where
        E: Error,
        F: FnMut(Self::Triple) -> Result<(), E>;

    /// Call f for all triples from this source.
    ///
    /// Return an error if either the source or `f` errs.
    #[inline]
    fn try_for_each_triple<F, E>(&mut self, mut f: F) -> StreamResult<(), Self::Error, E>
    where
        F: FnMut(Self::Triple) -> Result<(), E>,
        E: Error,
    {
        while self.try_for_some_triple(&mut f)? {}
        Ok(())
    }

    /// Call f for some triple(s) (possibly zero) from this source, if any.
    ///
    /// Return false if there are no more triples in this source.
    ///
    /// Return an error if the source errs.
    #[inline]
    fn for_some_triple<F>(&mut self, f: &mut F) -> Result<bool, Self::Error>
    where
        F: FnMut(Self::Triple),
    {
        self.try_for_some_triple(|t| -> Result<(), Self::Error> {
            f(t);
            Ok(())
        })
        .map_err(StreamError::inner_into)
    }

    /// Call f for all triples from this source.
    ///
    /// Return an error if the source errs.
    #[inline]
    fn for_each_triple<F>(&mut self, f: F) -> Result<(), Self::Error>
    where
        F: FnMut(Self::Triple),
    {
        let mut f = f;
        while self.for_some_triple(&mut f)? {}
        Ok(())
    }

    /// Collect all the triples of this source in a vector,
    /// in the order they were yielded.
    #[inline]
    fn collect_triples(mut self) -> Result<Vec<Self::Triple>, Self::Error>
    where
        Self: Sized,
    {
        let mut ret = Vec::with_capacity(self.size_hint_triples().0);
        self.for_each_triple(|t| ret.push(t))?;
        Ok(ret)
    }

    /// Returns the bounds on the remaining length of the source.
    ///
    /// This method has the same contract as [`Iterator::size_hint`].
    fn size_hint_triples(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

impl<I, T, E> TripleSource for I
where
    I: Iterator<Item = Result<T, E>>,
    E: Error + 'static,
{
    type Triple = T;
    type Error = E;

    fn try_for_some_triple<E2, F>(&mut self, mut f: F) -> StreamResult<bool, Self::Error, E2>
    where
        E2: Error,
        F: FnMut(Self::Triple) -> Result<(), E2>,
    {
        match self.next() {
            Some(Err(e)) => Err(SourceError(e)),
            Some(Ok(t)) => {
                f(t).map_err(SinkError)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn size_hint_triples(&self) -> (usize, Option<usize>) {
        self.size_hint()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::convert::Infallible;
    use std::io;

    // checking that TripleSource can be implemented by a push-based producer
    struct Counter {
        remaining: usize,
    }

    impl TripleSource for Counter {
        type Triple = [usize; 3];
        type Error = Infallible;

        fn try_for_some_triple<E2, F>(&mut self, mut f: F) -> StreamResult<bool, Self::Error, E2>
        where
            E2: Error,
            F: FnMut(Self::Triple) -> Result<(), E2>,
        {
            if self.remaining == 0 {
                return Ok(false);
            }
            // two triples per call
            for _ in 0..2.min(self.remaining) {
                self.remaining -= 1;
                let n = self.remaining;
                f([n, n, n]).map_err(SinkError)?;
            }
            Ok(true)
        }
    }

    #[test]
    fn collect_from_push_source() {
        let got = Counter { remaining: 3 }.collect_triples().unwrap();
        assert_eq!(got, vec![[2, 2, 2], [1, 1, 1], [0, 0, 0]]);
    }

    #[test]
    fn sink_error_stops_the_source() {
        let mut src = Counter { remaining: 10 };
        let mut seen = 0;
        let res = src.try_for_each_triple(|_| {
            seen += 1;
            if seen == 3 {
                Err(io::Error::other("enough"))
            } else {
                Ok(())
            }
        });
        assert!(res.unwrap_err().is_sink_error());
        assert_eq!(seen, 3);
        assert_eq!(src.remaining, 7);
    }

    #[test]
    fn iterator_of_results() {
        let v: Vec<Result<[u8; 3], io::Error>> = vec![Ok([1, 2, 3]), Err(io::Error::other("bad"))];
        let mut got = vec![];
        let res = v.into_iter().for_each_triple(|t| got.push(t));
        assert_eq!(res.unwrap_err().to_string(), "bad");
        assert_eq!(got, vec![[1, 2, 3]]);
    }
}
