use std::ops::Range;

// NOTE: Conversion BinaryHypercube <-> MultilinearPoint is Big Endian, using only the num_variables
// least significant bits of the number stored inside BinaryHypercube.

/// point on the binary hypercube {0,1}^n for some n.
///
/// The point is encoded via the n least significant bits of a usize in big endian order and we do
/// not store n. This encoding is exactly the index of the point in an evaluation table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BinaryHypercubePoint(pub usize);

/// An iterator over all points of the binary hypercube `{0,1}^num_variables`, in table order.
#[derive(Debug, Clone)]
pub struct BinaryHypercube {
    positions: Range<usize>,
}

impl BinaryHypercube {
    pub fn new(num_variables: usize) -> Self {
        // Note that we need strictly smaller, since 1 << num_variables would overflow otherwise.
        assert!(num_variables < usize::BITS as usize);
        Self {
            positions: 0..1 << num_variables,
        }
    }
}

impl Iterator for BinaryHypercube {
    type Item = BinaryHypercubePoint;

    fn next(&mut self) -> Option<Self::Item> {
        self.positions.next().map(BinaryHypercubePoint)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl ExactSizeIterator for BinaryHypercube {}
