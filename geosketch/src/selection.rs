use crate::model::PointId;

/// Operand count of every multi-point operation (line, circle).
pub const OPERANDS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionProgress {
    /// Points held so far.
    Pending(usize),
    /// Buffer reached `OPERANDS` and was emptied.
    Complete(PointId, PointId),
}

/// Points picked toward a pending line or circle.
#[derive(Clone, Debug, Default)]
pub struct SelectionBuffer {
    picked: Vec<PointId>,
}

impl SelectionBuffer {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, id: PointId) -> SelectionProgress {
        self.picked.push(id);
        if self.picked.len() < OPERANDS {
            return SelectionProgress::Pending(self.picked.len());
        }
        let (a, b) = (self.picked[0], self.picked[1]);
        self.picked.clear();
        SelectionProgress::Complete(a, b)
    }

    pub fn clear(&mut self) { self.picked.clear(); }
    pub fn len(&self) -> usize { self.picked.len() }
    pub fn is_empty(&self) -> bool { self.picked.is_empty() }
    pub fn as_slice(&self) -> &[PointId] { &self.picked }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_on_second_point() {
        let mut s = SelectionBuffer::new();
        assert_eq!(s.push(PointId(3)), SelectionProgress::Pending(1));
        assert_eq!(s.as_slice(), &[PointId(3)]);
        assert_eq!(s.push(PointId(0)), SelectionProgress::Complete(PointId(3), PointId(0)));
        assert!(s.is_empty());
        assert_eq!(s.push(PointId(1)), SelectionProgress::Pending(1));
        s.clear();
        assert_eq!(s.len(), 0);
    }
}
