/// One scalar field at two adjacent time levels.
///
/// `next` is only ever written from `current`; `swap` exchanges the
/// roles without moving data.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldPair {
    current: Vec<f64>,
    next: Vec<f64>,
}

impl FieldPair {
    pub fn new(len: usize) -> Self {
        FieldPair {
            current: vec![0.0; len],
            next: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn current(&self) -> &[f64] {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut [f64] {
        &mut self.current
    }

    pub fn next(&self) -> &[f64] {
        &self.next
    }

    pub fn next_mut(&mut self) -> &mut [f64] {
        &mut self.next
    }

    /// Read `current` while writing `next`.
    pub fn split(&mut self) -> (&[f64], &mut [f64]) {
        (&self.current, &mut self.next)
    }

    pub fn buffers_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.current, &mut self.next)
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    pub fn into_current(self) -> Vec<f64> {
        self.current
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn swap_test() {
        let mut f = FieldPair::new(3);
        f.current_mut().copy_from_slice(&[1.0, 2.0, 3.0]);
        let a_ptr = f.current().as_ptr();
        let b_ptr = f.next().as_ptr();
        f.swap();
        assert_eq!(f.current().as_ptr(), b_ptr);
        assert_eq!(f.next().as_ptr(), a_ptr);
        assert_eq!(f.next(), &[1.0, 2.0, 3.0]);
        assert_eq!(f.current(), &[0.0; 3]);
    }

    #[test]
    fn split_test() {
        let mut f = FieldPair::new(4);
        f.current_mut().fill(2.0);
        let (input, output) = f.split();
        for (o, i) in output.iter_mut().zip(input) {
            *o = i * 3.0;
        }
        assert_eq!(f.next(), &[6.0; 4]);
        assert_eq!(f.current(), &[2.0; 4]);
    }
}
