#[derive(Default, Clone, Copy, Eq, Hash, PartialEq)]
pub struct Sequence {
    value: usize,
}

impl Sequence {
    pub fn one<C, T>(&mut self, constructor: C) -> T
    where
        C: Fn(usize) -> T,
    {
        self.value += 1;
        constructor(self.value)
    }

    pub fn set(&mut self, value: usize) {
        self.value = value;
    }

    pub fn register(&mut self, id: usize) {
        if id > self.value {
            self.value = id
        }
    }
}
