//! Cycling through a fixed list of resources

/// Index into a fixed list that wraps past the last element
#[derive(Debug, Clone, PartialEq)]
pub struct Cycler<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Cycler<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }

    /// Start at `index` (taken modulo the list length)
    pub fn starting_at(mut self, index: usize) -> Self {
        if !self.items.is_empty() {
            self.index = index % self.items.len();
        }
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// Move to the next item, wrapping to the first
    pub fn advance(&mut self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.items.len();
        self.items.get(self.index)
    }
}

/// A [`Cycler`] that advances on its own every `interval` ticks
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalCycler<T> {
    cycler: Cycler<T>,
    interval: u32,
    timer: u32,
}

impl<T> IntervalCycler<T> {
    pub fn new(cycler: Cycler<T>, interval: u32) -> Self {
        Self {
            cycler,
            interval: interval.max(1),
            timer: 0,
        }
    }

    pub fn cycler(&self) -> &Cycler<T> {
        &self.cycler
    }

    /// Count one tick. Returns the new item when the interval elapses.
    pub fn tick(&mut self) -> Option<&T> {
        self.timer += 1;
        if self.timer < self.interval {
            return None;
        }
        self.timer = 0;
        self.cycler.advance()
    }
}
