/// Fixed-capacity circular buffer.
///
/// Wrap in `parking_lot::Mutex` for cross-thread access.
/// Overflow drops the oldest entries and counts them in [`EventRing::dropped`].
#[derive(Debug)]
pub struct EventRing<T> {
    slots: Vec<Option<T>>,
    write_index: usize,
    read_index: usize,
    available: usize,
    capacity: usize,
    dropped: u64,
}

impl<T> EventRing<T> {
    /// Creates an empty ring. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            write_index: 0,
            read_index: 0,
            available: 0,
            capacity,
            dropped: 0,
        }
    }

    /// Append an entry, evicting the oldest one if the ring is full.
    pub fn push(&mut self, item: T) {
        if self.available == self.capacity {
            self.slots[self.read_index] = None;
            self.read_index = (self.read_index + 1) % self.capacity;
            self.available -= 1;
            self.dropped += 1;
        }

        self.slots[self.write_index] = Some(item);
        self.write_index = (self.write_index + 1) % self.capacity;
        self.available += 1;
    }

    /// Remove and return up to `count` entries, oldest first.
    pub fn drain(&mut self, count: usize) -> Vec<T> {
        let to_read = count.min(self.available);
        let mut result = Vec::with_capacity(to_read);
        for _ in 0..to_read {
            if let Some(item) = self.slots[self.read_index].take() {
                result.push(item);
            }
            self.read_index = (self.read_index + 1) % self.capacity;
        }
        self.available -= to_read;
        result
    }

    /// Iterate the stored entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.available)
            .filter_map(move |i| self.slots[(self.read_index + i) % self.capacity].as_ref())
    }

    /// Number of entries currently stored.
    pub fn count(&self) -> usize {
        self.available
    }

    /// Whether the ring holds no entries.
    pub fn is_empty(&self) -> bool {
        self.available == 0
    }

    /// Number of entries evicted by overflow since creation or the last reset.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Empty the ring and clear the drop count.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.write_index = 0;
        self.read_index = 0;
        self.available = 0;
        self.dropped = 0;
    }

    /// The maximum number of entries held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Clone> EventRing<T> {
    /// Copy of the stored entries, oldest first.
    pub fn snapshot(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
