use std::cmp::Ordering;

/// A struct that never compares the ID.
/// This is crucial to test that the correct item is pertained
/// if there are multiple equal items, as in sorting and `max`/`min`.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Id {
    pub id: usize,
    pub num: i32,
}

impl Id {
    /// Tags each number with its position.
    pub fn numbered<const N: usize>(nums: [i32; N]) -> [Self; N] {
        std::array::from_fn(|id| Self { id, num: nums[id] })
    }

    pub fn full_eq(self, other: Self) -> bool {
        self.id == other.id && self.num == other.num
    }
}

impl PartialEq for Id {
    fn eq(&self, other: &Self) -> bool {
        self.num == other.num
    }
}

impl PartialOrd for Id {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Id {
    fn cmp(&self, other: &Self) -> Ordering {
        self.num.cmp(&other.num)
    }
}
