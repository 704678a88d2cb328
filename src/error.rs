/// Everything that can go wrong walking, building or rearranging one of our
/// structures. Lookups that simply miss return `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("not a bst preorder sequence: consumed {consumed} of {len} values")]
    InvalidPreorder { consumed: usize, len: usize },

    #[error("group size must be at least 1")]
    ZeroGroupSize,

    #[error("room {room} holds key {key}, but there are only {rooms} rooms")]
    KeyOutOfRange { room: usize, key: usize, rooms: usize },

    #[error("running sum overflowed while adding {value}")]
    SumOverflow { value: i32 },

    #[error("level order entry at position {position} has no parent to hang from")]
    DanglingLevelOrder { position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
