use thiserror::Error;

/// Failures surfaced by menu, cursor and slot operations.
///
/// Every variant is reported straight to the caller; nothing is retried or
/// rolled back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// A single slot index outside `0..size`.
    #[error("slot {slot} is out of range for a menu of {size} slots")]
    SlotOutOfRange {
        /// Offending slot index.
        slot: usize,
        /// Slot count of the menu.
        size: usize,
    },
    /// A range bound beyond what the operation accepts for this menu.
    #[error("range {from}..{to} exceeds the bounds of a menu of {size} slots")]
    RangeOutOfBounds {
        /// Lower bound as given.
        from: usize,
        /// Upper bound as given.
        to: usize,
        /// Slot count of the menu.
        size: usize,
    },
    /// A cursor start position outside its own `from..=to` range.
    #[error("cursor start {start} lies outside {from}..={to}")]
    StartOutOfRange {
        /// Requested start position.
        start: usize,
        /// Validated lower bound.
        from: usize,
        /// Validated upper bound.
        to: usize,
    },
    /// Range bounds that are individually valid but reversed.
    #[error("range start {from} is greater than range end {to}")]
    InvalidRange {
        /// Lower bound as given.
        from: usize,
        /// Upper bound as given.
        to: usize,
    },
    /// Cursor stepped past one of its boundaries.
    #[error("cursor at {index} has no {direction} slot")]
    NoSuchElement {
        /// Cursor position at the time of the call.
        index: usize,
        /// Direction of the failed step.
        direction: Direction,
    },
    /// The property at a slot is already mutably borrowed, usually because it
    /// is running and tried to modify itself through the menu.
    #[error("property at slot {slot} is already in use")]
    PropertyBusy {
        /// Slot the property was looked up through.
        slot: usize,
    },
}

/// Coarse classification of [`MenuError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An index or bound outside the valid index domain.
    OutOfRange,
    /// Individually valid arguments that contradict each other.
    InvalidArgument,
    /// Traversal past an exhausted boundary.
    NoSuchElement,
    /// Re-entrant access to a property that is in use.
    Busy,
}

/// Cursor step direction, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards `to`.
    Next,
    /// Towards `from`.
    Previous,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Next => f.write_str("next"),
            Direction::Previous => f.write_str("previous"),
        }
    }
}

impl MenuError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MenuError::SlotOutOfRange { .. }
            | MenuError::RangeOutOfBounds { .. }
            | MenuError::StartOutOfRange { .. } => ErrorKind::OutOfRange,
            MenuError::InvalidRange { .. } => ErrorKind::InvalidArgument,
            MenuError::NoSuchElement { .. } => ErrorKind::NoSuchElement,
            MenuError::PropertyBusy { .. } => ErrorKind::Busy,
        }
    }
}

/// Result alias for menu operations.
pub type MenuResult<T> = Result<T, MenuError>;

/// Check that `slot` addresses one of `size` slots.
pub(crate) fn check_slot(slot: usize, size: usize) -> MenuResult<()> {
    if slot >= size {
        return Err(MenuError::SlotOutOfRange { slot, size });
    }
    Ok(())
}

/// Check `from..to` against an inclusive upper limit, then check ordering.
///
/// Bounds are checked first so a reversed pair that is also out of bounds
/// reports as out of range.
pub(crate) fn check_range(from: usize, to: usize, limit: usize, size: usize) -> MenuResult<()> {
    if from > limit || to > limit {
        return Err(MenuError::RangeOutOfBounds { from, to, size });
    }
    if from > to {
        return Err(MenuError::InvalidRange { from, to });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_group_variants() {
        assert_eq!(
            MenuError::SlotOutOfRange { slot: 9, size: 9 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            MenuError::StartOutOfRange {
                start: 1,
                from: 2,
                to: 5
            }
            .kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            MenuError::InvalidRange { from: 5, to: 2 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            MenuError::NoSuchElement {
                index: 5,
                direction: Direction::Next
            }
            .kind(),
            ErrorKind::NoSuchElement
        );
    }

    #[test]
    fn range_checks_bounds_before_order() {
        assert_eq!(
            check_range(12, 3, 9, 10),
            Err(MenuError::RangeOutOfBounds {
                from: 12,
                to: 3,
                size: 10
            })
        );
        assert_eq!(
            check_range(5, 2, 9, 10),
            Err(MenuError::InvalidRange { from: 5, to: 2 })
        );
        assert!(check_range(2, 2, 9, 10).is_ok());
    }

    #[test]
    fn messages_name_the_numbers() {
        let err = MenuError::SlotOutOfRange { slot: 30, size: 27 };
        assert_eq!(
            err.to_string(),
            "slot 30 is out of range for a menu of 27 slots"
        );
        let err = MenuError::NoSuchElement {
            index: 0,
            direction: Direction::Previous,
        };
        assert_eq!(err.to_string(), "cursor at 0 has no previous slot");
    }
}
