//! Top-right-bottom-left (TRBL) shorthand expansion and collapse.

/// One of the four box edges, in TRBL order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

/// A fully populated TRBL quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T> Sides<T> {
    pub fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    pub fn into_array(self) -> [T; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// Expand 1-4 values to all four sides following CSS shorthand rules:
///
/// - 1 value: all sides
/// - 2 values: top/bottom, right/left
/// - 3 values: top, right/left, bottom
/// - 4 values: top, right, bottom, left
///
/// Returns `None` for an empty slice or more than four values.
pub fn expand_trbl<T: Clone>(values: &[T]) -> Option<Sides<T>> {
    match values {
        [v] => Some(Sides::new(v.clone(), v.clone(), v.clone(), v.clone())),
        [tb, rl] => Some(Sides::new(tb.clone(), rl.clone(), tb.clone(), rl.clone())),
        [t, rl, b] => Some(Sides::new(t.clone(), rl.clone(), b.clone(), rl.clone())),
        [t, r, b, l] => Some(Sides::new(t.clone(), r.clone(), b.clone(), l.clone())),
        _ => None,
    }
}

/// Collapse four sides into the shortest equivalent value list.
///
/// Emits one value when all sides match, two when top/bottom and
/// right/left pair up, and all four otherwise.
pub fn collapse_trbl<T: Clone + PartialEq>(sides: &Sides<T>) -> Vec<T> {
    if sides.top == sides.bottom && sides.right == sides.left {
        if sides.top == sides.right {
            vec![sides.top.clone()]
        } else {
            vec![sides.top.clone(), sides.right.clone()]
        }
    } else {
        sides.clone().into_array().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_expand_one_value() {
        assert_eq!(expand_trbl(&["1px"]), Some(Sides::new("1px", "1px", "1px", "1px")));
    }

    #[test]
    fn test_expand_two_values() {
        assert_eq!(expand_trbl(&["1px", "2px"]), Some(Sides::new("1px", "2px", "1px", "2px")));
    }

    #[test]
    fn test_expand_three_values() {
        assert_eq!(
            expand_trbl(&["1px", "2px", "3px"]),
            Some(Sides::new("1px", "2px", "3px", "2px"))
        );
    }

    #[test]
    fn test_expand_four_values() {
        assert_eq!(
            expand_trbl(&["1px", "2px", "3px", "4px"]),
            Some(Sides::new("1px", "2px", "3px", "4px"))
        );
    }

    #[test]
    fn test_expand_rejects_bad_arity() {
        assert_eq!(expand_trbl::<&str>(&[]), None);
        assert_eq!(expand_trbl(&["1", "2", "3", "4", "5"]), None);
    }

    #[test]
    fn test_collapse() {
        assert_eq!(collapse_trbl(&Sides::new(10, 10, 10, 10)), vec![10]);
        assert_eq!(collapse_trbl(&Sides::new(10, 5, 10, 5)), vec![10, 5]);
        assert_eq!(collapse_trbl(&Sides::new(10, 5, 10, 6)), vec![10, 5, 10, 6]);
    }

    #[test]
    fn test_collapse_never_emits_three_values() {
        // right == left but top != bottom still needs all four
        assert_eq!(collapse_trbl(&Sides::new(1, 2, 3, 2)), vec![1, 2, 3, 2]);
    }

    #[test]
    fn test_side_lookup() {
        let sides = Sides::new('t', 'r', 'b', 'l');
        let letters: Vec<char> = Side::ALL.iter().map(|s| *sides.get(*s)).collect();
        assert_eq!(letters, vec!['t', 'r', 'b', 'l']);
    }

    proptest! {
        #[test]
        fn prop_collapse_then_expand_is_identity(t in 0u8..3, r in 0u8..3, b in 0u8..3, l in 0u8..3) {
            let quad = Sides::new(t, r, b, l);
            prop_assert_eq!(expand_trbl(&collapse_trbl(&quad)), Some(quad));
        }

        #[test]
        fn prop_expand_collapse_expand_is_stable(values in prop::collection::vec(0u8..4, 1..=4)) {
            let expanded = expand_trbl(&values).unwrap();
            let collapsed = collapse_trbl(&expanded);
            prop_assert!(collapsed.len() <= 4);
            prop_assert_eq!(expand_trbl(&collapsed), Some(expanded));
        }
    }
}
