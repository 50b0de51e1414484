use shakmaty::{Move, Role};

/// Material value of a piece type.
///
/// Only the ordering matters. The king sits above everything so a
/// threatened king is handled first and never counts as a cheap attacker.
pub const fn piece_value(role: Role) -> u32 {
    match role {
        Role::Pawn => 100,
        Role::Knight => 300,
        Role::Bishop => 320,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => u32::MAX,
    }
}

/// Value of the piece `mv` captures, or 0 for a quiet move.
#[inline]
pub fn capture_value(mv: &Move) -> u32 {
    mv.capture().map_or(0, piece_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Square;

    #[test]
    fn test_value_order() {
        let order = [
            Role::Pawn,
            Role::Knight,
            Role::Bishop,
            Role::Rook,
            Role::Queen,
            Role::King,
        ];
        assert!(
            order
                .windows(2)
                .all(|w| piece_value(w[0]) < piece_value(w[1]))
        );
    }

    #[test]
    fn test_capture_value() {
        let capture = Move::Normal {
            role: Role::Pawn,
            from: Square::E4,
            capture: Some(Role::Knight),
            to: Square::D5,
            promotion: None,
        };
        let quiet = Move::Normal {
            role: Role::Pawn,
            from: Square::E2,
            capture: None,
            to: Square::E4,
            promotion: None,
        };

        assert_eq!(capture_value(&capture), piece_value(Role::Knight));
        assert_eq!(capture_value(&quiet), 0);
    }
}
