/// One frame's worth of player intent, sampled from the keyboard by the
/// host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    pub forward: f32, // –1 … +1
    pub strafe: f32,  // –1 … +1  (left / right)
    pub turn: f32,    // –1 … +1  (right / left)
    pub run: bool,    // Shift
    pub quit: bool,   // Escape
}

impl InputCmd {
    /// Build from raw key-down flags, one per direction.
    #[allow(clippy::too_many_arguments)]
    pub fn from_keys(
        fwd: bool,
        back: bool,
        left: bool,
        right: bool,
        turn_left: bool,
        turn_right: bool,
        run: bool,
        quit: bool,
    ) -> Self {
        let axis = |pos: bool, neg: bool| pos as i32 as f32 - neg as i32 as f32;
        Self {
            forward: axis(fwd, back),
            strafe: axis(right, left),
            turn: axis(turn_left, turn_right),
            run,
            quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_keys_cancel() {
        let cmd = InputCmd::from_keys(true, true, false, true, true, false, false, false);
        assert_eq!(cmd.forward, 0.0);
        assert_eq!(cmd.strafe, 1.0);
        assert_eq!(cmd.turn, 1.0);
    }
}
