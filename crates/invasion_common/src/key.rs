/// Logical keys the game reacts to, decoupled from any frontend's keycodes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Left,
    Right,
    Space,
    Q,
    None,
}
