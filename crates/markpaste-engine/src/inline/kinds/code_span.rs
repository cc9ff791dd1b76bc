/// Code span delimiter knowledge.
///
/// Code spans are raw zones: no other inline rule applies inside them.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';
}
