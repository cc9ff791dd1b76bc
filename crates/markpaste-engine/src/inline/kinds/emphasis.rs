/// Emphasis delimiter knowledge: strong (`**`/`__`), light (`*`/`_`) and
/// strikethrough (`~~`).
pub struct Emphasis;

impl Emphasis {
    pub const STRONG: [&'static [u8; 2]; 2] = [b"**", b"__"];
    pub const LIGHT: [u8; 2] = [b'*', b'_'];
    pub const STRIKE: &'static [u8; 2] = b"~~";
}
