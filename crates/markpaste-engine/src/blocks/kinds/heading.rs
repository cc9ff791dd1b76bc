/// ATX heading syntax knowledge.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses `#{1,6} text` into (level, text). Returns `None` when the
    /// marker run is too long, has no trailing space, or no text follows.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let hashes = line.chars().take_while(|&c| c == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        let rest = &line[hashes..];
        if !rest.starts_with(' ') && !rest.starts_with('\t') {
            return None;
        }
        let text = rest.trim();
        if text.is_empty() {
            return None;
        }
        Some((hashes as u8, text))
    }
}
