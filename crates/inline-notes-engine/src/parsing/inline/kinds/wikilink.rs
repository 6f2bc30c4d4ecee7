/// `[[target]]`, `[[target|alias]]` and the embed form `![[target]]`.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    pub const ALIAS: u8 = b'|';
    /// Prefix that turns a link into an embed.
    pub const EMBED: u8 = b'!';
}
