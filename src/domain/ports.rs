/// Output settings consumed by the encoder and the hierarchy printer.
pub trait ConfigProvider {
    /// Spaces per nesting level in the encoded JSON.
    fn json_indent(&self) -> usize;
    /// Spaces per nesting level in the printed hierarchy.
    fn tree_indent(&self) -> usize;
}
