/// Views that take part in hugging transitions between panes.
pub trait HuggingSupport {
    /// Progress of the hugging transition, from `0.0` to `1.0`.
    fn set_hugging_progress(&mut self, progress: f32);

    /// Whether nested scrollable content pages on its own bounds.
    fn set_paging_enabled(&mut self, paging_enabled: bool);
}
